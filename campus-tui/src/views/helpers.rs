//! Common view rendering helpers.

use crate::theme::CampusTheme;
use crate::widgets::ErrorBanner;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    Frame,
};

/// Reserve room for the error banner above the page content when a load
/// has failed. Returns the banner area (if any) and the content area.
pub fn content_with_banner(error: Option<&str>, area: Rect) -> (Option<Rect>, Rect) {
    if error.is_some() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(ErrorBanner::height()), Constraint::Min(0)])
            .split(area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, area)
    }
}

pub fn render_error_banner(f: &mut Frame<'_>, theme: &CampusTheme, message: &str, area: Rect) {
    ErrorBanner {
        message,
        style: Style::default().fg(theme.error),
    }
    .render(f, area);
}

/// Standard list/detail two-column layout used by the table pages.
pub fn list_detail_split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    (chunks[0], chunks[1])
}
