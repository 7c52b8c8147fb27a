//! View rendering dispatch.

pub mod academic_years;
pub mod classes;
pub mod config;
pub mod helpers;
pub mod page;
pub mod teachers;
pub mod teams;

pub use helpers::{content_with_banner, list_detail_split, render_error_banner};

use crate::nav::Page;
use crate::notifications::NotificationLevel;
use crate::state::App;
use crate::theme::CampusTheme;
use crate::widgets::ConfirmOverlay;
use campus_core::UserRole;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let theme = app.current_theme();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, &theme, layout[0]);

    match app.active_page {
        Page::Home | Page::About => page::render(f, app, &theme, layout[1]),
        Page::Teams => teams::render(f, app, &theme, layout[1]),
        Page::Teachers => teachers::render(f, app, &theme, layout[1]),
        Page::Classes => classes::render(f, app, &theme, layout[1]),
        Page::AcademicYears => academic_years::render(f, app, &theme, layout[1]),
        Page::ConfigViewer => config::render(f, app, &theme, layout[1]),
    }

    render_footer(f, app, &theme, layout[2]);

    if let Some(dialog) = &app.confirm {
        ConfirmOverlay {
            title: &dialog.title,
            message: &dialog.message,
            border_style: Style::default().fg(theme.error),
            text_style: Style::default().fg(theme.text),
        }
        .render(f, f.size());
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, theme: &CampusTheme, area: ratatui::layout::Rect) {
    let user = match &app.auth {
        Some(auth) => {
            let role = match auth.user.role {
                UserRole::Admin => "admin",
                UserRole::Staff => "staff",
            };
            format!("{} ({})", auth.user.display_name, role)
        }
        None => "guest".to_string(),
    };
    let title = format!("CAMPUS | {} | {}", app.active_page.title(), user);
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(theme.primary),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, theme: &CampusTheme, area: ratatui::layout::Rect) {
    let help = if app.confirm.is_some() {
        "Enter confirm • Esc cancel"
    } else if app.list_view(app.active_page).is_some() {
        "j/k move • d delete • r refresh • Tab switch page • 1-7 jump • q quit"
    } else {
        "Tab switch page • 1-7 jump • r refresh • q quit"
    };
    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "SUCCESS",
        };
        let color = crate::theme::notification_color(note.level, theme);
        (format!("{}: {}", label, note.message), Style::default().fg(color))
    } else {
        (help.to_string(), Style::default().fg(theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
