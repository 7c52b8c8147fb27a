//! Inline error banner shown at the top of a page that failed to load.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Failed loads keep whatever was cached on screen; this banner carries the
/// error text above the stale content instead of replacing it.
pub struct ErrorBanner<'a> {
    pub message: &'a str,
    pub style: Style,
}

impl<'a> ErrorBanner<'a> {
    pub fn height() -> u16 {
        3
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled("Load failed: ", self.style.add_modifier(Modifier::BOLD)),
            Span::styled(self.message, self.style),
        ]);
        let widget = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).border_style(self.style))
            .wrap(Wrap { trim: true });
        f.render_widget(widget, area);
    }
}
