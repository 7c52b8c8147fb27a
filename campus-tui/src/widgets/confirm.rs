//! Centered confirm/cancel dialog overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Modal drawn over the active page while a destructive action awaits
/// confirmation. Enter confirms, Esc cancels.
pub struct ConfirmOverlay<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub border_style: Style,
    pub text_style: Style,
}

impl<'a> ConfirmOverlay<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let popup = centered_rect(50, 80, area);
        f.render_widget(Clear, popup);

        let lines = vec![
            Line::styled(self.message, self.text_style),
            Line::raw(""),
            Line::from(vec![
                Span::styled("[Enter]", self.text_style.add_modifier(Modifier::BOLD)),
                Span::styled(" confirm   ", self.text_style),
                Span::styled("[Esc]", self.text_style.add_modifier(Modifier::BOLD)),
                Span::styled(" cancel", self.text_style),
            ]),
        ];

        let widget = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(widget, popup);
    }
}

/// Rect of `percent_x` width centered in `area`, tall enough for the dialog.
fn centered_rect(percent_x: u16, max_width: u16, area: Rect) -> Rect {
    let width = ((area.width * percent_x) / 100).min(max_width).max(20);
    let height = 7u16.min(area.height);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1]);
    vertical[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_fits_inside_area() {
        let area = Rect::new(0, 0, 120, 40);
        let popup = centered_rect(50, 80, area);
        assert!(popup.x + popup.width <= area.width);
        assert!(popup.y + popup.height <= area.height);
        assert_eq!(popup.width, 60);
    }

    #[test]
    fn popup_clamps_to_tiny_terminal() {
        let area = Rect::new(0, 0, 10, 4);
        let popup = centered_rect(50, 80, area);
        assert!(popup.height <= area.height);
    }
}
