//! Configuration viewer.

use crate::state::App;
use crate::theme::CampusTheme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, theme: &CampusTheme, area: Rect) {
    let widget = Paragraph::new(app.config_view.content.clone())
        .block(
            Block::default()
                .title("Config")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
