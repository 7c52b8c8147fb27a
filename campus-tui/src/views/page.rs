//! Content page renderer shared by Home and About.

use crate::state::App;
use crate::theme::CampusTheme;
use crate::views::helpers::{content_with_banner, render_error_banner};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, theme: &CampusTheme, area: Rect) {
    let view = match app.content_view(app.active_page) {
        Some(view) => view,
        None => return,
    };
    let (banner_area, content_area) = content_with_banner(view.error.as_deref(), area);
    if let (Some(banner_area), Some(error)) = (banner_area, view.error.as_deref()) {
        render_error_banner(f, theme, error, banner_area);
    }

    let slug = app.active_page.slug().unwrap_or_default();
    let bundle = app.store.page(slug);

    let mut lines: Vec<Line> = Vec::new();
    match bundle {
        Some(bundle) => {
            lines.push(Line::styled(
                bundle.document.title.clone(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::raw(""));
            for section in &bundle.document.sections {
                if let Some(heading) = &section.heading {
                    lines.push(Line::styled(
                        heading.clone(),
                        Style::default().fg(theme.accent),
                    ));
                }
                for body_line in section.body.lines() {
                    lines.push(Line::styled(
                        body_line.to_string(),
                        Style::default().fg(theme.text),
                    ));
                }
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(Span::styled(
                format!("Updated {}", bundle.document.updated_at.to_rfc3339()),
                Style::default().fg(theme.text_dim),
            )));
        }
        None => {
            lines.push(Line::styled(
                "No content available",
                Style::default().fg(theme.text_dim),
            ));
        }
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .title(app.active_page.title())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .wrap(Wrap { trim: false })
        .scroll((view.scroll, 0));
    f.render_widget(widget, content_area);
}
