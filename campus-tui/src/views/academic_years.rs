//! Academic year administration view.

use crate::state::App;
use crate::theme::{academic_year_color, CampusTheme};
use crate::views::helpers::{content_with_banner, list_detail_split, render_error_banner};
use crate::widgets::DetailPanel;
use campus_core::EntityIdType;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, theme: &CampusTheme, area: Rect) {
    let (banner_area, content_area) = content_with_banner(app.years_view.error.as_deref(), area);
    if let (Some(banner_area), Some(error)) = (banner_area, app.years_view.error.as_deref()) {
        render_error_banner(f, theme, error, banner_area);
    }
    let (list_area, detail_area) = list_detail_split(content_area);

    let years = app
        .store
        .academic_years()
        .map(|r| r.academic_years.as_slice())
        .unwrap_or(&[]);

    let items: Vec<ListItem> = years
        .iter()
        .map(|year| {
            let marker = if year.active { "[active] " } else { "" };
            ListItem::new(format!("{}{}", marker, year.name))
                .style(Style::default().fg(academic_year_color(year.active, theme)))
        })
        .collect();

    let mut state = ListState::default();
    if let Some(selected) = app.years_view.selected {
        if let Some(index) = years
            .iter()
            .position(|y| y.academic_year_id.as_uuid() == selected)
        {
            state.select(Some(index));
        }
    }

    let title = match app.store.academic_years() {
        Some(r) => format!("Academic Years ({})", r.total),
        None => "Academic Years".to_string(),
    };
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().fg(theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let mut fields = Vec::new();
    if let Some(selected) = app.years_view.selected {
        if let Some(year) = years
            .iter()
            .find(|y| y.academic_year_id.as_uuid() == selected)
        {
            fields.push(("Year ID", Some(year.academic_year_id.to_string())));
            fields.push(("Name", Some(year.name.clone())));
            fields.push(("Starts", Some(year.start_date.to_rfc3339())));
            fields.push(("Ends", Some(year.end_date.to_rfc3339())));
            fields.push(("Active", Some(year.active.to_string())));
        }
    }

    DetailPanel {
        title: "Details",
        fields,
        label_style: Style::default().fg(theme.secondary),
        value_style: Style::default().fg(theme.text),
    }
    .render(f, detail_area);
}
