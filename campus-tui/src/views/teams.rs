//! Public team list view.

use crate::state::App;
use crate::theme::CampusTheme;
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
    let (banner_area, content_area) = content_with_banner(app.teams_view.error.as_deref(), area);
    if let (Some(banner_area), Some(error)) = (banner_area, app.teams_view.error.as_deref()) {
        render_error_banner(f, theme, error, banner_area);
    }
    let (list_area, detail_area) = list_detail_split(content_area);

    let teams = app.store.teams().map(|r| r.teams.as_slice()).unwrap_or(&[]);

    let items: Vec<ListItem> = teams
        .iter()
        .map(|team| ListItem::new(format!("{} ({} members)", team.name, team.member_count)))
        .collect();

    let mut state = ListState::default();
    if let Some(selected) = app.teams_view.selected {
        if let Some(index) = teams.iter().position(|t| t.team_id.as_uuid() == selected) {
            state.select(Some(index));
        }
    }

    let title = match app.store.teams() {
        Some(r) => format!("Teams ({})", r.total),
        None => "Teams".to_string(),
    };
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().fg(theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let mut fields = Vec::new();
    if let Some(selected) = app.teams_view.selected {
        if let Some(team) = teams.iter().find(|t| t.team_id.as_uuid() == selected) {
            fields.push(("Team ID", Some(team.team_id.to_string())));
            fields.push(("Name", Some(team.name.clone())));
            fields.push(("Motto", team.motto.clone()));
            fields.push(("Members", Some(team.member_count.to_string())));
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
