//! Teacher administration view.

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
    let (banner_area, content_area) = content_with_banner(app.teachers_view.error.as_deref(), area);
    if let (Some(banner_area), Some(error)) = (banner_area, app.teachers_view.error.as_deref()) {
        render_error_banner(f, theme, error, banner_area);
    }
    let (list_area, detail_area) = list_detail_split(content_area);

    let teachers = app
        .store
        .teachers()
        .map(|r| r.teachers.as_slice())
        .unwrap_or(&[]);

    let items: Vec<ListItem> = teachers
        .iter()
        .map(|teacher| ListItem::new(format!("{} ({})", teacher.full_name, teacher.subject)))
        .collect();

    let mut state = ListState::default();
    if let Some(selected) = app.teachers_view.selected {
        if let Some(index) = teachers
            .iter()
            .position(|t| t.teacher_id.as_uuid() == selected)
        {
            state.select(Some(index));
        }
    }

    let title = match app.store.teachers() {
        Some(r) => format!("Teachers ({})", r.total),
        None => "Teachers".to_string(),
    };
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().fg(theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let mut fields = Vec::new();
    if let Some(selected) = app.teachers_view.selected {
        if let Some(teacher) = teachers.iter().find(|t| t.teacher_id.as_uuid() == selected) {
            fields.push(("Teacher ID", Some(teacher.teacher_id.to_string())));
            fields.push(("Name", Some(teacher.full_name.clone())));
            fields.push(("Subject", Some(teacher.subject.clone())));
            fields.push(("Email", Some(teacher.email.clone())));
            fields.push(("Created At", Some(teacher.created_at.to_rfc3339())));
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
