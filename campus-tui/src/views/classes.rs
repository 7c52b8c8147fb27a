//! Class administration view.

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
    let (banner_area, content_area) = content_with_banner(app.classes_view.error.as_deref(), area);
    if let (Some(banner_area), Some(error)) = (banner_area, app.classes_view.error.as_deref()) {
        render_error_banner(f, theme, error, banner_area);
    }
    let (list_area, detail_area) = list_detail_split(content_area);

    let classes = app
        .store
        .classes()
        .map(|r| r.classes.as_slice())
        .unwrap_or(&[]);

    let items: Vec<ListItem> = classes
        .iter()
        .map(|class| ListItem::new(format!("{} (grade {})", class.name, class.grade_level)))
        .collect();

    let mut state = ListState::default();
    if let Some(selected) = app.classes_view.selected {
        if let Some(index) = classes.iter().position(|c| c.class_id.as_uuid() == selected) {
            state.select(Some(index));
        }
    }

    let title = match app.store.classes() {
        Some(r) => format!("Classes ({})", r.total),
        None => "Classes".to_string(),
    };
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().fg(theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let mut fields = Vec::new();
    if let Some(selected) = app.classes_view.selected {
        if let Some(class) = classes.iter().find(|c| c.class_id.as_uuid() == selected) {
            // The homeroom teacher's name comes from the teacher cache when
            // that page has been visited; otherwise fall back to the id.
            let homeroom = class.homeroom_teacher_id.map(|id| {
                app.store
                    .teachers()
                    .and_then(|r| r.teachers.iter().find(|t| t.teacher_id == id))
                    .map(|t| t.full_name.clone())
                    .unwrap_or_else(|| id.to_string())
            });
            fields.push(("Class ID", Some(class.class_id.to_string())));
            fields.push(("Name", Some(class.name.clone())));
            fields.push(("Grade", Some(class.grade_level.to_string())));
            fields.push(("Homeroom Teacher", homeroom));
            fields.push(("Academic Year", Some(class.academic_year_id.to_string())));
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
