//! Detail panel widget for showing a record's field/value pairs.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Bordered panel listing the fields of the selected record. Fields whose
/// value is `None` (e.g. a class without a homeroom teacher) render as an
/// em-dash placeholder in the label style.
pub struct DetailPanel<'a> {
    pub title: &'a str,
    pub fields: Vec<(&'a str, Option<String>)>,
    pub label_style: Style,
    pub value_style: Style,
}

impl<'a> DetailPanel<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line> = self
            .fields
            .iter()
            .map(|(label, value)| {
                let value_span = match value {
                    Some(v) => Span::styled(v.clone(), self.value_style),
                    None => Span::styled("\u{2014}", self.label_style),
                };
                Line::from(vec![
                    Span::styled(format!("{}: ", label), self.label_style),
                    value_span,
                ])
            })
            .collect();

        let widget = Paragraph::new(Text::from(lines))
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .wrap(Wrap { trim: true });

        f.render_widget(widget, area);
    }
}
