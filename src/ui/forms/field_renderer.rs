//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Box title for a field, marking required ones with an asterisk
pub fn field_title(field: &FormField) -> String {
    if field.spec.is_required() {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    }
}

/// The single line shown inside a field box.
///
/// Multi-line values show their last line, prefixed with the number of
/// lines above it.
fn visible_line(field: &FormField, value: &str) -> String {
    if !field.is_multiline() {
        return value.to_string();
    }
    let lines: Vec<&str> = value.split('\n').collect();
    match lines.as_slice() {
        [] | [_] => value.to_string(),
        [.., last] => format!("(+{} lines) {last}", lines.len() - 1),
    }
}

/// Draw a form field, with its validation error (if any) on the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let has_error = field.error.is_some();

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = match (is_active, has_error) {
        (_, true) => Style::default().fg(Color::Red),
        (true, false) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let display_value = field.display_value();
    let content = if display_value.is_empty() && !is_active {
        Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let cursor = if is_active && field.accepts_text() {
            "▌"
        } else {
            ""
        };
        Line::from(vec![
            Span::styled(visible_line(field, &display_value), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let mut block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = &field.error {
        block = block.title_bottom(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(content).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::FieldId;
    use pretty_assertions::assert_eq;

    fn field(id: FieldId) -> FormField {
        FormField::new(id.spec())
    }

    #[test]
    fn test_field_title_marks_required() {
        assert_eq!(field_title(&field(FieldId::Email)), " Email * ");
        assert_eq!(field_title(&field(FieldId::Videos)), " Videos ");
    }

    #[test]
    fn test_visible_line_single_line() {
        let f = field(FieldId::BrandName);
        assert_eq!(visible_line(&f, "Indigo Loom"), "Indigo Loom");
    }

    #[test]
    fn test_visible_line_multiline_shows_last_line() {
        let f = field(FieldId::MakerStory);
        assert_eq!(visible_line(&f, "one"), "one");
        assert_eq!(visible_line(&f, "one\ntwo\nthree"), "(+2 lines) three");
        assert_eq!(visible_line(&f, "one\n"), "(+1 lines) ");
    }
}
