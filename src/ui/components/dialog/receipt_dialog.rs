//! Receipt dialog shown after a registration is accepted

use crate::platform::COPY_SHORTCUT;
use crate::state::Receipt;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const MAX_WIDTH: u16 = 72;

/// Summary above the scrolling body
fn header_lines(receipt: &Receipt) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("{} by {}", receipt.brand_name, receipt.maker_name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} fields recorded.", receipt.field_count),
            Style::default().fg(Color::Gray),
        )),
    ]
}

/// One `Label: value` line per submitted field; extra lines of a
/// multi-line value are indented below it
fn body_lines(receipt: &Receipt) -> Vec<Line<'_>> {
    let label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for entry in &receipt.entries {
        let mut values = entry.value.split('\n');
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", entry.label), label_style),
            Span::raw(values.next().unwrap_or_default()),
        ]));
        lines.extend(values.map(|rest| Line::from(format!("  {rest}"))));
    }
    lines
}

/// Render the submitted record as a scrollable dialog centered on the screen
pub fn render_receipt_dialog(frame: &mut Frame, receipt: &Receipt) {
    let area = frame.area();
    let width = MAX_WIDTH.min(area.width);
    let height = area.height.saturating_sub(2).max(8).min(area.height);
    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = Line::from(vec![
        Span::raw(" "),
        Span::styled("j/k", key_style),
        Span::raw(" scroll  "),
        Span::styled("y", key_style),
        Span::raw("/"),
        Span::styled(COPY_SHORTCUT, key_style),
        Span::raw(" copy JSON  "),
        Span::styled("Enter", key_style),
        Span::raw(" new form "),
    ]);

    let block = Block::default()
        .title(Span::styled(
            " Registration submitted! ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(hint)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Summary + blank
            Constraint::Min(0),    // Submitted values
        ])
        .horizontal_margin(1)
        .split(inner);

    frame.render_widget(Paragraph::new(header_lines(receipt)), chunks[0]);
    frame.render_widget(
        Paragraph::new(body_lines(receipt))
            .wrap(Wrap { trim: false })
            .scroll((receipt.scroll, 0)),
        chunks[1],
    );
}
