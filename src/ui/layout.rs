//! Layout components (form area, action panel, status bar)

use crate::platform::SUBMIT_SHORTCUT;
use crate::registration::ControlKind;
use crate::state::{AppState, Form, ACTION_PANEL_WIDTH, STATUS_BAR_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and the action panel, leaving the
/// bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                    // Content
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),                     // Form
            Constraint::Length(ACTION_PANEL_WIDTH), // Action panel
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(STATUS_BAR_HEIGHT),
        width: area.width,
        height: STATUS_BAR_HEIGHT,
    };

    let mut spans = vec![];

    // Status message, then key hints
    if let Some(msg) = &state.status_message {
        let color = if state.form.error_count() > 0 {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::styled(format!(" {msg} "), Style::default().fg(color)));
        spans.push(Span::raw("|"));
    }

    spans.push(Span::styled(
        format!(" {}", key_hints(state)),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: status_area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: STATUS_BAR_HEIGHT,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever currently has focus
fn key_hints(state: &AppState) -> String {
    if state.receipt.is_some() || state.current_error().is_some() {
        return "Enter:close".to_string();
    }

    let form = &state.form;
    let back = if form.has_back() { "  Esc:back" } else { "" };
    if form.is_buttons_row_active() {
        return format!("j/k:select  Enter:activate  Tab:fields{back}");
    }

    let action = match form.get_field(form.active_field_index).map(|f| f.spec.kind) {
        Some(ControlKind::Choice(_)) => "←/→:choose",
        Some(ControlKind::Toggle { .. }) => "Space:toggle",
        Some(ControlKind::Multiline) => "Enter:newline",
        _ => "Enter:next",
    };
    format!("Tab/↑↓:nav  {action}  {SUBMIT_SHORTCUT}:register{back}")
}
