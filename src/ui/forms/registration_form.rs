//! Maker registration form rendering

use super::field_renderer::draw_field;
use crate::state::{AppState, FormButton, RegistrationForm, FIELD_HEIGHT};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the registration form (left) and its action panel (right)
pub fn draw_registration_form(
    frame: &mut Frame,
    form_area: Rect,
    action_area: Rect,
    state: &AppState,
) {
    draw_fields(frame, form_area, &state.form);
    draw_action_panel(frame, action_area, &state.form);
}

/// Draw the scrolling window of field boxes
fn draw_fields(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let form_focused = !form.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let shown_to = {
        let inner_rows = (area.height.saturating_sub(2) / FIELD_HEIGHT) as usize;
        (form.scroll_offset + inner_rows.max(1)).min(form.fields.len())
    };
    let block = Block::default()
        .title(format!(
            " Maker Registration · {} ",
            form.active_section().title()
        ))
        .title_bottom(format!(
            " {}-{} of {} ",
            form.scroll_offset + 1,
            shown_to,
            form.fields.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut y = inner.y;
    for (index, field) in form.fields.iter().enumerate().skip(form.scroll_offset) {
        if y + FIELD_HEIGHT > inner.y + inner.height {
            break;
        }
        let field_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: FIELD_HEIGHT,
        };
        draw_field(frame, field_area, field, form.active_field_index == index);
        y += FIELD_HEIGHT;
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let is_focused = form.is_buttons_row_active();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let buttons = form.buttons();
    let constraints: Vec<Constraint> = buttons
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    // Primary action first
    for (index, button) in buttons.iter().enumerate() {
        let accent = match button {
            FormButton::Register => Color::Green,
            FormButton::Back => Color::Gray,
        };
        render_action_button(
            frame,
            button_chunks[index],
            button.label(),
            is_focused && form.selected_button == index,
            accent,
        );
    }
}
