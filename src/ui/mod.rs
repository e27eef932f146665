//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

pub use components::BUTTON_HEIGHT;

use crate::state::AppState;
use components::{render_error_dialog, render_receipt_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let (form_area, action_area) = layout::create_layout(frame.area());

    forms::draw_registration_form(frame, form_area, action_area, state);

    // Draw status bar
    layout::draw_status_bar(frame, state);

    // Dialogs render on top; errors above the receipt
    if let Some(receipt) = &state.receipt {
        render_receipt_dialog(frame, receipt);
    }
    if let Some(error) = state.current_error() {
        render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::{ControlKind, FieldId, SCHEMA};
    use crate::state::{Form, Receipt, SubmitOutcome};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_fresh_form_renders_first_fields_and_buttons() {
        let screen = render(&AppState::new(true));
        assert!(screen.contains("Maker Registration · Basic Information"));
        assert!(screen.contains(" Brand/Logo Name * "));
        assert!(screen.contains("Register"));
        assert!(screen.contains("Back"));
        assert!(screen.contains("1-7 of 44"));
    }

    #[test]
    fn test_back_button_hidden_without_handler() {
        let screen = render(&AppState::new(false));
        assert!(screen.contains("Register"));
        assert!(!screen.contains("Back"));
    }

    #[test]
    fn test_errors_render_inline() {
        let mut state = AppState::new(true);
        state.form.submit();
        state.status_message = Some("28 fields need attention".to_string());
        let screen = render(&state);
        assert!(screen.contains("Brand/Logo Name is required"));
        assert!(screen.contains("28 fields need attention"));
    }

    #[test]
    fn test_scrolled_form_shows_focused_field() {
        let mut state = AppState::new(true);
        state.form.focus(FieldId::State);
        state.form.ensure_active_visible(7);
        let screen = render(&state);
        assert!(screen.contains(" State * "));
        assert!(!screen.contains("Brand/Logo Name"));
        assert!(screen.contains("Location"));
    }

    #[test]
    fn test_gender_selector_renders_value() {
        let mut state = AppState::new(true);
        state.form.field_mut(FieldId::Gender).cycle_choice(true);
        state.form.focus(FieldId::Gender);
        let screen = render(&state);
        assert!(screen.contains("◀ he ▶"));
    }

    #[test]
    fn test_action_panel_focus_marks_selected_button() {
        let mut state = AppState::new(true);
        state.form.set_active_field(state.form.fields.len());
        let screen = render(&state);
        assert!(screen.contains("▸Register"));
    }

    #[test]
    fn test_receipt_dialog_shows_submitted_record() {
        let mut state = AppState::new(true);
        for spec in SCHEMA.iter().filter(|s| s.is_required()) {
            let field = state.form.field_mut(spec.id);
            match spec.kind {
                ControlKind::Email => field.set_from_str("asha@example.com"),
                ControlKind::Date => field.set_from_str("2024-03-15"),
                ControlKind::Choice(_) => field.set_from_str("she"),
                _ => field.set_from_str("value"),
            };
        }
        state.form.field_mut(FieldId::BrandName).set_from_str("Indigo Loom");
        state.form.field_mut(FieldId::MakerName).set_from_str("Asha");
        state.form.field_mut(FieldId::CraftType).set_from_str("Ikat weaving");
        let SubmitOutcome::Accepted(record) = state.form.submit() else {
            panic!("expected the form to be accepted");
        };
        state.receipt = Some(Receipt::from_record(&record).unwrap());

        let screen = render(&state);
        assert!(screen.contains("Registration submitted!"));
        assert!(screen.contains("Indigo Loom by Asha"));
        assert!(screen.contains("29 fields recorded."));
        assert!(screen.contains("Email: asha@example.com"));
        assert!(screen.contains("Craft Type: Ikat weaving"));
    }

    #[test]
    fn test_error_dialog_renders() {
        let mut state = AppState::new(true);
        state.push_error("Submission failed: disk full".to_string());
        let screen = render(&state);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Submission failed: disk full"));
    }
}
