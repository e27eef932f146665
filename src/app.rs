//! Application state and core logic

use crate::config::TuiConfig;
use crate::error::ValidationError;
use crate::handler::{BackHandler, SubmitHandler};
use crate::registration::{find_by_key, ControlKind};
use crate::state::{
    visible_field_rows, AppState, Form, FormButton, Receipt, SubmitOutcome, UiArea, FIELD_HEIGHT,
};
use crate::ui::BUTTON_HEIGHT;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::collections::BTreeMap;

/// Main application struct
pub struct App<S, B> {
    /// Current application state
    pub state: AppState,
    /// Receives accepted registrations
    submit_handler: S,
    /// Optional back navigation; the Back control is only shown when present
    back_handler: Option<B>,
    /// Initial values applied to every fresh form
    prefill: BTreeMap<String, String>,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl<S: SubmitHandler, B: BackHandler> App<S, B> {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, submit_handler: S, back_handler: Option<B>) -> Self {
        let mut app = Self {
            state: AppState::new(back_handler.is_some()),
            submit_handler,
            back_handler,
            prefill: config.prefill(),
            terminal_size: None,
        };
        app.apply_prefill();
        app
    }

    pub fn submit_handler(&self) -> &S {
        &self.submit_handler
    }

    pub fn back_handler(&self) -> Option<&B> {
        self.back_handler.as_ref()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Number of field boxes that fit on screen
    pub fn visible_field_rows(&self) -> usize {
        let height = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
        visible_field_rows(height)
    }

    /// Copy configured initial values into the form
    fn apply_prefill(&mut self) {
        for (key, value) in &self.prefill {
            match find_by_key(key) {
                Some(spec) => {
                    if !self.state.form.field_mut(spec.id).set_from_str(value) {
                        tracing::warn!("Ignoring prefill for {key}: unrecognized value {value:?}");
                    }
                }
                None => tracing::warn!("Ignoring prefill for unknown field {key}"),
            }
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Dialogs are modal
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }
        if self.state.receipt.is_some() {
            return self.handle_receipt_key(key);
        }

        self.handle_form_key(key);
        self.state
            .form
            .ensure_active_visible(self.visible_field_rows());
        Ok(())
    }

    /// Handle keys while the receipt dialog is shown
    fn handle_receipt_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('y') => self.copy_receipt(),
            KeyCode::Char('c') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_receipt()
            }
            KeyCode::Enter | KeyCode::Esc => self.dismiss_receipt(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_receipt(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_receipt(1),
            KeyCode::PageUp => self.scroll_receipt(-10),
            KeyCode::PageDown => self.scroll_receipt(10),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the registration form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_action_panel = self.state.form.is_buttons_row_active();
        let kind = self
            .state
            .form
            .get_field(self.state.form.active_field_index)
            .map(|f| f.spec.kind);

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Up/Down move between buttons on the action panel, between fields elsewhere
            KeyCode::Up | KeyCode::Char('k') if on_action_panel => self.state.form.prev_button(),
            KeyCode::Down | KeyCode::Char('j') if on_action_panel => {
                self.state.form.next_button()
            }
            KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Down => self.state.form.next_field(),
            KeyCode::Enter if on_action_panel => match self.state.form.selected_action() {
                FormButton::Register => self.submit(),
                FormButton::Back => self.back(),
            },
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Esc => self.back(),
            _ if on_action_panel => {}
            // Selectors and toggles
            KeyCode::Left if matches!(kind, Some(ControlKind::Choice(_))) => {
                self.cycle_active_choice(false)
            }
            KeyCode::Right | KeyCode::Char(' ')
                if matches!(kind, Some(ControlKind::Choice(_))) =>
            {
                self.cycle_active_choice(true)
            }
            KeyCode::Char(' ') | KeyCode::Enter
                if matches!(kind, Some(ControlKind::Toggle { .. })) =>
            {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.toggle();
                }
            }
            // Enter in multi-line fields adds a newline, elsewhere it advances
            KeyCode::Enter if matches!(kind, Some(ControlKind::Multiline)) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char('\n');
                }
            }
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    fn cycle_active_choice(&mut self, forward: bool) {
        if let Some(field) = self.state.form.get_active_field_mut() {
            field.cycle_choice(forward);
        }
    }

    /// Validate the form and hand an accepted record to the submit handler
    pub fn submit(&mut self) {
        match self.state.form.submit() {
            SubmitOutcome::Accepted(record) => {
                tracing::info!(brand = %record.brand_name, "Registration accepted");
                let receipt = Receipt::from_record(&record);
                if let Err(err) = self.submit_handler.on_submit(record) {
                    tracing::error!("Submit handler failed: {err:?}");
                    self.push_error(format!("Submission failed: {err}"));
                }
                match receipt {
                    Ok(receipt) => self.state.receipt = Some(receipt),
                    Err(err) => {
                        // Still leave the submitted state behind
                        self.push_error(format!("Could not render receipt: {err}"));
                        self.dismiss_receipt();
                    }
                }
                self.state.status_message = None;
            }
            SubmitOutcome::Rejected(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field().key()).collect();
                tracing::debug!(?fields, "Registration rejected");
                for err in &errors {
                    // Only reachable through a configured prefill
                    if let ValidationError::InvalidEnumValue { field, value, .. } = err {
                        tracing::warn!(
                            field = field.key(),
                            %value,
                            "Value outside the allowed set"
                        );
                    }
                }
                let noun = if errors.len() == 1 { "field needs" } else { "fields need" };
                self.state.status_message = Some(format!("{} {noun} attention", errors.len()));
            }
            SubmitOutcome::AlreadySubmitted => {
                tracing::debug!("Ignoring submit while a receipt is pending");
            }
        }
    }

    /// Invoke the back handler, if any, without validating
    pub fn back(&mut self) {
        if let Some(handler) = self.back_handler.as_mut() {
            tracing::debug!("Back pressed");
            handler.on_back();
        }
    }

    /// Close the receipt and start over with a fresh form
    pub fn dismiss_receipt(&mut self) {
        self.state.receipt = None;
        self.state.form.reset();
        self.apply_prefill();
    }

    fn scroll_receipt(&mut self, delta: i16) {
        if let Some(receipt) = self.state.receipt.as_mut() {
            receipt.scroll_by(delta);
        }
    }

    fn copy_receipt(&mut self) {
        let Some(json) = self.state.receipt.as_ref().map(|r| r.json.clone()) else {
            return;
        };
        match copy_to_clipboard(&json) {
            Ok(()) => {
                self.state.status_message = Some(format!("Copied {} chars", json.len()));
            }
            Err(err) => self.push_error(format!("Failed to copy to clipboard: {err}")),
        }
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_dialog() {
            return Ok(());
        }
        let size = self.terminal_size.unwrap_or((24, 80));
        let visible = self.visible_field_rows();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if UiArea::FormContent.contains(mouse.column, mouse.row, size) {
                    let row = UiArea::FormContent.relative_row(mouse.row) / FIELD_HEIGHT;
                    let index = self.state.form.scroll_offset + row as usize;
                    if index < self.state.form.fields.len() && (row as usize) < visible {
                        self.state.form.set_active_field(index);
                    }
                } else if UiArea::ActionPanel.contains(mouse.column, mouse.row, size) {
                    let index =
                        (UiArea::ActionPanel.relative_row(mouse.row) / BUTTON_HEIGHT) as usize;
                    if index < self.state.form.buttons().len() {
                        let form = &mut self.state.form;
                        form.set_active_field(form.fields.len());
                        form.selected_button = index;
                        match form.selected_action() {
                            FormButton::Register => self.submit(),
                            FormButton::Back => self.back(),
                        }
                    }
                }
                // A rejected submit moves focus to the first invalid field
                self.state.form.ensure_active_visible(visible);
            }
            MouseEventKind::ScrollUp => self.state.form.scroll_by(-1, visible),
            MouseEventKind::ScrollDown => self.state.form.scroll_by(1, visible),
            _ => {}
        }
        Ok(())
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
