//! Registration form state and submit state machine

use super::field::FormField;
use crate::error::ValidationError;
use crate::registration::{validate, FieldId, FieldSource, MakerRecord, RawValue, Section, SCHEMA};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Accepting input; errors from the last attempt may be attached
    #[default]
    Editing,
    /// Validation passed and the record has been handed out
    Submitted,
}

/// Buttons on the action panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Register,
    Back,
}

impl FormButton {
    pub fn label(self) -> &'static str {
        match self {
            FormButton::Register => "Register",
            FormButton::Back => "Back",
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every constraint passed; the form is now `Submitted`
    Accepted(MakerRecord),
    /// Errors were attached to the offending fields
    Rejected(Vec<ValidationError>),
    /// A record was already handed out and the form has not been reset
    AlreadySubmitted,
}

/// The maker registration form: one control per schema entry plus the action panel
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    /// Controls in schema order (`FieldId as usize` indexes this)
    pub fields: Vec<FormField>,
    /// Index of the focused control; `fields.len()` is the action panel
    pub active_field_index: usize,
    /// Which button is selected when on the action panel
    pub selected_button: usize,
    /// First field shown in the scrolling field list
    pub scroll_offset: usize,
    has_back: bool,
    phase: FormPhase,
}

impl RegistrationForm {
    pub fn new(has_back: bool) -> Self {
        Self {
            fields: SCHEMA.iter().map(FormField::new).collect(),
            active_field_index: 0,
            selected_button: 0, // Register
            scroll_offset: 0,
            has_back,
            phase: FormPhase::Editing,
        }
    }

    /// Discard all input and return to a fresh editing state
    pub fn reset(&mut self) {
        *self = Self::new(self.has_back);
    }

    #[cfg(test)]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn has_back(&self) -> bool {
        self.has_back
    }

    /// Buttons on the action panel, primary first
    pub fn buttons(&self) -> &'static [FormButton] {
        if self.has_back {
            &[FormButton::Register, FormButton::Back]
        } else {
            &[FormButton::Register]
        }
    }

    /// Returns true if the action panel is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % self.buttons().len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = self.buttons().len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn selected_action(&self) -> FormButton {
        let buttons = self.buttons();
        buttons[self.selected_button.min(buttons.len() - 1)]
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        &self.fields[id as usize]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        &mut self.fields[id as usize]
    }

    /// Focus a specific field
    pub fn focus(&mut self, id: FieldId) {
        self.active_field_index = id as usize;
    }

    /// Section of the focused field (the last section on the action panel)
    pub fn active_section(&self) -> Section {
        self.fields
            .get(self.active_field_index)
            .or_else(|| self.fields.last())
            .map(|f| f.spec.section)
            .unwrap_or(Section::Basic)
    }

    /// Number of fields currently showing an error
    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|f| f.error.is_some()).count()
    }

    /// Validate the whole form.
    ///
    /// On success the form moves to `Submitted` and the record is returned.
    /// On failure every field's error is replaced by the result of this
    /// attempt and focus jumps to the first invalid field.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase == FormPhase::Submitted {
            return SubmitOutcome::AlreadySubmitted;
        }

        let result = validate(&*self);
        for field in &mut self.fields {
            field.error = None;
        }

        match result {
            Ok(record) => {
                self.phase = FormPhase::Submitted;
                SubmitOutcome::Accepted(record)
            }
            Err(errors) => {
                for err in &errors {
                    self.field_mut(err.field()).error = Some(err.to_string());
                }
                if let Some(first) = errors.first() {
                    self.focus(first.field());
                }
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Scroll so the focused field is inside a window of `visible` rows
    pub fn ensure_active_visible(&mut self, visible: usize) {
        let visible = visible.max(1);
        let target = self.active_field_index.min(self.fields.len().saturating_sub(1));
        if target < self.scroll_offset {
            self.scroll_offset = target;
        } else if target >= self.scroll_offset + visible {
            self.scroll_offset = target + 1 - visible;
        }
    }

    /// Scroll the field list without moving focus
    pub fn scroll_by(&mut self, delta: isize, visible: usize) {
        let max_offset = self.fields.len().saturating_sub(visible.max(1));
        self.scroll_offset = self
            .scroll_offset
            .saturating_add_signed(delta)
            .min(max_offset);
    }
}

impl FieldSource for RegistrationForm {
    fn raw(&self, id: FieldId) -> RawValue<'_> {
        self.field(id).raw()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + action panel
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
