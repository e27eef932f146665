//! Application state definitions

use super::forms::RegistrationForm;
use crate::registration::{MakerRecord, SCHEMA};
use anyhow::Result;
use serde_json::Value;
use std::collections::VecDeque;

/// One submitted value, labeled for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptEntry {
    pub label: &'static str,
    pub value: String,
}

/// An accepted registration, shown until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub brand_name: String,
    pub maker_name: String,
    pub field_count: usize,
    /// Every submitted value in form order; absent optionals are skipped
    pub entries: Vec<ReceiptEntry>,
    /// Pretty-printed JSON of the submitted record
    pub json: String,
    /// First visible line of the receipt body
    pub scroll: u16,
}

impl Receipt {
    pub fn from_record(record: &MakerRecord) -> Result<Self> {
        let value = serde_json::to_value(record)?;
        let entries = SCHEMA
            .iter()
            .filter_map(|spec| {
                let value = match value.get(spec.key)? {
                    Value::String(s) => s.clone(),
                    Value::Bool(true) => "Yes".to_string(),
                    Value::Bool(false) => "No".to_string(),
                    other => other.to_string(),
                };
                Some(ReceiptEntry {
                    label: spec.label,
                    value,
                })
            })
            .collect();

        Ok(Self {
            brand_name: record.brand_name.clone(),
            maker_name: record.maker_name.clone(),
            field_count: record.filled_field_count(),
            entries,
            json: serde_json::to_string_pretty(record)?,
            scroll: 0,
        })
    }

    /// Number of body lines, counting each line of multi-line values
    pub fn line_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.value.split('\n').count())
            .sum()
    }

    pub fn scroll_by(&mut self, delta: i16) {
        let max = u16::try_from(self.line_count()).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The registration form being edited
    pub form: RegistrationForm,
    /// Receipt of the last accepted submission
    pub receipt: Option<Receipt>,
    /// Pending error messages, shown one at a time
    pub error_queue: VecDeque<String>,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(has_back: bool) -> Self {
        Self {
            form: RegistrationForm::new(has_back),
            receipt: None,
            error_queue: VecDeque::new(),
            status_message: None,
        }
    }

    /// Queue an error message for display
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Whether a modal dialog is covering the form
    pub fn has_dialog(&self) -> bool {
        self.current_error().is_some() || self.receipt.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::{FieldSource, RawValue};

    /// Required fields filled, multi-line values on two lines, optional short text blank
    struct Filled;

    impl FieldSource for Filled {
        fn raw(&self, id: crate::registration::FieldId) -> RawValue<'_> {
            use crate::registration::ControlKind;
            match id.spec().kind {
                ControlKind::Email => RawValue::Text("asha@example.com"),
                ControlKind::Date => RawValue::Text("2024-03-15"),
                ControlKind::Choice(_) => RawValue::Choice(Some("she")),
                ControlKind::Toggle { .. } => RawValue::Toggle(false),
                ControlKind::Multiline => RawValue::Text("line one\nline two"),
                ControlKind::Text if id.spec().is_required() => RawValue::Text("value"),
                ControlKind::Text => RawValue::Text(""),
            }
        }
    }

    fn receipt() -> Receipt {
        let record = crate::registration::validate(&Filled).unwrap();
        Receipt::from_record(&record).unwrap()
    }

    #[test]
    fn test_receipt_lists_submitted_values_in_form_order() {
        let receipt = receipt();
        let first = &receipt.entries[0];
        assert_eq!((first.label, first.value.as_str()), ("Brand/Logo Name", "value"));
        assert!(receipt
            .entries
            .iter()
            .any(|e| e.label == "Craft Type" && e.value == "value"));
        assert!(receipt.entries.iter().any(|e| e.label == "Gender" && e.value == "she"));
        let last = receipt.entries.last().unwrap();
        assert_eq!((last.label, last.value.as_str()), ("Subscribe to Updates", "No"));
    }

    #[test]
    fn test_receipt_skips_absent_optionals() {
        let receipt = receipt();
        assert!(receipt.entries.iter().all(|e| e.label != "Videos"));
        assert_eq!(receipt.entries.len(), receipt.field_count);
    }

    #[test]
    fn test_receipt_scroll_is_clamped() {
        let mut receipt = receipt();
        receipt.scroll_by(-5);
        assert_eq!(receipt.scroll, 0);
        receipt.scroll_by(1000);
        assert_eq!(receipt.scroll as usize, receipt.line_count());
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(state.current_error().is_none());

        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));

        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));

        state.dismiss_error();
        assert!(state.current_error().is_none());
    }

    #[test]
    fn test_dismiss_on_empty_queue_is_noop() {
        let mut state = AppState::default();
        state.dismiss_error();
        assert!(state.error_queue.is_empty());
    }

    #[test]
    fn test_has_dialog() {
        let mut state = AppState::new(false);
        assert!(!state.has_dialog());
        state.push_error("boom".to_string());
        assert!(state.has_dialog());
        assert!(!state.form.has_back());
    }
}
