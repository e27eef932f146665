//! Form field value objects

use crate::registration::{ControlKind, FieldSpec, RawValue};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Selected value of a closed-set selector, `None` until chosen
    Choice(Option<String>),
    Toggle(bool),
}

impl FieldValue {
    /// Initial value for a control of the given kind
    pub fn initial(kind: ControlKind) -> Self {
        match kind {
            ControlKind::Choice(_) => FieldValue::Choice(None),
            ControlKind::Toggle { default } => FieldValue::Toggle(default),
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// Represents a single form control with its schema entry, value and error
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: &'static FieldSpec,
    pub value: FieldValue,
    /// Error attached by the last submit attempt
    pub error: Option<String>,
}

impl FormField {
    /// Create an empty field for a schema entry
    pub fn new(spec: &'static FieldSpec) -> Self {
        Self {
            spec,
            value: FieldValue::initial(spec.kind),
            error: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.spec.label
    }

    pub fn is_multiline(&self) -> bool {
        self.spec.is_multiline()
    }

    /// Whether typed characters edit this field
    pub fn accepts_text(&self) -> bool {
        matches!(self.value, FieldValue::Text(_))
    }

    /// Get the text value (returns empty string for selectors and toggles)
    #[cfg(test)]
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) | FieldValue::Toggle(_) => "",
        }
    }

    /// Raw value handed to validation
    pub fn raw(&self) -> RawValue<'_> {
        match &self.value {
            FieldValue::Text(s) => RawValue::Text(s),
            FieldValue::Choice(selected) => RawValue::Choice(selected.as_deref()),
            FieldValue::Toggle(on) => RawValue::Toggle(*on),
        }
    }

    /// Set the value from its textual form.
    ///
    /// Toggles accept `true/false`, `yes/no`, `on/off` and `1/0`; anything
    /// else leaves them unchanged and returns false. Choices store the value
    /// as given so that submit can report values outside the closed set.
    pub fn set_from_str(&mut self, value: &str) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => {
                *s = value.to_string();
                true
            }
            FieldValue::Choice(selected) => {
                *selected = Some(value.to_string());
                true
            }
            FieldValue::Toggle(on) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => {
                    *on = true;
                    true
                }
                "false" | "no" | "off" | "0" => {
                    *on = false;
                    true
                }
                _ => false,
            },
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            if c != '\n' || self.spec.is_multiline() {
                s.push(c);
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Move a selector to the next (or previous) option, wrapping around.
    ///
    /// A value outside the closed set restarts at the first (or last) option.
    pub fn cycle_choice(&mut self, forward: bool) {
        let ControlKind::Choice(options) = self.spec.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        if let FieldValue::Choice(selected) = &mut self.value {
            let current = selected
                .as_deref()
                .and_then(|v| options.iter().position(|o| *o == v));
            let next = match (current, forward) {
                (None, true) => 0,
                (None, false) => options.len() - 1,
                (Some(i), true) => (i + 1) % options.len(),
                (Some(0), false) => options.len() - 1,
                (Some(i), false) => i - 1,
            };
            *selected = Some(options[next].to_string());
        }
    }

    /// Flip a toggle
    pub fn toggle(&mut self) {
        if let FieldValue::Toggle(on) = &mut self.value {
            *on = !*on;
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(Some(v)) => format!("◀ {v} ▶"),
            FieldValue::Choice(None) => String::new(),
            FieldValue::Toggle(true) => "[x] Yes".to_string(),
            FieldValue::Toggle(false) => "[ ] No".to_string(),
        }
    }
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
    fn test_initial_values_follow_kind() {
        assert_eq!(field(FieldId::BrandName).value, FieldValue::Text(String::new()));
        assert_eq!(field(FieldId::Gender).value, FieldValue::Choice(None));
        assert_eq!(
            field(FieldId::SubscribeToUpdates).value,
            FieldValue::Toggle(true)
        );
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut f = field(FieldId::City);
        f.push_char('P');
        f.push_char('u');
        f.push_char('n');
        f.pop_char();
        assert_eq!(f.as_text(), "Pu");
    }

    #[test]
    fn test_newline_only_in_multiline() {
        let mut single = field(FieldId::City);
        single.push_char('\n');
        assert_eq!(single.as_text(), "");

        let mut multi = field(FieldId::MakerStory);
        multi.push_char('a');
        multi.push_char('\n');
        multi.push_char('b');
        assert_eq!(multi.as_text(), "a\nb");
    }

    #[test]
    fn test_selector_ignores_typed_chars() {
        let mut f = field(FieldId::Gender);
        f.push_char('x');
        assert_eq!(f.value, FieldValue::Choice(None));
        assert!(!f.accepts_text());
    }

    #[test]
    fn test_cycle_choice_forward_wraps() {
        let mut f = field(FieldId::Gender);
        f.cycle_choice(true);
        assert_eq!(f.raw(), RawValue::Choice(Some("he")));
        for _ in 0..3 {
            f.cycle_choice(true);
        }
        assert_eq!(f.raw(), RawValue::Choice(Some("none")));
        f.cycle_choice(true);
        assert_eq!(f.raw(), RawValue::Choice(Some("he")));
    }

    #[test]
    fn test_cycle_choice_backward_from_empty() {
        let mut f = field(FieldId::Gender);
        f.cycle_choice(false);
        assert_eq!(f.raw(), RawValue::Choice(Some("none")));
        f.cycle_choice(false);
        assert_eq!(f.raw(), RawValue::Choice(Some("they")));
    }

    #[test]
    fn test_cycle_choice_recovers_from_unknown_value() {
        let mut f = field(FieldId::Gender);
        f.set_from_str("it");
        f.cycle_choice(true);
        assert_eq!(f.raw(), RawValue::Choice(Some("he")));
    }

    #[test]
    fn test_toggle_flips() {
        let mut f = field(FieldId::SubscribeToUpdates);
        f.toggle();
        assert_eq!(f.raw(), RawValue::Toggle(false));
        assert_eq!(f.display_value(), "[ ] No");
    }

    #[test]
    fn test_set_from_str_toggle() {
        let mut f = field(FieldId::SubscribeToUpdates);
        assert!(f.set_from_str("no"));
        assert_eq!(f.raw(), RawValue::Toggle(false));
        assert!(!f.set_from_str("maybe"));
        assert_eq!(f.raw(), RawValue::Toggle(false));
    }

    #[test]
    fn test_display_value() {
        let mut f = field(FieldId::Gender);
        assert_eq!(f.display_value(), "");
        f.cycle_choice(true);
        assert_eq!(f.display_value(), "◀ he ▶");
    }
}
