//! Form domain layer
//!
//! Type-safe form handling for the registration view: per-control values
//! and the submit state machine.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, FormButton, RegistrationForm, SubmitOutcome};

#[cfg(test)]
pub use field::FieldValue;
#[cfg(test)]
pub use form_state::FormPhase;
