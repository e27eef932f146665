//! Validation error taxonomy for the registration form

use crate::registration::FieldId;
use thiserror::Error;

/// A single constraint violation, attached to the field that caused it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was left empty (or only whitespace)
    #[error("{} is required", .field.label())]
    MissingRequiredField { field: FieldId },

    /// The value is present but not in the expected shape (email, date)
    #[error("{message}")]
    InvalidFormat {
        field: FieldId,
        message: &'static str,
    },

    /// The value is not a member of the field's closed set
    #[error("{} must be one of {}", .field.label(), .allowed.join(", "))]
    InvalidEnumValue {
        field: FieldId,
        value: String,
        allowed: &'static [&'static str],
    },
}

impl ValidationError {
    /// The field this error belongs to
    pub fn field(&self) -> FieldId {
        match self {
            ValidationError::MissingRequiredField { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::InvalidEnumValue { field, .. } => *field,
        }
    }
}
