//! Form validation for the project and contact forms.
//!
//! # Responsibility
//! - Check raw form input before it reaches the project store.
//! - Report every failing field at once with a user-facing message.
//!
//! # Invariants
//! - Values are trimmed before any rule runs.
//! - The project store never sees input that failed validation here.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod contact_form;
pub mod project_form;

/// One failing field and its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validation failure carrying every field error found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidationError {
    pub errors: Vec<FieldError>,
}

impl FormValidationError {
    /// Returns the message for `field`, if that field failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.message_for(field).is_some()
    }
}

impl Display for FormValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fields = self
            .errors
            .iter()
            .map(|error| error.field)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "form validation failed for: {fields}")
    }
}

impl Error for FormValidationError {}

pub(crate) fn finish(errors: Vec<FieldError>) -> Result<(), FormValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(FormValidationError { errors })
    }
}
