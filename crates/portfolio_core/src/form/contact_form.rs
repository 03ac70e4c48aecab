//! Contact form field rules.
//!
//! Rules, applied to the trimmed value:
//! - empty and required: "`<placeholder>` is required";
//! - empty and optional: valid;
//! - email: `local@domain.tld` shape, no whitespace;
//! - tel: optional leading `+`, then at least 10 digits/spaces/`-()`;
//! - anything else: at least 2 characters;
//! - fields with a character cap: no more than the cap.

use crate::form::{finish, FieldError, FormValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("valid phone regex"));

const MIN_TEXT_CHARS: usize = 2;
/// Character cap of the message textarea.
pub const MESSAGE_MAX_CHARS: usize = 500;
/// Counter switches to the warning color below this many remaining chars.
const COUNTER_WARNING_THRESHOLD: usize = 50;

/// Input type of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
}

/// Declaration of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    pub max_chars: Option<usize>,
}

pub const NAME_FIELD: FieldSpec = FieldSpec {
    name: "name",
    kind: FieldKind::Text,
    required: true,
    placeholder: "Your Name",
    max_chars: None,
};
pub const PHONE_FIELD: FieldSpec = FieldSpec {
    name: "phone",
    kind: FieldKind::Tel,
    required: false,
    placeholder: "Phone Number",
    max_chars: None,
};
pub const EMAIL_FIELD: FieldSpec = FieldSpec {
    name: "email",
    kind: FieldKind::Email,
    required: true,
    placeholder: "Email Address",
    max_chars: None,
};
pub const MESSAGE_FIELD: FieldSpec = FieldSpec {
    name: "message",
    kind: FieldKind::Text,
    required: true,
    placeholder: "Your Message",
    max_chars: Some(MESSAGE_MAX_CHARS),
};

/// Validates one value against its field declaration.
///
/// Returns the user-facing message on failure.
pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return if spec.required {
            Err(format!("{} is required", spec.placeholder))
        } else {
            Ok(())
        };
    }

    if let Some(max) = spec.max_chars {
        if value.chars().count() > max {
            return Err(format!(
                "{} must be at most {max} characters",
                spec.placeholder
            ));
        }
    }

    match spec.kind {
        FieldKind::Email if !EMAIL_RE.is_match(value) => {
            Err("Please enter a valid email address".to_string())
        }
        FieldKind::Tel if !PHONE_RE.is_match(value) => {
            Err("Please enter a valid phone number".to_string())
        }
        FieldKind::Text if value.chars().count() < MIN_TEXT_CHARS => Err(format!(
            "{} must be at least {MIN_TEXT_CHARS} characters",
            spec.placeholder
        )),
        _ => Ok(()),
    }
}

/// Characters left before the message cap; never negative.
pub fn remaining_chars(message: &str) -> usize {
    MESSAGE_MAX_CHARS.saturating_sub(message.chars().count())
}

/// Counter line shown under the message textarea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCounter {
    pub remaining: usize,
    /// Set when fewer than 50 characters remain.
    pub warning: bool,
}

impl CharacterCounter {
    pub fn for_message(message: &str) -> Self {
        let remaining = remaining_chars(message);
        Self {
            remaining,
            warning: remaining < COUNTER_WARNING_THRESHOLD,
        }
    }

    pub fn text(&self) -> String {
        format!("{} characters remaining", self.remaining)
    }
}

/// Raw contact form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Accepted contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub email: String,
    pub message: String,
    /// Unix epoch milliseconds.
    pub timestamp_ms: i64,
}

impl ContactForm {
    /// Counter for the current message text.
    pub fn message_counter(&self) -> CharacterCounter {
        CharacterCounter::for_message(&self.message)
    }

    fn fields(&self) -> [(&FieldSpec, &str); 4] {
        [
            (&NAME_FIELD, self.name.as_str()),
            (&PHONE_FIELD, self.phone.as_str()),
            (&EMAIL_FIELD, self.email.as_str()),
            (&MESSAGE_FIELD, self.message.as_str()),
        ]
    }

    /// Runs every field rule and collects all failures.
    pub fn validate(&self) -> Result<(), FormValidationError> {
        let errors = self
            .fields()
            .into_iter()
            .filter_map(|(spec, value)| {
                validate_field(spec, value)
                    .err()
                    .map(|message| FieldError {
                        field: spec.name,
                        message,
                    })
            })
            .collect();
        finish(errors)
    }

    /// Validates and produces the submission record stamped at `now_ms`.
    pub fn submit(self, now_ms: i64) -> Result<ContactSubmission, FormValidationError> {
        self.validate()?;
        let phone = self.phone.trim();
        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            timestamp_ms: now_ms,
        })
    }
}
