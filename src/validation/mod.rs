use crate::form::{FieldDescriptor, FieldKind};
use serde::Serialize;

mod email;
pub mod phone;

pub use email::is_valid_email;
pub use phone::{KeyPress, format_phone, is_allowed_phone_key, is_valid_phone, strip_non_digits};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid phone number";
pub const INVALID_SELECTION_MESSAGE: &str = "Please select a service";

/// The validity of one field value at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationVerdict {
    pub valid: bool,
    /// Inline error text. Empty when `valid`.
    pub message: String,
}

impl ValidationVerdict {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Validates a raw field value against its descriptor.
///
/// The value is trimmed first. An empty value only fails when the field is
/// required; a non-empty value is checked against the rule for its kind.
pub fn validate(field: &FieldDescriptor, raw_value: &str) -> ValidationVerdict {
    let value = raw_value.trim();

    if value.is_empty() {
        return if field.required {
            ValidationVerdict::invalid(REQUIRED_MESSAGE)
        } else {
            ValidationVerdict::ok()
        };
    }

    match field.kind {
        FieldKind::Email if !is_valid_email(value) => {
            ValidationVerdict::invalid(INVALID_EMAIL_MESSAGE)
        }
        FieldKind::Tel if !is_valid_phone(value) => {
            ValidationVerdict::invalid(INVALID_PHONE_MESSAGE)
        }
        FieldKind::Select
            if !field.options.is_empty() && !field.options.iter().any(|o| o == value) =>
        {
            ValidationVerdict::invalid(INVALID_SELECTION_MESSAGE)
        }
        _ => ValidationVerdict::ok(),
    }
}

/// Visual state of a field. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    Error,
    /// Valid and non-empty.
    Valid,
    /// Valid and empty, or never validated.
    #[default]
    Neutral,
}

impl FieldState {
    pub fn from_verdict(verdict: &ValidationVerdict, raw_value: &str) -> Self {
        if !verdict.valid {
            FieldState::Error
        } else if raw_value.trim().is_empty() {
            FieldState::Neutral
        } else {
            FieldState::Valid
        }
    }
}

/// What the presentation layer shows next to a field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FieldPresentation {
    pub message: String,
    pub state: FieldState,
}

impl FieldPresentation {
    pub fn from_verdict(verdict: &ValidationVerdict, raw_value: &str) -> Self {
        Self {
            message: verdict.message.clone(),
            state: FieldState::from_verdict(verdict, raw_value),
        }
    }

    /// Focus hides the inline error. A `Valid` marker survives.
    pub fn clear_error(&mut self) {
        self.message.clear();
        if self.state == FieldState::Error {
            self.state = FieldState::Neutral;
        }
    }

    pub fn has_error(&self) -> bool {
        self.state == FieldState::Error
    }
}

/// Ordered `(field id, verdict)` pairs from a submit-time validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    pub entries: Vec<(String, ValidationVerdict)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|(_, verdict)| verdict.valid)
    }

    /// The first invalid field in form order: the one to scroll into view.
    pub fn first_invalid(&self) -> Option<(&str, &ValidationVerdict)> {
        self.entries
            .iter()
            .find(|(_, verdict)| !verdict.valid)
            .map(|(id, verdict)| (id.as_str(), verdict))
    }

    pub fn invalid(&self) -> impl Iterator<Item = (&str, &ValidationVerdict)> {
        self.entries
            .iter()
            .filter(|(_, verdict)| !verdict.valid)
            .map(|(id, verdict)| (id.as_str(), verdict))
    }

    pub fn verdict(&self, id: &str) -> Option<&ValidationVerdict> {
        self.entries
            .iter()
            .find(|(field_id, _)| field_id == id)
            .map(|(_, verdict)| verdict)
    }
}
