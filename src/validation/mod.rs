//! Field validation rules for the forms of the adoption marketplace
//!
//! Each validator returns every failing field with a user-facing message. Only the
//! first failing rule of a field is reported, matching how the forms show errors.

pub mod account;
pub mod animal;
pub mod contact;
pub mod format;
pub mod justification;
pub mod pix;

pub use contact::ContactInfo;
pub use justification::validate_justification;
pub use pix::{PixKeyType, validate_pix_key};

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Message shown for a visible questionnaire question left unanswered
pub const REQUIRED_ANSWER: &str = "Esta pergunta é obrigatória";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collects the first error of each field
#[derive(Debug, Default)]
pub(crate) struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    /// Record `message` for `field` unless the field already failed or `ok` holds
    pub(crate) fn check(&mut self, field: &str, ok: bool, message: &str) -> &mut Self {
        if !ok && !self.errors.iter().any(|e| e.field == field) {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    pub(crate) fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Length in characters, not bytes
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
