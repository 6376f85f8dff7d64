//! Field validation shared by every request type.

use thiserror::Error;

/// Errors raised while validating a request, before any store access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Field {field} must be an integer, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Returns the value of a required text field.
pub fn require_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ValidationError::MissingField(field))
}

/// Returns the value of a required integer field.
pub fn require_integer(value: Option<String>, field: &'static str) -> Result<i64, ValidationError> {
    let raw = require_text(value, field)?;
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber { field, value: raw })
}
