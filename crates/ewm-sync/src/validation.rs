//! Draft Validation Errors
//!
//! Raised before any request is built. Display text is what the form shows
//! next to the field or in the notification bar.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{0} is not valid")]
    Invalid(&'static str),
    #[error("Event date must be in the future")]
    NotInFuture,
}

/// Character count (not bytes) of the trimmed value
pub(crate) fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(())
    }
}
