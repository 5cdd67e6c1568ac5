//! Common validation helpers for use cases.

/// Validation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} cannot be empty")]
    Empty { field_name: &'static str },

    #[error("{field_name} must be at least {min} characters")]
    TooShort { field_name: &'static str, min: usize },
}

/// Validate a string is non-empty after trimming.
pub fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

/// Validate a string has at least `min` characters (not bytes).
pub fn require_min_length(
    value: &str,
    min: usize,
    field_name: &'static str,
) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field_name, min });
    }
    Ok(())
}
