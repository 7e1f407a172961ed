//! Field validation shared by domain constructors.

use thiserror::Error;
use uuid::Uuid;

/// Shortest accepted language code, counted in characters.
pub const MIN_LANGUAGE_CODE_CHARS: usize = 2;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejection raised when a domain field violates its invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("dictionary name is required")]
    EmptyName,
    #[error("{field} must be at least {min} characters, got `{value}`", min = MIN_LANGUAGE_CODE_CHARS)]
    LanguageTooShort { field: &'static str, value: String },
    #[error("{field} cannot be empty")]
    EmptyText { field: &'static str },
    #[error("identifier must not be the nil uuid")]
    NilId,
}

pub(crate) fn required_name(value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Trims and lowercases a language code.
pub(crate) fn language_code(field: &'static str, value: &str) -> ValidationResult<String> {
    let normalized = value.trim().to_lowercase();
    if normalized.chars().count() < MIN_LANGUAGE_CODE_CHARS {
        return Err(ValidationError::LanguageTooShort {
            field,
            value: value.to_string(),
        });
    }
    Ok(normalized)
}

pub(crate) fn required_text(field: &'static str, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText { field });
    }
    Ok(trimmed.to_string())
}

pub(crate) fn non_nil(id: Uuid) -> ValidationResult<Uuid> {
    if id.is_nil() {
        return Err(ValidationError::NilId);
    }
    Ok(id)
}
