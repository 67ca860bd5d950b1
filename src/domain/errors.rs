// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("missing translation for `{field}` in locale `{locale}`")]
    MissingTranslation { field: String, locale: String },
}

impl DomainError {
    pub fn missing_translation(field: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::MissingTranslation {
            field: field.into(),
            locale: locale.into(),
        }
    }

    /// True for lookup or write failures raised at the storage boundary,
    /// including uniqueness violations reported on insert.
    pub const fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Persistence(_) | Self::Conflict(_))
    }
}
