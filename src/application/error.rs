// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Lookup or write failures at the storage boundary, and server-side
    /// failures, as opposed to client-side problems.
    pub const fn is_storage_failure(&self) -> bool {
        match self {
            Self::Domain(err) => err.is_storage_failure(),
            Self::Infrastructure(_) => true,
        }
    }
}
