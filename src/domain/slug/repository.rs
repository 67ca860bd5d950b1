// src/domain/slug/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::locale::Locale;
use async_trait::async_trait;

#[async_trait]
pub trait SlugReadRepository<E>: Send + Sync {
    /// Entities whose `field` equals `value`; with a locale, compares that
    /// locale's entry of a translated field. Callers treat more than one row as
    /// a data-integrity problem, so implementations may stop after two.
    async fn find_exact(
        &self,
        field: &str,
        locale: Option<&Locale>,
        value: &str,
    ) -> DomainResult<Vec<E>>;

    /// Entities whose translated `field` holds `value` under any locale.
    async fn find_all_containing(&self, field: &str, value: &str) -> DomainResult<Vec<E>>;
}

#[async_trait]
pub trait SlugWriteRepository<E>: Send + Sync {
    /// Stores a new entity. Uniqueness violations surface as `Conflict`.
    async fn insert(&self, entity: E) -> DomainResult<E>;
}
