// src/application/services/resolver.rs
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::domain::locale::Locale;
use crate::domain::slug::{SlugDescriptor, SlugReadRepository};

/// Outcome of binding a raw slug to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<E> {
    /// The slug belongs to the entity in the active locale (or is untranslated).
    Match(E),
    /// The slug belongs to the entity in another locale; the caller should
    /// redirect permanently to the entity's URL in `locale`.
    Redirect { entity: E, locale: Locale },
    NotFound,
}

impl<E> Resolution<E> {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn into_entity(self) -> Option<E> {
        match self {
            Self::Match(entity) | Self::Redirect { entity, .. } => Some(entity),
            Self::NotFound => None,
        }
    }
}

/// Resolves inbound slugs for one registered entity type.
///
/// Storage failures are returned as errors and never folded into
/// [`Resolution::NotFound`].
pub struct SlugResolver<E> {
    descriptor: SlugDescriptor,
    read_repo: Arc<dyn SlugReadRepository<E>>,
}

impl<E: Send> SlugResolver<E> {
    pub fn new(descriptor: SlugDescriptor, read_repo: Arc<dyn SlugReadRepository<E>>) -> Self {
        Self {
            descriptor,
            read_repo,
        }
    }

    pub const fn descriptor(&self) -> &SlugDescriptor {
        &self.descriptor
    }

    pub async fn resolve(
        &self,
        raw: &str,
        active_locale: &Locale,
    ) -> ApplicationResult<Resolution<E>> {
        if raw.is_empty() {
            return Ok(Resolution::NotFound);
        }

        let field = self.descriptor.slug_field();

        if !self.descriptor.is_translatable() {
            let rows = self.read_repo.find_exact(field, None, raw).await?;
            return Ok(single_match(rows, field, raw)
                .map_or(Resolution::NotFound, Resolution::Match));
        }

        let rows = self
            .read_repo
            .find_exact(field, Some(active_locale), raw)
            .await?;
        if let Some(entity) = single_match(rows, field, raw) {
            tracing::debug!(%field, locale = %active_locale, "slug matched active locale");
            return Ok(Resolution::Match(entity));
        }

        if !self.descriptor.redirect_on_cross_locale_match() {
            tracing::debug!(%field, locale = %active_locale, "cross-locale redirect disabled");
            return Ok(Resolution::NotFound);
        }

        let mut candidates = self.read_repo.find_all_containing(field, raw).await?;
        match candidates.len() {
            1 => {
                let entity = candidates.remove(0);
                tracing::debug!(
                    %field,
                    locale = %active_locale,
                    "slug matched another locale, redirecting"
                );
                Ok(Resolution::Redirect {
                    entity,
                    locale: active_locale.clone(),
                })
            }
            0 => Ok(Resolution::NotFound),
            count => {
                tracing::warn!(
                    %field,
                    value = %raw,
                    count,
                    "ambiguous cross-locale slug, not redirecting"
                );
                Ok(Resolution::NotFound)
            }
        }
    }
}

/// Exactly one row, or nothing. Several rows for one value mean the uniqueness
/// invariant is broken, which is reported and treated as no match.
fn single_match<E>(mut rows: Vec<E>, field: &str, value: &str) -> Option<E> {
    match rows.len() {
        1 => rows.pop(),
        0 => None,
        count => {
            tracing::warn!(%field, %value, count, "duplicate slug rows for exact lookup");
            None
        }
    }
}
