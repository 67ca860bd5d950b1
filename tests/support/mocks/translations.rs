// tests/support/mocks/translations.rs
use std::collections::BTreeSet;

use sluggable::domain::errors::DomainResult;
use sluggable::domain::locale::Locale;
use sluggable::domain::translation::{HasTranslations, TranslationStore};
use sluggable::infrastructure::translations::AttributeTranslationStore;

/// Reports a fixed locale set regardless of which translations exist, like an
/// application-wide locale list would.
pub struct FixedLocaleTranslations<E> {
    locales: BTreeSet<Locale>,
    inner: AttributeTranslationStore<E>,
}

impl<E> FixedLocaleTranslations<E> {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            locales: codes.iter().map(|code| Locale::new(*code).unwrap()).collect(),
            inner: AttributeTranslationStore::new(),
        }
    }
}

impl<E: HasTranslations> TranslationStore<E> for FixedLocaleTranslations<E> {
    fn is_managed_field(&self, field: &str) -> bool {
        self.inner.is_managed_field(field)
    }

    fn configured_locales(&self, _entity: &E, _field: &str) -> DomainResult<BTreeSet<Locale>> {
        Ok(self.locales.clone())
    }

    fn translated_value(&self, entity: &E, field: &str, locale: &Locale) -> DomainResult<String> {
        self.inner.translated_value(entity, field, locale)
    }

    fn set_translation(
        &self,
        entity: &mut E,
        field: &str,
        locale: &Locale,
        value: String,
    ) -> DomainResult<()> {
        self.inner.set_translation(entity, field, locale, value)
    }
}

/// Store for entity types without translated attributes.
pub struct NoTranslations;

impl<E> TranslationStore<E> for NoTranslations {
    fn is_managed_field(&self, _field: &str) -> bool {
        false
    }

    fn configured_locales(&self, _entity: &E, _field: &str) -> DomainResult<BTreeSet<Locale>> {
        Ok(BTreeSet::new())
    }

    fn translated_value(&self, _entity: &E, field: &str, locale: &Locale) -> DomainResult<String> {
        Err(sluggable::domain::DomainError::missing_translation(
            field,
            locale.as_str(),
        ))
    }

    fn set_translation(
        &self,
        _entity: &mut E,
        field: &str,
        _locale: &Locale,
        _value: String,
    ) -> DomainResult<()> {
        Err(sluggable::domain::DomainError::Validation(format!(
            "`{field}` is not translatable"
        )))
    }
}
