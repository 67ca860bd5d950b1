// src/domain/translation.rs
use crate::domain::errors::DomainResult;
use crate::domain::locale::Locale;
use std::collections::{BTreeMap, BTreeSet};

/// Access to per-locale attribute values of an entity.
pub trait TranslationStore<E: ?Sized>: Send + Sync {
    /// Whether `field` is stored per locale for this entity type.
    fn is_managed_field(&self, field: &str) -> bool;

    fn configured_locales(&self, entity: &E, field: &str) -> DomainResult<BTreeSet<Locale>>;

    /// Fails with `MissingTranslation` when the locale has no value.
    fn translated_value(&self, entity: &E, field: &str, locale: &Locale) -> DomainResult<String>;

    fn set_translation(
        &self,
        entity: &mut E,
        field: &str,
        locale: &Locale,
        value: String,
    ) -> DomainResult<()>;
}

/// Locale-keyed values of one attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations(BTreeMap<Locale, String>);

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, locale: Locale, value: impl Into<String>) -> Self {
        self.0.insert(locale, value.into());
        self
    }

    pub fn get(&self, locale: &Locale) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    pub fn set(&mut self, locale: Locale, value: String) {
        self.0.insert(locale, value);
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.0.keys()
    }
}

impl FromIterator<(Locale, String)> for Translations {
    fn from_iter<T: IntoIterator<Item = (Locale, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Entities that keep their translations in-line, one map per attribute.
pub trait HasTranslations {
    fn translatable_attributes() -> &'static [&'static str];

    fn translations(&self, field: &str) -> Option<&Translations>;

    fn translations_mut(&mut self, field: &str) -> Option<&mut Translations>;
}
