// src/infrastructure/translations.rs
use std::collections::BTreeSet;
use std::marker::PhantomData;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::locale::Locale;
use crate::domain::translation::{HasTranslations, TranslationStore, Translations};

/// Translation store for entities that carry their translations in-line.
///
/// The configured locales of an attribute are the locales it has a value for.
/// Empty strings count as missing.
#[derive(Debug)]
pub struct AttributeTranslationStore<E> {
    _entity: PhantomData<fn() -> E>,
}

impl<E> AttributeTranslationStore<E> {
    pub const fn new() -> Self {
        Self {
            _entity: PhantomData,
        }
    }
}

impl<E> Default for AttributeTranslationStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for AttributeTranslationStore<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

fn field_translations<'a, E: HasTranslations>(
    entity: &'a E,
    field: &str,
) -> DomainResult<&'a Translations> {
    entity.translations(field).ok_or_else(|| {
        DomainError::Validation(format!("`{field}` is not a translatable attribute"))
    })
}

impl<E: HasTranslations> TranslationStore<E> for AttributeTranslationStore<E> {
    fn is_managed_field(&self, field: &str) -> bool {
        E::translatable_attributes()
            .iter()
            .any(|name| *name == field)
    }

    fn configured_locales(&self, entity: &E, field: &str) -> DomainResult<BTreeSet<Locale>> {
        let translations = field_translations(entity, field)?;
        Ok(translations
            .locales()
            .filter(|locale| translations.get(locale).is_some_and(|v| !v.is_empty()))
            .cloned()
            .collect())
    }

    fn translated_value(&self, entity: &E, field: &str, locale: &Locale) -> DomainResult<String> {
        field_translations(entity, field)?
            .get(locale)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| DomainError::missing_translation(field, locale.as_str()))
    }

    fn set_translation(
        &self,
        entity: &mut E,
        field: &str,
        locale: &Locale,
        value: String,
    ) -> DomainResult<()> {
        let translations = entity.translations_mut(field).ok_or_else(|| {
            DomainError::Validation(format!("`{field}` is not a translatable attribute"))
        })?;
        translations.set(locale.clone(), value);
        Ok(())
    }
}
