// src/application/services/generator.rs
use std::sync::Arc;

use crate::application::ports::SlugifierPort;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugDescriptor, SlugValue, Sluggable};
use crate::domain::translation::TranslationStore;

/// Fills missing slug values of an entity right before it is written.
///
/// Existing values are never overwritten: a single slug is generated once, and
/// a translated slug only gains entries for locales whose slot is still empty.
/// Callers may therefore pre-seed any locale with a custom slug.
pub struct SlugGenerator<E> {
    descriptor: SlugDescriptor,
    slugifier: Arc<SlugifierPort>,
    translations: Arc<dyn TranslationStore<E>>,
}

impl<E: Sluggable> SlugGenerator<E> {
    pub fn new(
        descriptor: SlugDescriptor,
        slugifier: Arc<SlugifierPort>,
        translations: Arc<dyn TranslationStore<E>>,
    ) -> Self {
        Self {
            descriptor,
            slugifier,
            translations,
        }
    }

    pub const fn descriptor(&self) -> &SlugDescriptor {
        &self.descriptor
    }

    /// Pre-insert hook. The persistence layer must call this before the first
    /// write of every entity of the registered type.
    pub fn on_before_persist(&self, entity: &mut E) -> DomainResult<()> {
        if self.descriptor.is_translatable() {
            self.fill_translations(entity)
        } else {
            self.fill_single(entity)
        }
    }

    /// Generates slugs for configured locales whose slot is still empty.
    /// Entries for locales that are no longer configured are kept as they are.
    /// The entity is left untouched when any translation is missing.
    pub fn fill_translations(&self, entity: &mut E) -> DomainResult<()> {
        let source = self.descriptor.source_field();
        let locales = self.translations.configured_locales(entity, source)?;

        let mut generated = Vec::new();
        for locale in locales {
            if entity.slug().for_locale(&locale).is_some() {
                continue;
            }
            let text = self.translations.translated_value(entity, source, &locale)?;
            let slug = self.make_slug(&text)?;
            generated.push((locale, slug));
        }

        let slots = entity.slug_mut().translated_slots_mut()?;
        for (locale, slug) in generated {
            tracing::debug!(%locale, %slug, "generated translated slug");
            slots.insert(locale, Some(slug));
        }
        Ok(())
    }

    fn fill_single(&self, entity: &mut E) -> DomainResult<()> {
        match entity.slug() {
            SlugValue::Single(Some(_)) => return Ok(()),
            SlugValue::Single(None) => {}
            SlugValue::Translated(_) => {
                return Err(DomainError::Validation(format!(
                    "`{}` is not translatable but holds a locale map",
                    self.descriptor.slug_field()
                )));
            }
        }

        let source = self.descriptor.source_field();
        let text = entity.attribute(source).ok_or_else(|| {
            DomainError::Validation(format!("source attribute `{source}` is not set"))
        })?;
        let slug = self.make_slug(text)?;

        tracing::debug!(%slug, "generated slug");
        *entity.slug_mut() = SlugValue::single(slug);
        Ok(())
    }

    fn make_slug(&self, text: &str) -> DomainResult<Slug> {
        let candidate = self.slugifier.slugify(text);
        if candidate.trim().is_empty() {
            return Err(DomainError::Validation(format!(
                "`{}` produces an empty slug",
                self.descriptor.source_field()
            )));
        }
        Slug::new(candidate)
    }
}
