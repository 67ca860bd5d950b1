// src/domain/slug/entity.rs
use crate::domain::slug::value_objects::SlugValue;
use crate::domain::translation::TranslationStore;

pub const DEFAULT_SLUG_FIELD: &str = "slug";

/// Capability implemented by every persisted type that owns a slug.
pub trait Sluggable: Send + Sync {
    fn slug(&self) -> &SlugValue;

    fn slug_mut(&mut self) -> &mut SlugValue;

    /// Raw (non-translated) value of the named attribute, if the type has one.
    fn attribute(&self, field: &str) -> Option<&str>;
}

/// Per-type slug settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugOptions {
    pub source_field: String,
    pub slug_field: String,
    pub redirect_on_cross_locale_match: bool,
}

impl SlugOptions {
    pub fn new(source_field: impl Into<String>) -> Self {
        Self {
            source_field: source_field.into(),
            slug_field: DEFAULT_SLUG_FIELD.into(),
            redirect_on_cross_locale_match: true,
        }
    }

    pub fn with_slug_field(mut self, slug_field: impl Into<String>) -> Self {
        self.slug_field = slug_field.into();
        self
    }

    pub const fn with_redirect_on_cross_locale_match(mut self, enabled: bool) -> Self {
        self.redirect_on_cross_locale_match = enabled;
        self
    }
}

/// Slug settings of an entity type with translatability resolved once, when the
/// type is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugDescriptor {
    options: SlugOptions,
    translatable: bool,
}

impl SlugDescriptor {
    pub fn register<E, S>(options: SlugOptions, translations: &S) -> Self
    where
        S: TranslationStore<E> + ?Sized,
    {
        let translatable = translations.is_managed_field(&options.slug_field);
        tracing::debug!(
            slug_field = %options.slug_field,
            source_field = %options.source_field,
            translatable,
            "registered sluggable type"
        );
        Self {
            options,
            translatable,
        }
    }

    /// Descriptor for types without any translation support.
    pub const fn untranslated(options: SlugOptions) -> Self {
        Self {
            options,
            translatable: false,
        }
    }

    /// Descriptor for types whose slug storage is known to be a locale map.
    pub const fn translated(options: SlugOptions) -> Self {
        Self {
            options,
            translatable: true,
        }
    }

    pub const fn is_translatable(&self) -> bool {
        self.translatable
    }

    pub fn source_field(&self) -> &str {
        &self.options.source_field
    }

    pub fn slug_field(&self) -> &str {
        &self.options.slug_field
    }

    /// Route-binding key; always the slug storage field.
    pub fn route_key_name(&self) -> &str {
        self.slug_field()
    }

    pub const fn redirect_on_cross_locale_match(&self) -> bool {
        self.options.redirect_on_cross_locale_match
    }
}
