// tests/support/builders.rs
use std::sync::Arc;

use sluggable::application::ports::SlugifierPort;
use sluggable::domain::locale::Locale;
use sluggable::domain::slug::{Slug, SlugOptions, SlugValue, Sluggable};
use sluggable::domain::translation::{HasTranslations, Translations};
use sluggable::infrastructure::util::DefaultSlugifier;

pub fn locale(code: &str) -> Locale {
    Locale::new(code).unwrap()
}

pub fn slug(value: &str) -> Slug {
    Slug::new(value).unwrap()
}

pub fn slugifier() -> Arc<SlugifierPort> {
    Arc::new(DefaultSlugifier)
}

pub fn post_options() -> SlugOptions {
    SlugOptions::new("title")
}

/// Entity with a translated title and a translated slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: Translations,
    pub slug: SlugValue,
}

impl Post {
    pub fn new(id: i64, titles: &[(&str, &str)]) -> Self {
        Self {
            id,
            title: titles
                .iter()
                .map(|(code, text)| (locale(code), (*text).to_string()))
                .collect(),
            slug: SlugValue::empty(true),
        }
    }

    pub fn with_slugs(mut self, slugs: &[(&str, Option<&str>)]) -> Self {
        self.slug = SlugValue::translated(
            slugs
                .iter()
                .map(|(code, value)| (locale(code), value.map(slug))),
        );
        self
    }
}

impl Sluggable for Post {
    fn slug(&self) -> &SlugValue {
        &self.slug
    }

    fn slug_mut(&mut self) -> &mut SlugValue {
        &mut self.slug
    }

    fn attribute(&self, _field: &str) -> Option<&str> {
        None
    }
}

impl HasTranslations for Post {
    fn translatable_attributes() -> &'static [&'static str] {
        &["title", "slug"]
    }

    fn translations(&self, field: &str) -> Option<&Translations> {
        (field == "title").then_some(&self.title)
    }

    fn translations_mut(&mut self, field: &str) -> Option<&mut Translations> {
        (field == "title").then_some(&mut self.title)
    }
}

/// Entity with plain, untranslated title and slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub title: Option<String>,
    pub slug: SlugValue,
}

impl Article {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: Some(title.to_string()),
            slug: SlugValue::empty(false),
        }
    }

    pub fn with_slug(mut self, value: &str) -> Self {
        self.slug = SlugValue::single(slug(value));
        self
    }
}

impl Sluggable for Article {
    fn slug(&self) -> &SlugValue {
        &self.slug
    }

    fn slug_mut(&mut self) -> &mut SlugValue {
        &mut self.slug
    }

    fn attribute(&self, field: &str) -> Option<&str> {
        match field {
            "title" => self.title.as_deref(),
            _ => None,
        }
    }
}
