// src/domain/slug/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::locale::Locale;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl TryFrom<String> for Slug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Stored value of a slug attribute.
///
/// Non-translatable attributes hold a single nullable slug and serialize as a
/// plain string or `null`. Translatable attributes hold one nullable slug per
/// locale and serialize as a JSON object keyed by locale.
///
/// Blank stored strings decode as unset, so rows written elsewhere with `""`
/// read as "no slug yet" instead of failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlugValue {
    Single(#[serde(deserialize_with = "lenient_single")] Option<Slug>),
    Translated(#[serde(deserialize_with = "lenient_slots")] BTreeMap<Locale, Option<Slug>>),
}

fn lenient_single<'de, D>(deserializer: D) -> Result<Option<Slug>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| Slug::new(value).ok()))
}

fn lenient_slots<'de, D>(deserializer: D) -> Result<BTreeMap<Locale, Option<Slug>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<Locale, Option<String>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(locale, value)| (locale, value.and_then(|v| Slug::new(v).ok())))
        .collect())
}

impl Default for SlugValue {
    fn default() -> Self {
        Self::Single(None)
    }
}

impl SlugValue {
    /// Empty skeleton for a freshly constructed entity.
    pub const fn empty(translatable: bool) -> Self {
        if translatable {
            Self::Translated(BTreeMap::new())
        } else {
            Self::Single(None)
        }
    }

    pub fn single(slug: Slug) -> Self {
        Self::Single(Some(slug))
    }

    pub fn translated<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Locale, Option<Slug>)>,
    {
        Self::Translated(entries.into_iter().collect())
    }

    pub const fn is_translated(&self) -> bool {
        matches!(self, Self::Translated(_))
    }

    pub const fn as_single(&self) -> Option<&Slug> {
        match self {
            Self::Single(slug) => slug.as_ref(),
            Self::Translated(_) => None,
        }
    }

    pub fn for_locale(&self, locale: &Locale) -> Option<&Slug> {
        match self {
            Self::Translated(map) => map.get(locale).and_then(Option::as_ref),
            Self::Single(_) => None,
        }
    }

    /// Whether `value` is stored under any locale (or as the single value).
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Self::Single(slug) => slug.as_ref().is_some_and(|s| s.as_str() == value),
            Self::Translated(map) => map
                .values()
                .flatten()
                .any(|slug| slug.as_str() == value),
        }
    }

    /// Exact comparison against the single value, or against one locale's entry.
    pub fn matches(&self, locale: Option<&Locale>, value: &str) -> bool {
        match locale {
            Some(locale) => self
                .for_locale(locale)
                .is_some_and(|slug| slug.as_str() == value),
            None => self.as_single().is_some_and(|slug| slug.as_str() == value),
        }
    }

    /// Mutable access to the per-locale slots, turning an unset single value
    /// into an empty map.
    pub fn translated_slots_mut(&mut self) -> DomainResult<&mut BTreeMap<Locale, Option<Slug>>> {
        if matches!(self, Self::Single(None)) {
            *self = Self::Translated(BTreeMap::new());
        }
        match self {
            Self::Translated(map) => Ok(map),
            Self::Single(_) => Err(DomainError::Validation(
                "translatable slug holds a single value".into(),
            )),
        }
    }
}
