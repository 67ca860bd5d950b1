// src/application/services/routing.rs
use std::collections::BTreeMap;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::locale::Locale;
use crate::domain::slug::{SlugDescriptor, Sluggable};

pub type ParameterMap = BTreeMap<String, String>;

/// A route template together with the parameter values it is currently bound
/// to, e.g. `/{locale}/posts/{post}` with `post` bound to a sluggable entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundRoute {
    template: String,
    parameters: ParameterMap,
    entity_parameter: Option<String>,
}

impl BoundRoute {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            parameters: ParameterMap::new(),
            entity_parameter: None,
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Marks the parameter that carries the sluggable entity's route key.
    pub fn binding_entity(mut self, name: impl Into<String>) -> Self {
        self.entity_parameter = Some(name.into());
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub const fn parameters(&self) -> &ParameterMap {
        &self.parameters
    }

    pub fn entity_parameter(&self) -> Option<&str> {
        self.entity_parameter.as_deref()
    }

    /// Builds a path from the template. `{name}` placeholders are required,
    /// `{name?}` ones optional; parameters the template does not use are
    /// appended as a query string.
    pub fn url_for(&self, parameters: &ParameterMap) -> DomainResult<String> {
        let mut remaining = parameters.clone();
        let mut url = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            url.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| {
                DomainError::Validation(format!("unterminated placeholder in `{}`", self.template))
            })?;
            let placeholder = &after[..close];
            let (name, optional) = placeholder
                .strip_suffix('?')
                .map_or((placeholder, false), |name| (name, true));

            match remaining.remove(name) {
                Some(value) => url.push_str(&urlencoding::encode(&value)),
                None if optional => {
                    if url.len() > 1 && url.ends_with('/') {
                        url.pop();
                    }
                }
                None => {
                    return Err(DomainError::Validation(format!(
                        "missing route parameter `{name}`"
                    )));
                }
            }
            rest = &after[close + 1..];
        }
        url.push_str(rest);

        if !remaining.is_empty() {
            let query = serde_urlencoded::to_string(&remaining)
                .map_err(|err| DomainError::Validation(err.to_string()))?;
            url.push('?');
            url.push_str(&query);
        }
        Ok(url)
    }
}

/// Parameters for building `route` with `entity`'s slug in `locale`.
///
/// Routes that do not bind the entity keep their parameters. Without a target
/// locale, or for untranslated slugs, the entity's own route key is used.
pub fn localize_route_parameters<E: Sluggable>(
    route: &BoundRoute,
    entity: &E,
    descriptor: &SlugDescriptor,
    locale: Option<&Locale>,
) -> DomainResult<ParameterMap> {
    let mut parameters = route.parameters().clone();
    let Some(name) = route.entity_parameter() else {
        return Ok(parameters);
    };

    let value = match locale {
        Some(locale) if descriptor.is_translatable() => {
            let slug = entity.slug().for_locale(locale).ok_or_else(|| {
                DomainError::missing_translation(descriptor.route_key_name(), locale.as_str())
            })?;
            slug.to_string()
        }
        _ => match entity.slug().as_single() {
            Some(slug) => slug.to_string(),
            None => return Ok(parameters),
        },
    };

    parameters.insert(name.to_owned(), value);
    Ok(parameters)
}

/// URL of `route` pointing at `entity` in `locale`.
pub fn slugged_url_for_route<E: Sluggable>(
    route: &BoundRoute,
    entity: &E,
    descriptor: &SlugDescriptor,
    locale: Option<&Locale>,
) -> DomainResult<String> {
    let parameters = localize_route_parameters(route, entity, descriptor, locale)?;
    route.url_for(&parameters)
}
