// src/presentation/http/binding.rs
use crate::application::error::ApplicationError;
use crate::application::services::{BoundRoute, Resolution, SlugResolver, slugged_url_for_route};
use crate::domain::errors::DomainError;
use crate::domain::locale::Locale;
use crate::domain::slug::Sluggable;
use crate::presentation::http::error::HttpError;
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Why a route parameter could not be bound to an entity.
#[derive(Debug)]
pub enum RouteBindingRejection {
    NotFound,
    /// Permanent redirect to the entity's URL in the active locale.
    Redirect(String),
    Failed(HttpError),
}

impl IntoResponse for RouteBindingRejection {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => HttpError::not_found("resource not found").into_response(),
            Self::Redirect(location) => {
                (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
            }
            Self::Failed(err) => err.into_response(),
        }
    }
}

/// Binds `raw` from `route` to an entity, turning cross-locale hits into a
/// redirect to the same route with the active locale's slug.
pub async fn bind_slug<E: Sluggable>(
    resolver: &SlugResolver<E>,
    route: &BoundRoute,
    raw: &str,
    active_locale: &Locale,
) -> Result<E, RouteBindingRejection> {
    let resolution = resolver.resolve(raw, active_locale).await.map_err(|err| {
        tracing::error!(error = %err, "slug resolution failed");
        RouteBindingRejection::Failed(HttpError::from_error(err))
    })?;

    match resolution {
        Resolution::Match(entity) => Ok(entity),
        Resolution::NotFound => Err(RouteBindingRejection::NotFound),
        Resolution::Redirect { entity, locale } => {
            match slugged_url_for_route(route, &entity, resolver.descriptor(), Some(&locale)) {
                Ok(location) => Err(RouteBindingRejection::Redirect(location)),
                Err(DomainError::MissingTranslation { .. }) => {
                    tracing::warn!(%locale, "cross-locale match has no slug in the active locale");
                    Err(RouteBindingRejection::NotFound)
                }
                Err(err) => {
                    tracing::error!(error = %err, "cannot build redirect location");
                    Err(RouteBindingRejection::Failed(HttpError::from_error(
                        ApplicationError::infrastructure(format!(
                            "cannot build redirect location: {err}"
                        )),
                    )))
                }
            }
        }
    }
}
