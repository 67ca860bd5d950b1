//! Slug generation and locale-aware slug resolution for persisted records.
//!
//! Entity types implement [`domain::slug::Sluggable`], register once through
//! [`domain::slug::SlugDescriptor`], and get:
//!
//! - [`application::services::SlugGenerator`], the pre-insert hook that fills
//!   missing slugs (one value, or one per configured locale);
//! - [`application::services::SlugResolver`], which binds an inbound slug to an
//!   entity and decides whether a cross-locale hit warrants a redirect;
//! - [`application::services::slugged_url_for_route`] for building links with the
//!   slug of a given locale.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
