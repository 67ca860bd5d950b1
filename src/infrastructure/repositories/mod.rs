// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_slug;

pub use error::map_sqlx;
pub use postgres_slug::{PostgresSlugRepository, SlugRecord};
