// src/infrastructure/repositories/postgres_slug.rs
use std::marker::PhantomData;

use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::locale::Locale;
use crate::domain::slug::{SlugReadRepository, SlugValue, Sluggable};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// SQL for slug lookups on one table.
///
/// Lookup values and locales are always bound parameters. Table and column
/// names are checked to be plain identifiers; the projection is trusted
/// configuration.
#[derive(Debug, Clone)]
struct SlugQueries {
    table: String,
    projection: String,
}

impl SlugQueries {
    fn select(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(&self.projection);
        builder.push(" FROM ");
        builder.push(&self.table);
        builder
    }

    fn exact(
        &self,
        field: &str,
        locale: Option<&Locale>,
        value: &str,
    ) -> DomainResult<QueryBuilder<'static, Postgres>> {
        ensure_identifier(field)?;

        let mut builder = self.select();
        builder.push(" WHERE ");
        builder.push(field);
        if let Some(locale) = locale {
            builder.push(" ->> ");
            builder.push_bind(locale.as_str().to_owned());
        }
        builder.push(" = ");
        builder.push_bind(value.to_owned());
        builder.push(" LIMIT 2");
        Ok(builder)
    }

    /// `jsonb_path_exists` yields false for scalars and `null`, so rows whose
    /// slug is not a locale map yet do not break the scan.
    fn containing(&self, field: &str, value: &str) -> DomainResult<QueryBuilder<'static, Postgres>> {
        ensure_identifier(field)?;

        let mut builder = self.select();
        builder.push(" WHERE jsonb_path_exists(");
        builder.push(field);
        builder.push(", '$.* ? (@ == $v)', jsonb_build_object('v', ");
        builder.push_bind(value.to_owned());
        builder.push("::text))");
        Ok(builder)
    }
}

/// Slug lookups against one Postgres table.
///
/// Translated slugs are expected in a `jsonb` column holding a locale map,
/// untranslated ones in a text column.
pub struct PostgresSlugRepository<E> {
    pool: PgPool,
    queries: SlugQueries,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for PostgresSlugRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            queries: self.queries.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> PostgresSlugRepository<E> {
    pub fn new(pool: PgPool, table: impl Into<String>) -> DomainResult<Self> {
        let table = table.into();
        ensure_identifier(&table)?;
        Ok(Self {
            pool,
            queries: SlugQueries {
                table,
                projection: "*".into(),
            },
            _entity: PhantomData,
        })
    }

    /// Columns selected for each row, e.g. `id, to_jsonb(slug) AS slug`.
    pub fn with_projection(mut self, projection: impl Into<String>) -> Self {
        self.queries.projection = projection.into();
        self
    }
}

#[async_trait]
impl<E> SlugReadRepository<E> for PostgresSlugRepository<E>
where
    E: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static,
{
    async fn find_exact(
        &self,
        field: &str,
        locale: Option<&Locale>,
        value: &str,
    ) -> DomainResult<Vec<E>> {
        let mut builder = self.queries.exact(field, locale, value)?;
        builder
            .build_query_as::<E>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn find_all_containing(&self, field: &str, value: &str) -> DomainResult<Vec<E>> {
        let mut builder = self.queries.containing(field, value)?;
        builder
            .build_query_as::<E>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

/// Accepts `name` or `schema.name` made of ASCII letters, digits and `_`.
fn ensure_identifier(name: &str) -> DomainResult<()> {
    let valid_part = |part: &str| {
        let mut chars = part.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    };

    let mut parts = name.split('.');
    let ok = match (parts.next(), parts.next(), parts.next()) {
        (Some(one), None, None) => valid_part(one),
        (Some(schema), Some(table), None) => valid_part(schema) && valid_part(table),
        _ => false,
    };

    if ok {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "invalid SQL identifier: {name:?}"
        )))
    }
}

/// Minimal row for tables whose slug column is read through
/// `to_jsonb(<column>) AS slug`.
#[derive(Debug, Clone, FromRow)]
pub struct SlugRecord {
    pub id: i64,
    pub slug: Json<SlugValue>,
}

impl Sluggable for SlugRecord {
    fn slug(&self) -> &SlugValue {
        &self.slug.0
    }

    fn slug_mut(&mut self) -> &mut SlugValue {
        &mut self.slug.0
    }

    fn attribute(&self, _field: &str) -> Option<&str> {
        None
    }
}
