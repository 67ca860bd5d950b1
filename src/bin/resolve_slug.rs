// src/bin/resolve_slug.rs
use anyhow::{Context, Result, bail};
use sluggable::{
    application::services::{Resolution, SlugResolver},
    config::SlugConfig,
    domain::{Locale, slug::SlugDescriptor},
    infrastructure::{
        database,
        repositories::{PostgresSlugRepository, SlugRecord},
    },
};
use std::{env, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = SlugConfig::from_env()?;
    init_tracing();

    let mut args = env::args().skip(1);
    let (Some(table), Some(value)) = (args.next(), args.next()) else {
        bail!("usage: resolve_slug <table> <slug> [locale]");
    };
    let locale = match args.next() {
        Some(code) => Locale::new(code)?,
        None => config.default_locale().clone(),
    };

    let pool = database::init_pool(config.database_url())
        .await
        .context("connecting to database")?;

    // The slug column is read as jsonb so that both storage shapes decode.
    let repo = PostgresSlugRepository::<SlugRecord>::new(pool, table)?.with_projection(format!(
        "id, to_jsonb({}) AS slug",
        config.slug_field()
    ));

    // Translated slug columns only; untranslated lookups need no locale logic.
    let descriptor = SlugDescriptor::translated(config.options_for("title"));
    let resolver = SlugResolver::new(descriptor, Arc::new(repo));

    match resolver.resolve(&value, &locale).await? {
        Resolution::Match(record) => println!("match: id={}", record.id),
        Resolution::Redirect { entity, locale } => {
            let target = entity
                .slug
                .for_locale(&locale)
                .map_or_else(|| "<unset>".to_owned(), ToString::to_string);
            println!("redirect: id={} {locale}={target}", entity.id);
        }
        Resolution::NotFound => println!("not found"),
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
