// src/application/commands/persist.rs
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::application::services::generator::SlugGenerator;
use crate::domain::slug::{SlugWriteRepository, Sluggable};

/// Writes new entities with their slugs generated first.
///
/// A missing source translation aborts before anything is written. Conflicts
/// reported by storage (for example a duplicate slug from a concurrent insert)
/// are returned to the caller without retrying.
pub struct SluggedPersistService<E> {
    generator: Arc<SlugGenerator<E>>,
    write_repo: Arc<dyn SlugWriteRepository<E>>,
}

impl<E: Sluggable> SluggedPersistService<E> {
    pub fn new(generator: Arc<SlugGenerator<E>>, write_repo: Arc<dyn SlugWriteRepository<E>>) -> Self {
        Self {
            generator,
            write_repo,
        }
    }

    pub async fn create(&self, mut entity: E) -> ApplicationResult<E> {
        self.generator.on_before_persist(&mut entity)?;
        let stored = self.write_repo.insert(entity).await?;
        Ok(stored)
    }
}
