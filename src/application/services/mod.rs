// src/application/services/mod.rs
pub mod generator;
pub mod resolver;
pub mod routing;

use std::sync::Arc;

use crate::{
    application::{commands::SluggedPersistService, ports::SlugifierPort},
    domain::{
        slug::{SlugDescriptor, SlugOptions, SlugReadRepository, SlugWriteRepository, Sluggable},
        translation::TranslationStore,
    },
};

pub use generator::SlugGenerator;
pub use resolver::{Resolution, SlugResolver};
pub use routing::{BoundRoute, ParameterMap, localize_route_parameters, slugged_url_for_route};

/// Slug services for one entity type, sharing a single registration.
pub struct SlugServices<E> {
    pub generator: Arc<SlugGenerator<E>>,
    pub resolver: Arc<SlugResolver<E>>,
    pub persist: Arc<SluggedPersistService<E>>,
    descriptor: SlugDescriptor,
}

impl<E: Sluggable> SlugServices<E> {
    pub fn new(
        options: SlugOptions,
        read_repo: Arc<dyn SlugReadRepository<E>>,
        write_repo: Arc<dyn SlugWriteRepository<E>>,
        translations: Arc<dyn TranslationStore<E>>,
        slugifier: Arc<SlugifierPort>,
    ) -> Self {
        let descriptor = SlugDescriptor::register(options, translations.as_ref());

        let generator = Arc::new(SlugGenerator::new(
            descriptor.clone(),
            Arc::clone(&slugifier),
            Arc::clone(&translations),
        ));
        let resolver = Arc::new(SlugResolver::new(descriptor.clone(), Arc::clone(&read_repo)));
        let persist = Arc::new(SluggedPersistService::new(
            Arc::clone(&generator),
            Arc::clone(&write_repo),
        ));

        Self {
            generator,
            resolver,
            persist,
            descriptor,
        }
    }

    pub const fn descriptor(&self) -> &SlugDescriptor {
        &self.descriptor
    }
}
