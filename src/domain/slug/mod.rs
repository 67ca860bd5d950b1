pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{SlugDescriptor, SlugOptions, Sluggable};
pub use repository::{SlugReadRepository, SlugWriteRepository};
pub use value_objects::{Slug, SlugValue};
