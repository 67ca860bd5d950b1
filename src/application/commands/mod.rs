pub mod persist;

pub use persist::SluggedPersistService;
