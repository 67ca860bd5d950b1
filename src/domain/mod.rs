// src/domain/mod.rs
pub mod errors;
pub mod locale;
pub mod slug;
pub mod translation;

pub use errors::{DomainError, DomainResult};
pub use locale::Locale;
