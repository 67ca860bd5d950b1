// tests/support/mocks/mod.rs
pub mod repos;
pub mod translations;

pub use repos::*;
pub use translations::*;
