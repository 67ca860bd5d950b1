// src/presentation/http/mod.rs
pub mod binding;
pub mod error;

pub use binding::{RouteBindingRejection, bind_slug};
pub use error::HttpError;
