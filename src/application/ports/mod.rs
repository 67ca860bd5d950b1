// src/application/ports/mod.rs
pub mod util;

pub type SlugifierPort = dyn util::Slugifier;
