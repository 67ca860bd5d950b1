// src/application/ports/util.rs
/// Turns arbitrary text into a URL-safe slug. Must be pure and deterministic.
pub trait Slugifier: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
