// src/infrastructure/util.rs
use crate::application::ports::util::Slugifier;
use slug::slugify;

/// ASCII transliteration with `-` as the only delimiter.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlugifier;

impl Slugifier for DefaultSlugifier {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
