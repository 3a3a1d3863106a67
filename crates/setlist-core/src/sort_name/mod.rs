//! Sort keys for artist names.
//!
//! A manual override always wins. Otherwise ASCII-only names are their own
//! key, and anything else goes through the transliteration engine. Every
//! failure falls back to the name as given; `generate` never errors.

mod overrides;

use crate::transliterate::{self, NoTransliterator, Transliterator};

pub use overrides::SortOverrides;

pub struct SortNameGenerator<'a> {
    overrides: Option<&'a dyn SortOverrides>,
    engine: Box<dyn Transliterator>,
}

impl<'a> SortNameGenerator<'a> {
    /// Generator with the default engine and no overrides.
    pub fn new() -> Self {
        Self {
            overrides: None,
            engine: transliterate::default_engine(),
        }
    }

    /// Generator whose non-ASCII fallback is identity.
    pub fn without_transliteration() -> Self {
        Self::with_engine(Box::new(NoTransliterator))
    }

    pub fn with_engine(engine: Box<dyn Transliterator>) -> Self {
        Self {
            overrides: None,
            engine,
        }
    }

    /// Consult `overrides` before any automatic derivation.
    pub fn with_overrides(mut self, overrides: &'a dyn SortOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Sort key for `name`.
    pub fn generate(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }

        if let Some(overrides) = self.overrides {
            match overrides.lookup(name) {
                Ok(Some(sort_name)) => return sort_name,
                Ok(None) => {}
                Err(e) => tracing::warn!(name, "sort override lookup failed: {}", e),
            }
        }

        if name.is_ascii() {
            return name.to_string();
        }

        match self.engine.transliterate(name) {
            Ok(reading) => reading,
            Err(e) => {
                tracing::debug!(name, "using name as sort key: {}", e);
                name.to_string()
            }
        }
    }
}

impl Default for SortNameGenerator<'_> {
    fn default() -> Self {
        Self::new()
    }
}
