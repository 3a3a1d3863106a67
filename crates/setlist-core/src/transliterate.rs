//! Phonetic transliteration used to build sort keys for non-ASCII names.
//!
//! The engine is picked once when a generator is built: either a real engine
//! or [`NoTransliterator`], which always reports itself unavailable so the
//! caller falls back to the name as given.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransliterateError {
    #[error("no transliteration engine available")]
    Unavailable,
    #[error("transliteration failed: {0}")]
    Failed(String),
}

/// Converts text into a phonetic reading.
pub trait Transliterator {
    fn transliterate(&self, text: &str) -> Result<String, TransliterateError>;
}

/// Sentinel engine for builds or configs without transliteration.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTransliterator;

impl Transliterator for NoTransliterator {
    fn transliterate(&self, _text: &str) -> Result<String, TransliterateError> {
        Err(TransliterateError::Unavailable)
    }
}

/// Japanese reading in hiragana (kanji and katakana converted, other text kept).
#[cfg(feature = "kakasi")]
#[derive(Debug, Default, Clone, Copy)]
pub struct KakasiTransliterator;

#[cfg(feature = "kakasi")]
impl Transliterator for KakasiTransliterator {
    fn transliterate(&self, text: &str) -> Result<String, TransliterateError> {
        std::panic::catch_unwind(|| kakasi::convert(text).hiragana).map_err(|payload| {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "engine panicked".to_string());
            TransliterateError::Failed(msg)
        })
    }
}

/// Best engine compiled into this build.
pub fn default_engine() -> Box<dyn Transliterator> {
    #[cfg(feature = "kakasi")]
    {
        Box::new(KakasiTransliterator)
    }
    #[cfg(not(feature = "kakasi"))]
    {
        tracing::debug!("built without kakasi; sort keys use names as given");
        Box::new(NoTransliterator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_unavailable() {
        assert!(matches!(
            NoTransliterator.transliterate("東京"),
            Err(TransliterateError::Unavailable)
        ));
    }

    #[cfg(feature = "kakasi")]
    #[test]
    fn kakasi_reads_katakana_as_hiragana() {
        assert_eq!(KakasiTransliterator.transliterate("ヨルシカ").unwrap(), "よるしか");
    }

    #[cfg(feature = "kakasi")]
    #[test]
    fn kakasi_keeps_hiragana() {
        assert_eq!(KakasiTransliterator.transliterate("あいみょん").unwrap(), "あいみょん");
    }
}
