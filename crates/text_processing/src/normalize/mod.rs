//! Per-language text normalization
//!
//! Every normalizer maps raw text to the canonical surface its backend
//! tokenizes. Normalizing already-normalized text returns it unchanged.

pub mod chinese;
pub mod english;
pub mod japanese;
pub mod korean;
pub mod punctuation;

pub use chinese::ChineseNormalizer;
pub use english::EnglishNormalizer;
pub use japanese::JapaneseNormalizer;
pub use korean::KoreanNormalizer;
pub use punctuation::ReplaceMap;

use g2p_frontend_core::Language;

/// Canonicalizes text for one language
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;

    fn language(&self) -> Language;
}

/// Normalizer for a concrete language; `None` for `Multi`
pub fn normalizer_for(language: Language) -> Option<Box<dyn Normalizer>> {
    match language {
        Language::Jp => Some(Box::new(JapaneseNormalizer::new())),
        Language::En => Some(Box::new(EnglishNormalizer::new())),
        Language::Zh => Some(Box::new(ChineseNormalizer::new())),
        Language::Ko => Some(Box::new(KoreanNormalizer::new())),
        Language::Multi => None,
    }
}
