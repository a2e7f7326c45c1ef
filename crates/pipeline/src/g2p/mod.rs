//! Per-language grapheme-to-phoneme backends
//!
//! Every backend normalizes its input, converts it to phonemes and tones,
//! distributes the phonemes over its alignment units and wraps the result
//! in sentinels:
//!
//! | backend | units counted by `word2phoneme` |
//! |---|---|
//! | Japanese | characters of the normalized text |
//! | English | subword tokens of the normalized text |
//! | Mandarin | characters of the normalized text |
//! | Korean | tagger tokens after unknown-token recovery |

pub mod chinese;
pub mod english;
pub mod japanese;
pub mod korean;

pub use chinese::{ChineseG2p, PinyinSource};
pub use english::{CmuDict, EnglishG2p, LetterPredictor, MarkerTokenizer};
pub use japanese::{JapaneseG2p, LexiconAnalyzer};
pub use korean::{KoreanG2p, SpellingPronouncer, WhitespaceTagger};

#[cfg(feature = "hf-tokenizer")]
pub use english::HfTokenizer;

use g2p_frontend_config::Settings;
use g2p_frontend_core::symbols::{in_inventory, UNK};
use g2p_frontend_core::{Language, LanguageResult, Result, YomiError};
use serde::{Deserialize, Serialize};

/// Per-call switches shared by all backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct G2pOptions {
    /// Kansai high-start pitch pattern (Japanese)
    pub keihan: bool,
    /// Child-speech substitutions (Japanese)
    pub babytalk: bool,
    /// Voice every voiceable mora (Japanese)
    pub dakuten: bool,
    /// Emit the moraic nasal as `N` instead of `n` (Japanese)
    pub use_jp_extra: bool,
    /// Fail with `YomiError` instead of substituting `UNK`
    pub raise_yomi_error: bool,
}

impl Default for G2pOptions {
    fn default() -> Self {
        Self {
            keihan: false,
            babytalk: false,
            dakuten: false,
            use_jp_extra: true,
            raise_yomi_error: false,
        }
    }
}

impl G2pOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            keihan: settings.japanese.keihan,
            babytalk: settings.japanese.babytalk,
            dakuten: settings.japanese.dakuten,
            use_jp_extra: settings.japanese.use_jp_extra,
            raise_yomi_error: settings.g2p.raise_yomi_error,
        }
    }

    pub fn strict(mut self) -> Self {
        self.raise_yomi_error = true;
        self
    }
}

/// A language-specific G2P backend
pub trait G2pBackend: Send + Sync {
    fn language(&self) -> Language;

    /// Canonical surface the backend phonemizes
    fn normalize(&self, text: &str) -> String;

    /// Phonemes, tones and alignment for `text`
    fn g2p(&self, text: &str, options: &G2pOptions) -> Result<LanguageResult>;
}

/// Replace phonemes outside the language inventory with `UNK`,
/// or fail on the first one in strict mode
pub(crate) fn replace_unknown_phonemes(
    language: Language,
    phonemes: Vec<String>,
    raise_yomi_error: bool,
) -> Result<Vec<String>> {
    phonemes
        .into_iter()
        .map(|phoneme| {
            if phoneme == UNK || in_inventory(language, &phoneme) {
                return Ok(phoneme);
            }
            if raise_yomi_error {
                return Err(YomiError::unknown_phone(&phoneme).into());
            }
            tracing::warn!(language = %language, phoneme = %phoneme, "Cannot read unknown phoneme, replaced with UNK");
            Ok(UNK.to_string())
        })
        .collect()
}
