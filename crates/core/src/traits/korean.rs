//! Korean tagging and pronunciation

use crate::Result;

/// Prefix on tokens that continue the previous word
pub const CONTINUATION_MARKER: &str = "##";

/// Placeholder emitted by the tagger for spans it cannot segment
pub const UNKNOWN_TOKEN: &str = "[UNK]";

/// Morphological tagger producing wakati-style tokens
pub trait KoreanTagger: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Spelling to pronunciation converter (applies Korean sound rules)
pub trait KoreanPronouncer: Send + Sync {
    /// Pronounced form of `word`, still written in Hangul syllables
    fn pronounce(&self, word: &str) -> Result<String>;
}
