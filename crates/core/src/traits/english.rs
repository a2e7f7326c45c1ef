//! English tokenization and pronunciation lookup

use crate::Result;

/// SentencePiece word-start marker
pub const WORD_START_MARKER: char = '▁';

/// Subword tokenizer
///
/// Tokens that begin a word carry [`WORD_START_MARKER`]; tokens without it
/// continue the previous word. Punctuation comes back as standalone tokens.
pub trait SubwordTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Pronouncing dictionary keyed by word
pub trait PronouncingDictionary: Send + Sync {
    /// Syllables of raw ARPAbet tokens (stress digits attached), or `None`
    fn lookup(&self, word: &str) -> Option<Vec<Vec<String>>>;

    fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }
}

/// Rule-based fallback for words missing from every dictionary
pub trait PhonemePredictor: Send + Sync {
    /// Raw phoneme tokens; may include spaces and non-ARPAbet symbols
    fn predict(&self, word: &str) -> Result<Vec<String>>;
}
