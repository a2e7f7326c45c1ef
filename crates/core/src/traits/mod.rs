//! Collaborator traits for the G2P backends
//!
//! Backends never talk to a concrete analyzer, tokenizer or model. They hold
//! `Arc<dyn Trait>` handles so implementations can be swapped by
//! configuration or replaced with fakes in tests.
//!
//! ```text
//! Japanese:
//!   - MorphologicalAnalyzer: surface → morpheme records with readings
//!
//! English:
//!   - SubwordTokenizer: text → subword tokens with "▁" word-start markers
//!   - PronouncingDictionary: word → syllables of ARPAbet tokens
//!   - PhonemePredictor: out-of-vocabulary word → ARPAbet tokens
//!
//! Mandarin:
//!   - SyllableSource: character → tone-numbered pinyin
//!
//! Korean:
//!   - KoreanTagger: text → tokens with "##" continuation markers
//!   - KoreanPronouncer: spelling → pronounced Hangul
//!
//! Features:
//!   - EmbeddingModel: text → per-unit feature rows
//! ```

mod analyzer;
mod embedding;
mod english;
mod korean;
mod mandarin;

pub use analyzer::MorphologicalAnalyzer;
pub use embedding::EmbeddingModel;
pub use english::{PhonemePredictor, PronouncingDictionary, SubwordTokenizer, WORD_START_MARKER};
pub use korean::{KoreanPronouncer, KoreanTagger, CONTINUATION_MARKER, UNKNOWN_TOKEN};
pub use mandarin::SyllableSource;
