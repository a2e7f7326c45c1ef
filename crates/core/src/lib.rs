//! Core types and traits for the multilingual G2P front end
//!
//! This crate provides the pieces every other crate shares:
//! - Language tags and scripts
//! - Phoneme inventories
//! - `PhonemeSequence` / `LanguageResult` and the alignment finalizer
//! - The word-length distributor used by every backend
//! - Collaborator traits (analyzer, tokenizer, dictionaries, models)
//! - A per-language model cache
//! - Error types

pub mod cache;
pub mod distributor;
pub mod error;
pub mod language;
pub mod morpheme;
pub mod phoneme;
pub mod symbols;
pub mod traits;

pub use cache::{CacheStats, ModelCache};
pub use distributor::distribute;
pub use error::{Error, Result, YomiError};
pub use language::{Language, Script};
pub use morpheme::MorphemeRecord;
pub use phoneme::{
    JapaneseExtras, LanguageExtras, LanguageResult, PhonemeSequence, SequenceBuilder, WordUnit,
};

pub use traits::{
    EmbeddingModel, KoreanPronouncer, KoreanTagger, MorphologicalAnalyzer, PhonemePredictor,
    PronouncingDictionary, SubwordTokenizer, SyllableSource, CONTINUATION_MARKER, UNKNOWN_TOKEN,
    WORD_START_MARKER,
};
