//! Text processing for the multilingual G2P front end
//!
//! This crate provides the stages that run before phonemization:
//! - **Language selection**: start-anchored script detection with a JP fallback
//! - **Normalization**: per-language punctuation, numerals and width folding
//! - **Numerals**: English words, kanji, Chinese and Korean number readings
//!
//! # Example
//!
//! ```
//! use g2p_frontend_core::Language;
//! use g2p_frontend_text_processing::{normalizer_for, LanguageSelector};
//!
//! let selector = LanguageSelector::new();
//! let language = selector.select("안녕하세요", &[Language::Multi]);
//! assert_eq!(language, Language::Ko);
//!
//! let normalizer = normalizer_for(language).unwrap();
//! assert_eq!(normalizer.normalize("사과 3개"), "사과 세 개");
//! ```

pub mod detect;
pub mod normalize;
pub mod numbers;

pub use detect::LanguageSelector;
pub use normalize::{
    normalizer_for, ChineseNormalizer, EnglishNormalizer, JapaneseNormalizer, KoreanNormalizer,
    Normalizer,
};
