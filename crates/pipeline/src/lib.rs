//! Multilingual grapheme-to-phoneme front end
//!
//! Turns JP/EN/ZH/KO text into phoneme symbols, tones and the
//! `word2phoneme` alignment a TTS acoustic model consumes.
//!
//! # Example
//!
//! ```
//! use g2p_frontend_config::Settings;
//! use g2p_frontend_core::Language;
//! use g2p_frontend_pipeline::MultilingualG2p;
//!
//! let g2p = MultilingualG2p::from_settings(&Settings::default());
//! let result = g2p.g2p("안녕하세요", &[Language::Multi]).unwrap();
//! assert_eq!(result.language, Language::Ko);
//! assert_eq!(result.sequence.phonemes.first().map(String::as_str), Some("_"));
//! ```

pub mod dispatcher;
pub mod features;
pub mod g2p;

pub use dispatcher::{load_backend, BackendCache, MultilingualG2p};
pub use features::{FeatureExtractor, FeatureMode, HashEmbedder, UnitSplit};
pub use g2p::{G2pBackend, G2pOptions};
