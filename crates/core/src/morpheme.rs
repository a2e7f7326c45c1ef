//! Morpheme records produced by a Japanese morphological analyzer

use serde::{Deserialize, Serialize};

/// Ideographic iteration mark
pub const KANJI_ITERATION_MARK: char = '々';

/// Kana iteration marks: hiragana, hiragana voiced, katakana, katakana voiced
pub const KANA_ITERATION_MARKS: [char; 4] = ['ゝ', 'ゞ', 'ヽ', 'ヾ'];

/// Part of speech used for particles
pub const POS_PARTICLE: &str = "助詞";

/// Part of speech used for symbols and punctuation
pub const POS_SYMBOL: &str = "記号";

/// One morpheme with its reading and accent data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphemeRecord {
    /// Surface form as it appears in the text
    pub string: String,
    pub pos: String,
    #[serde(default)]
    pub pos_group1: String,
    #[serde(default)]
    pub pos_group2: String,
    #[serde(default)]
    pub pos_group3: String,
    #[serde(default)]
    pub ctype: String,
    #[serde(default)]
    pub cform: String,
    #[serde(default)]
    pub orig: String,
    /// Katakana reading
    pub read: String,
    /// Katakana pronunciation
    pub pron: String,
    /// Accent nucleus position; 0 is flat
    #[serde(default)]
    pub acc: u32,
    #[serde(default)]
    pub mora_size: u32,
    #[serde(default)]
    pub chain_rule: String,
    /// 1 when this morpheme continues the previous accent phrase
    #[serde(default)]
    pub chain_flag: i32,
}

impl MorphemeRecord {
    /// Minimal record with a surface, reading and mora count
    pub fn new(surface: &str, pos: &str, reading: &str, acc: u32, mora_size: u32) -> Self {
        Self {
            string: surface.to_string(),
            pos: pos.to_string(),
            orig: surface.to_string(),
            read: reading.to_string(),
            pron: reading.to_string(),
            acc,
            mora_size,
            chain_flag: -1,
            ..Default::default()
        }
    }

    pub fn with_chain_flag(mut self, chain_flag: i32) -> Self {
        self.chain_flag = chain_flag;
        self
    }

    pub fn is_particle(&self) -> bool {
        self.pos == POS_PARTICLE
    }

    /// Whether the surface consists only of iteration marks of the given kind
    pub fn is_kanji_mark_only(&self) -> bool {
        !self.string.is_empty() && self.string.chars().all(|c| c == KANJI_ITERATION_MARK)
    }

    pub fn is_kana_mark_only(&self) -> bool {
        !self.string.is_empty() && self.string.chars().all(|c| KANA_ITERATION_MARKS.contains(&c))
    }

    pub fn surface_len(&self) -> usize {
        self.string.chars().count()
    }
}
