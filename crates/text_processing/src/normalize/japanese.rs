//! Japanese normalization
//!
//! NFKC folding, wave dashes to the long-vowel mark, numbers to kanji,
//! punctuation to the shared set, then anything the backend cannot read is
//! dropped.

use g2p_frontend_core::symbols::PUNCTUATIONS;
use g2p_frontend_core::Language;
use once_cell::sync::Lazy;
use unicode_normalization::UnicodeNormalization;

use super::punctuation::{ReplaceMap, COMMON_PUNCTUATION};
use super::Normalizer;
use crate::numbers;

static PUNCTUATION_MAP: Lazy<ReplaceMap> = Lazy::new(|| ReplaceMap::new(COMMON_PUNCTUATION));

/// Characters rewritten to `ー` before punctuation mapping
const WAVE_DASHES: [char; 4] = ['~', '〜', '～', '∼'];

fn is_allowed(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}'     // hiragana
        | '\u{30A0}'..='\u{30FF}'   // katakana
        | '\u{4E00}'..='\u{9FFF}'   // kanji
        | '\u{3400}'..='\u{4DBF}'   // kanji extension A
        | '\u{3005}'                // 々
        | 'A'..='Z'
        | 'a'..='z'
        | '\u{FF21}'..='\u{FF3A}'
        | '\u{FF41}'..='\u{FF5A}'
        | '\u{0370}'..='\u{03FF}'   // Greek
        | '\u{1F00}'..='\u{1FFF}')
        || PUNCTUATIONS.iter().any(|p| p.starts_with(c) && p.chars().count() == 1)
}

#[derive(Debug, Clone, Default)]
pub struct JapaneseNormalizer;

impl JapaneseNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for JapaneseNormalizer {
    fn normalize(&self, text: &str) -> String {
        let folded: String = text
            .nfkc()
            .map(|c| if WAVE_DASHES.contains(&c) { 'ー' } else { c })
            .collect();
        let expanded = numbers::japanese::expand(&folded);
        let punctuated = PUNCTUATION_MAP.apply(&expanded);
        punctuated.chars().filter(|c| is_allowed(*c)).collect()
    }

    fn language(&self) -> Language {
        Language::Jp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> String {
        JapaneseNormalizer::new().normalize(text)
    }

    #[test]
    fn test_width_folding() {
        assert_eq!(normalize("ｶﾀｶﾅ"), "カタカナ");
        assert_eq!(normalize("ＡＢＣ"), "ABC");
    }

    #[test]
    fn test_wave_dash() {
        assert_eq!(normalize("すごい～"), "すごいー");
        assert_eq!(normalize("ね〜"), "ねー");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(normalize("はい。そうです、ね！"), "はい.そうです,ね!");
        assert_eq!(normalize("えっと…"), "えっと…");
        assert_eq!(normalize("「こんにちは」"), "'こんにちは'");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(normalize("3月14日"), "三月十四日");
        assert_eq!(normalize("¥500"), "五百円");
    }

    #[test]
    fn test_drops_unreadable() {
        assert_eq!(normalize("猫 が ★ いる"), "猫がいる");
        assert_eq!(normalize("人々"), "人々");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("ｶﾞｰﾝ!?「なゝ樹」2,000円…");
        assert_eq!(normalize(&once), once);
    }
}
