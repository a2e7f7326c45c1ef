//! Mandarin normalization

use g2p_frontend_core::symbols::PUNCTUATIONS;
use g2p_frontend_core::Language;
use once_cell::sync::Lazy;

use super::punctuation::{ReplaceMap, COMMON_PUNCTUATION};
use super::Normalizer;
use crate::numbers;

static PUNCTUATION_MAP: Lazy<ReplaceMap> = Lazy::new(|| {
    let mut pairs: Vec<(&'static str, &'static str)> = COMMON_PUNCTUATION.to_vec();
    pairs.push(("嗯", "恩"));
    pairs.push(("呣", "母"));
    ReplaceMap::new(&pairs)
});

fn is_allowed(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
        || PUNCTUATIONS.iter().any(|p| p.starts_with(c) && p.chars().count() == 1)
}

#[derive(Debug, Clone, Default)]
pub struct ChineseNormalizer;

impl ChineseNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for ChineseNormalizer {
    fn normalize(&self, text: &str) -> String {
        let expanded = numbers::chinese::expand(text);
        let punctuated = PUNCTUATION_MAP.apply(&expanded);
        punctuated.chars().filter(|c| is_allowed(*c)).collect()
    }

    fn language(&self) -> Language {
        Language::Zh
    }
}
