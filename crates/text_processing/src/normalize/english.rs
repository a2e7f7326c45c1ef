//! English normalization

use g2p_frontend_core::Language;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::punctuation::{ReplaceMap, COMMON_PUNCTUATION};
use super::Normalizer;
use crate::numbers::EnglishNumbers;

static PUNCTUATION_MAP: Lazy<ReplaceMap> = Lazy::new(|| ReplaceMap::new(COMMON_PUNCTUATION));

const ABBREVIATIONS: &[(&str, &str)] = &[
    ("mrs", "misess"),
    ("mr", "mister"),
    ("dr", "doctor"),
    ("st", "saint"),
    ("co", "company"),
    ("jr", "junior"),
    ("maj", "major"),
    ("gen", "general"),
    ("drs", "doctors"),
    ("rev", "reverend"),
    ("lt", "lieutenant"),
    ("hon", "honorable"),
    ("sgt", "sergeant"),
    ("capt", "captain"),
    ("esq", "esquire"),
    ("ltd", "limited"),
    ("col", "colonel"),
    ("ft", "fort"),
];

static ABBREVIATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = ABBREVIATIONS
        .iter()
        .map(|(abbr, _)| *abbr)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b({})\.", alternation)).unwrap()
});

static SPACE_AFTER_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([,;.?!])(\w)").unwrap());

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").unwrap());

fn expand_abbreviations(text: &str) -> String {
    ABBREVIATION_PATTERN
        .replace_all(text, |caps: &Captures| {
            let key = caps[1].to_ascii_lowercase();
            ABBREVIATIONS
                .iter()
                .find(|(abbr, _)| *abbr == key)
                .map(|(_, full)| full.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[derive(Debug, Clone, Default)]
pub struct EnglishNormalizer;

impl EnglishNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for EnglishNormalizer {
    fn normalize(&self, text: &str) -> String {
        let text = expand_abbreviations(text);
        let text = EnglishNumbers::expand(&text);
        let text = PUNCTUATION_MAP.apply(&text);
        let text = SPACE_AFTER_PUNCTUATION.replace_all(&text, "$1 $2");
        MULTI_SPACE.replace_all(text.trim(), " ").into_owned()
    }

    fn language(&self) -> Language {
        Language::En
    }
}
