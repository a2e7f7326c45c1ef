//! Phoneme inventories shared by every backend
//!
//! The acoustic model expects one symbol table; each backend must emit only
//! symbols from its own inventory plus the shared punctuation set.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::Language;

/// Sentinel wrapped around every phoneme sequence
pub const PAD: &str = "_";

/// Placeholder for a phoneme that could not be resolved
pub const UNK: &str = "UNK";

/// Short pause
pub const SP: &str = "SP";

/// Punctuation symbols passed through as phonemes with tone 0
pub const PUNCTUATIONS: [&str; 7] = ["!", "?", "…", ",", ".", "'", "-"];

pub const ZH_SYMBOLS: &[&str] = &[
    "E", "En", "a", "ai", "an", "ang", "ao", "b", "c", "ch", "d", "e", "ei", "en", "eng", "er",
    "f", "g", "h", "i", "i0", "ia", "ian", "iang", "iao", "ie", "in", "ing", "iong", "ir", "iu",
    "j", "k", "l", "m", "n", "o", "ong", "ou", "p", "q", "r", "s", "sh", "t", "u", "ua", "uai",
    "uan", "uang", "ui", "un", "uo", "v", "van", "ve", "vn", "w", "x", "y", "z", "zh", "AA",
    "EE", "OO",
];

pub const JP_SYMBOLS: &[&str] = &[
    "N", "a", "a:", "b", "by", "ch", "d", "dy", "e", "e:", "f", "g", "gy", "h", "hy", "i", "i:",
    "j", "k", "ky", "m", "my", "n", "ny", "o", "o:", "p", "py", "q", "r", "ry", "s", "sh", "t",
    "ts", "ty", "u", "u:", "w", "y", "z", "zy",
];

pub const EN_SYMBOLS: &[&str] = &[
    "aa", "ae", "ah", "ao", "aw", "ay", "b", "ch", "d", "dh", "eh", "er", "ey", "f", "g", "hh",
    "ih", "iy", "jh", "k", "l", "m", "n", "ng", "ow", "oy", "p", "r", "s", "sh", "t", "th", "uh",
    "uw", "V", "w", "y", "z", "zh",
];

/// Hangul compatibility jamo: initial consonants then vowels
pub const KO_SYMBOLS: &[&str] = &[
    "ㄱ", "ㄲ", "ㄴ", "ㄷ", "ㄸ", "ㄹ", "ㅁ", "ㅂ", "ㅃ", "ㅅ", "ㅆ", "ㅇ", "ㅈ", "ㅉ", "ㅊ", "ㅋ",
    "ㅌ", "ㅍ", "ㅎ", "ㅏ", "ㅐ", "ㅑ", "ㅒ", "ㅓ", "ㅔ", "ㅕ", "ㅖ", "ㅗ", "ㅘ", "ㅙ", "ㅚ", "ㅛ",
    "ㅜ", "ㅝ", "ㅞ", "ㅟ", "ㅠ", "ㅡ", "ㅢ", "ㅣ",
];

/// Number of distinct tones per language in the shared tone table
pub const NUM_ZH_TONES: usize = 6;
pub const NUM_JP_TONES: usize = 2;
pub const NUM_EN_TONES: usize = 4;
pub const NUM_KO_TONES: usize = 1;

/// Every symbol the acoustic model knows, pad first
pub static SYMBOLS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut normal: Vec<&'static str> = ZH_SYMBOLS
        .iter()
        .chain(JP_SYMBOLS)
        .chain(EN_SYMBOLS)
        .chain(KO_SYMBOLS)
        .copied()
        .collect();
    normal.sort_unstable();
    normal.dedup();

    let mut symbols = vec![PAD];
    symbols.extend(normal);
    symbols.extend(PUNCTUATIONS);
    symbols.push(SP);
    symbols.push(UNK);
    symbols
});

static SYMBOL_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| SYMBOLS.iter().copied().collect());

static LANGUAGE_SETS: Lazy<[HashSet<&'static str>; 4]> = Lazy::new(|| {
    let with_punct = |inventory: &[&'static str]| -> HashSet<&'static str> {
        inventory.iter().chain(PUNCTUATIONS.iter()).copied().collect()
    };
    [
        with_punct(JP_SYMBOLS),
        with_punct(EN_SYMBOLS),
        with_punct(ZH_SYMBOLS),
        with_punct(KO_SYMBOLS),
    ]
});

pub fn is_punctuation(symbol: &str) -> bool {
    PUNCTUATIONS.contains(&symbol)
}

/// Whether `symbol` belongs to the combined inventory
pub fn is_symbol(symbol: &str) -> bool {
    SYMBOL_SET.contains(symbol)
}

/// Whether `symbol` is valid output for `language` (its inventory plus punctuation)
pub fn in_inventory(language: Language, symbol: &str) -> bool {
    let idx = match language {
        Language::Jp => 0,
        Language::En => 1,
        Language::Zh => 2,
        Language::Ko => 3,
        Language::Multi => return is_symbol(symbol),
    };
    LANGUAGE_SETS[idx].contains(symbol)
}
