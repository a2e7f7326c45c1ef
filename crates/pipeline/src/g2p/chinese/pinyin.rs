//! Pinyin syllables and their initial/final split

use g2p_frontend_core::SyllableSource;
use ::pinyin::ToPinyin;

/// Syllable source backed by the `pinyin` crate's dictionary
#[derive(Debug, Clone, Default)]
pub struct PinyinSource;

impl PinyinSource {
    pub fn new() -> Self {
        Self
    }
}

impl SyllableSource for PinyinSource {
    fn syllable(&self, ch: char) -> Option<String> {
        ch.to_pinyin().map(|py| py.with_tone_num_end().to_string())
    }
}

/// Initials, two-letter ones first so they match before their prefixes
const INITIALS: &[&str] = &[
    "zh", "ch", "sh", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "r",
    "z", "c", "s", "y", "w",
];

/// Split `hao3` into `("hao", 3)`; a missing digit is the neutral tone 5
pub fn split_tone(syllable: &str) -> (String, u8) {
    let base = syllable.replace('ü', "v");
    match base.chars().last().and_then(|c| c.to_digit(10)) {
        Some(tone) => (base[..base.len() - 1].to_string(), tone as u8),
        None => (base, 5),
    }
}

/// Initial and final phonemes of a toneless syllable.
///
/// Zero-initial syllables get a glottal placeholder initial (`AA`, `EE`,
/// `OO`); `y`/`w` syllables and the `j q x` / `z c s` / `zh ch sh r`
/// series are rewritten to the finals the acoustic model was trained on.
pub fn initial_final(base: &str) -> (String, String) {
    let initial = INITIALS
        .iter()
        .copied()
        .find(|initial| base.starts_with(initial) && base.len() > initial.len())
        .unwrap_or("");
    let final_ = &base[initial.len()..];

    let final_ = match (initial, final_) {
        ("", _) => {
            let placeholder = match final_.chars().next() {
                Some('a') => "AA",
                Some('e') => "EE",
                Some('o') => "OO",
                _ => "",
            };
            return (placeholder.to_string(), final_.to_string());
        }
        ("y", "i" | "in" | "ing") => final_,
        ("y", "a") => "ia",
        ("y", "an") => "En",
        ("y", "ang") => "iang",
        ("y", "ao") => "iao",
        ("y", "e") => "E",
        ("y", "ong") => "iong",
        ("y", "ou") => "iu",
        ("y", "u") => "v",
        ("y", "uan") => "van",
        ("y", "ue") => "ve",
        ("y", "un") => "vn",
        ("w", "a") => "ua",
        ("w", "ai") => "uai",
        ("w", "an") => "uan",
        ("w", "ang") => "uang",
        ("w", "ei") => "ui",
        ("w", "en") => "un",
        ("w", "o") => "uo",
        ("j" | "q" | "x", "u") => "v",
        ("j" | "q" | "x", "uan") => "van",
        ("j" | "q" | "x", "ue") => "ve",
        ("j" | "q" | "x", "un") => "vn",
        ("z" | "c" | "s", "i") => "i0",
        ("zh" | "ch" | "sh" | "r", "i") => "ir",
        (_, "uei") => "ui",
        (_, "iou") => "iu",
        (_, "uen") => "un",
        _ => final_,
    };

    (initial.to_string(), final_.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(base: &str) -> (String, String) {
        initial_final(base)
    }

    fn pair(initial: &str, final_: &str) -> (String, String) {
        (initial.to_string(), final_.to_string())
    }

    #[test]
    fn test_split_tone() {
        assert_eq!(split_tone("hao3"), ("hao".to_string(), 3));
        assert_eq!(split_tone("de"), ("de".to_string(), 5));
        assert_eq!(split_tone("lü4"), ("lv".to_string(), 4));
    }

    #[test]
    fn test_plain_initials() {
        assert_eq!(split("hao"), pair("h", "ao"));
        assert_eq!(split("zhong"), pair("zh", "ong"));
        assert_eq!(split("lv"), pair("l", "v"));
    }

    #[test]
    fn test_zero_initial() {
        assert_eq!(split("ai"), pair("AA", "ai"));
        assert_eq!(split("er"), pair("EE", "er"));
        assert_eq!(split("ou"), pair("OO", "ou"));
    }

    #[test]
    fn test_glides() {
        assert_eq!(split("yan"), pair("y", "En"));
        assert_eq!(split("you"), pair("y", "iu"));
        assert_eq!(split("yuan"), pair("y", "van"));
        assert_eq!(split("wei"), pair("w", "ui"));
        assert_eq!(split("wo"), pair("w", "uo"));
    }

    #[test]
    fn test_apical_and_palatal_series() {
        assert_eq!(split("si"), pair("s", "i0"));
        assert_eq!(split("shi"), pair("sh", "ir"));
        assert_eq!(split("ri"), pair("r", "ir"));
        assert_eq!(split("qu"), pair("q", "v"));
        assert_eq!(split("xue"), pair("x", "ve"));
    }

    #[test]
    fn test_pinyin_source() {
        let source = PinyinSource::new();
        assert_eq!(source.syllable('你').as_deref(), Some("ni3"));
        assert_eq!(source.syllable('好').as_deref(), Some("hao3"));
        assert_eq!(source.syllable('a'), None);
    }
}
