//! Korean normalization
//!
//! Punctuation table, decimal points and unit suffixes, counted numbers,
//! lowercase Latin letters spelled in Hangul, then a space after
//! sentence punctuation.

use g2p_frontend_core::Language;
use once_cell::sync::Lazy;
use regex::Regex;

use super::punctuation::{ReplaceMap, COMMON_PUNCTUATION, KOREAN_EXTRA};
use super::Normalizer;
use crate::numbers::korean::{number_to_hangul, DECIMAL_POINT};

static PUNCTUATION_MAP: Lazy<ReplaceMap> = Lazy::new(|| {
    let mut pairs: Vec<(&'static str, &'static str)> = COMMON_PUNCTUATION.to_vec();
    pairs.extend_from_slice(KOREAN_EXTRA);
    ReplaceMap::new(&pairs)
});

static DECIMAL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\.([0-9]+)").unwrap());

/// Unit suffixes in application order. A unit only expands when a
/// non-letter follows it.
const UNITS: &[(&str, &str)] = &[
    ("kg", "킬로그램"),
    ("g", "그램"),
    ("mg", "밀리그램"),
    ("km", "킬로미터"),
    ("m", "미터"),
    ("cm", "센티미터"),
    ("mm", "밀리미터"),
    ("l", "리터"),
    ("ml", "밀리리터"),
    ("bit", "비트"),
    ("B", "바이트"),
    ("KB", "킬로바이트"),
    ("MB", "메가바이트"),
    ("GB", "기가바이트"),
    ("TB", "테라바이트"),
];

static UNIT_PATTERNS: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    UNITS
        .iter()
        .map(|(unit, spoken)| {
            let pattern = Regex::new(&format!(r"([0-9]+){}([^a-zA-Z])", unit)).unwrap();
            (pattern, format!("${{1}}{}${{2}}", spoken))
        })
        .collect()
});

static SPACE_AFTER_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([,;.?!])(\w)").unwrap());

const LATIN_TO_HANGUL: [&str; 26] = [
    "에이", "비", "시", "디", "이", "에프", "지", "에이치", "아이", "제이", "케이", "엘", "엠",
    "엔", "오", "피", "큐", "아르", "에스", "티", "유", "브이", "더블유", "엑스", "와이", "제트",
];

/// Decimal points become the spoken marker; units expand to their names
pub fn normalize_numbers(text: &str) -> String {
    let mut text = DECIMAL_PATTERN
        .replace_all(text, format!("${{1}}{} ${{2}}", DECIMAL_POINT).as_str())
        .into_owned();
    for (pattern, replacement) in UNIT_PATTERNS.iter() {
        text = pattern.replace_all(&text, replacement.as_str()).into_owned();
    }
    text
}

/// Spell lowercase ASCII letters the way Korean readers say them
pub fn latin_to_hangul(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                LATIN_TO_HANGUL[(c as u8 - b'a') as usize].to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct KoreanNormalizer;

impl KoreanNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for KoreanNormalizer {
    fn normalize(&self, text: &str) -> String {
        let text = PUNCTUATION_MAP.apply(text);
        let text = normalize_numbers(&text);
        let text = number_to_hangul(&text);
        let text = latin_to_hangul(&text);
        SPACE_AFTER_PUNCTUATION
            .replace_all(&text, "$1 $2")
            .into_owned()
    }

    fn language(&self) -> Language {
        Language::Ko
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> String {
        KoreanNormalizer::new().normalize(text)
    }

    #[test]
    fn test_units() {
        assert_eq!(normalize_numbers("5kg 정도"), "5킬로그램 정도");
        assert_eq!(normalize_numbers("3ml 넣고"), "3밀리리터 넣고");
        assert_eq!(normalize_numbers("2MB 파일"), "2메가바이트 파일");
        // no expansion before another letter
        assert_eq!(normalize_numbers("5kgs"), "5kgs");
    }

    #[test]
    fn test_decimal_point() {
        assert_eq!(normalize_numbers("3.5"), "3쩜 5");
    }

    #[test]
    fn test_native_counter() {
        assert_eq!(normalize("사과 3개를 샀다"), "사과 세 개를 샀다");
        assert_eq!(normalize("고양이 2마리"), "고양이 두 마리");
    }

    #[test]
    fn test_sino_counter() {
        assert_eq!(normalize("3층"), "삼 층");
    }

    #[test]
    fn test_latin_letters() {
        assert_eq!(latin_to_hangul("abc"), "에이비시");
        assert_eq!(latin_to_hangul("ABC"), "ABC");
    }

    #[test]
    fn test_punctuation_spacing() {
        assert_eq!(normalize("네.좋아요"), "네. 좋아요");
        assert_eq!(normalize("“안녕”"), "'안녕'");
        assert_eq!(normalize("시간: 지금"), "시간, 지금");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("사과 3개를 샀다. 5kg 정도! abc");
        assert_eq!(once, "사과 세 개를 샀다. 오 킬로그램 정도! 에이비시");
        assert_eq!(normalize(&once), once);
    }
}
