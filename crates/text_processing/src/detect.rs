//! Script-based language selection
//!
//! Each script test is anchored at the start of the text: only the leading
//! run of characters decides. Text that opens with Latin letters or
//! punctuation is therefore never classified as Japanese, Chinese or Korean
//! even if such characters follow. Callers rely on this, including the JP
//! fallback it produces, so the anchoring is kept as is.

use g2p_frontend_core::{Language, Script};
use once_cell::sync::Lazy;
use regex::Regex;

static CHINESE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\x{4E00}-\x{9FA5}]+").unwrap());

static JAPANESE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FFF}\x{3400}-\x{4DBF}\x{3005}]+",
    )
    .unwrap()
});

static KOREAN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\x{AC00}-\x{D7A3}\x{1100}-\x{11FF}\x{3130}-\x{318F}]+").unwrap()
});

/// Picks a backend language for a piece of text
#[derive(Debug, Clone, Default)]
pub struct LanguageSelector;

impl LanguageSelector {
    pub fn new() -> Self {
        Self
    }

    /// Script of the leading characters of `text`
    ///
    /// Checked in priority order: Han, Japanese, Hangul, then Latin for
    /// everything else. Kanji shared with Chinese resolve to `Han`.
    pub fn detect_script(&self, text: &str) -> Script {
        if CHINESE_PATTERN.is_match(text) {
            Script::Han
        } else if JAPANESE_PATTERN.is_match(text) {
            Script::Japanese
        } else if KOREAN_PATTERN.is_match(text) {
            Script::Hangul
        } else {
            Script::Latin
        }
    }

    /// Resolve `text` to one of `candidates`.
    ///
    /// `Multi` in the candidate list stands for every concrete language.
    /// When the detected language is not allowed the result is always
    /// `Jp`, never `En` or `Zh`.
    pub fn select(&self, text: &str, candidates: &[Language]) -> Language {
        let allowed = |lang: Language| {
            candidates.contains(&lang) || candidates.contains(&Language::Multi)
        };

        let detected = self.detect_script(text).language();
        let selected = if allowed(detected) {
            detected
        } else {
            Language::Jp
        };

        tracing::debug!(
            detected = %detected,
            selected = %selected,
            "Selected language"
        );
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Language; 4] = [Language::En, Language::Jp, Language::Zh, Language::Ko];

    #[test]
    fn test_detect_scripts() {
        let selector = LanguageSelector::new();
        assert_eq!(selector.detect_script("你好"), Script::Han);
        assert_eq!(selector.detect_script("こんにちは"), Script::Japanese);
        assert_eq!(selector.detect_script("カタカナ"), Script::Japanese);
        assert_eq!(selector.detect_script("안녕하세요"), Script::Hangul);
        assert_eq!(selector.detect_script("hello"), Script::Latin);
        assert_eq!(selector.detect_script(""), Script::Latin);
    }

    #[test]
    fn test_han_takes_priority() {
        let selector = LanguageSelector::new();
        assert_eq!(selector.select("日本語です", &ALL), Language::Zh);
        assert_eq!(
            selector.select("日本語です", &[Language::Jp, Language::En]),
            Language::Jp
        );
    }

    #[test]
    fn test_prefix_anchoring() {
        let selector = LanguageSelector::new();
        // Latin first: Japanese later in the string does not count.
        assert_eq!(selector.select("OK、わかりました", &ALL), Language::En);
        assert_eq!(selector.select("「こんにちは」", &ALL), Language::En);
        assert_eq!(selector.select("ひらがな漢字", &ALL), Language::Jp);
    }

    #[test]
    fn test_fallback_is_always_jp() {
        let selector = LanguageSelector::new();
        let jp_only = [Language::Jp];
        assert_eq!(selector.select("hello", &jp_only), Language::Jp);
        assert_eq!(selector.select("你好", &jp_only), Language::Jp);
        assert_eq!(selector.select("안녕", &[Language::Jp, Language::En]), Language::Jp);
        assert_eq!(selector.select("你好", &[Language::Jp, Language::En]), Language::Jp);
        assert_eq!(selector.select("hello", &[Language::Jp, Language::Zh]), Language::Jp);
    }

    #[test]
    fn test_multi_allows_everything() {
        let selector = LanguageSelector::new();
        assert_eq!(selector.select("안녕하세요", &[Language::Multi]), Language::Ko);
        assert_eq!(selector.select("hello", &[Language::Multi]), Language::En);
    }

    #[test]
    fn test_korean_selected_when_allowed() {
        let selector = LanguageSelector::new();
        assert_eq!(selector.select("안녕하세요", &ALL), Language::Ko);
    }
}
