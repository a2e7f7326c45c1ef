//! In-tree tagger and pronouncer

use g2p_frontend_core::symbols::is_punctuation;
use g2p_frontend_core::{KoreanPronouncer, KoreanTagger, Result, UNKNOWN_TOKEN};

use super::jamo::{is_hangul, Syllable, SILENT_INITIAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Hangul,
    Punctuation,
    Other,
}

fn classify(c: char) -> CharClass {
    if is_hangul(c) {
        CharClass::Hangul
    } else if is_punctuation(c.encode_utf8(&mut [0u8; 4])) {
        CharClass::Punctuation
    } else {
        CharClass::Other
    }
}

/// Wakati-style tagger that splits on whitespace and punctuation.
///
/// Spans it cannot read (anything that is neither Hangul nor punctuation)
/// come back as `[UNK]`, the way a dictionary tagger reports them.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTagger;

impl WhitespaceTagger {
    pub fn new() -> Self {
        Self
    }
}

impl KoreanTagger for WhitespaceTagger {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();

        for word in text.split_whitespace() {
            let mut run = String::new();
            let mut run_class = None;

            for c in word.chars() {
                let class = classify(c);
                if run_class != Some(class) || class == CharClass::Punctuation {
                    flush(&mut tokens, &mut run, run_class);
                    run_class = Some(class);
                }
                run.push(c);
            }
            flush(&mut tokens, &mut run, run_class);
        }

        Ok(tokens)
    }
}

fn flush(tokens: &mut Vec<String>, run: &mut String, class: Option<CharClass>) {
    if run.is_empty() {
        return;
    }
    let run = std::mem::take(run);
    match class {
        Some(CharClass::Other) => tokens.push(UNKNOWN_TOKEN.to_string()),
        _ => tokens.push(run),
    }
}

/// Kept and carried-over parts of a final moving onto a silent initial
fn liaison(final_: u32) -> Option<(u32, u32)> {
    let moved = match final_ {
        1 => (0, 0),
        2 => (0, 1),
        3 => (1, 9),
        4 => (0, 2),
        5 => (4, 12),
        7 => (0, 3),
        8 => (0, 5),
        9 => (8, 0),
        10 => (8, 6),
        11 => (8, 7),
        12 => (8, 9),
        13 => (8, 16),
        14 => (8, 17),
        16 => (0, 6),
        17 => (0, 7),
        18 => (17, 9),
        19 => (0, 9),
        20 => (0, 10),
        22 => (0, 12),
        23 => (0, 14),
        24 => (0, 15),
        25 => (0, 16),
        26 => (0, 17),
        _ => return None,
    };
    Some(moved)
}

/// Pronouncer applying liaison only: a final consonant moves onto a
/// following syllable that starts with silent ㅇ (음악 → 으막).
#[derive(Debug, Clone, Default)]
pub struct SpellingPronouncer;

impl SpellingPronouncer {
    pub fn new() -> Self {
        Self
    }
}

impl KoreanPronouncer for SpellingPronouncer {
    fn pronounce(&self, word: &str) -> Result<String> {
        let mut chars: Vec<char> = word.chars().collect();

        for i in 1..chars.len() {
            let (Some(mut prev), Some(mut next)) =
                (Syllable::decompose(chars[i - 1]), Syllable::decompose(chars[i]))
            else {
                continue;
            };
            if next.initial != SILENT_INITIAL {
                continue;
            }
            if let Some((kept, carried)) = liaison(prev.final_) {
                prev.final_ = kept;
                next.initial = carried;
                chars[i - 1] = prev.compose();
                chars[i] = next.compose();
            }
        }

        Ok(chars.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<String> {
        WhitespaceTagger::new().tokenize(text).unwrap()
    }

    fn pronounce(word: &str) -> String {
        SpellingPronouncer::new().pronounce(word).unwrap()
    }

    #[test]
    fn test_tagger_splits_punctuation() {
        assert_eq!(tokenize("네. 좋아요!"), vec!["네", ".", "좋아요", "!"]);
        assert_eq!(tokenize("음..."), vec!["음", ".", ".", "."]);
    }

    #[test]
    fn test_tagger_unknown_spans() {
        assert_eq!(tokenize("ABC 회사"), vec!["[UNK]", "회사"]);
        assert_eq!(tokenize("X회사"), vec!["[UNK]", "회사"]);
    }

    #[test]
    fn test_liaison() {
        assert_eq!(pronounce("음악"), "으막");
        assert_eq!(pronounce("읽어"), "일거");
        assert_eq!(pronounce("값이"), "갑시");
    }

    #[test]
    fn test_no_liaison() {
        assert_eq!(pronounce("사과"), "사과");
        assert_eq!(pronounce("강아지"), "강아지");
        assert_eq!(pronounce("좋아"), "좋아");
    }
}
