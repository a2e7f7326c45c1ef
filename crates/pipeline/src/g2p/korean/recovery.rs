//! Recovery of `[UNK]` tagger tokens from the source text
//!
//! The tagger emits `[UNK]` for spans it cannot segment. Each placeholder is
//! replaced by the slice of the normalized text between its neighbours:
//!
//! - sole token: the whole (trimmed) text
//! - first token: from the start of the text up to the next token
//! - last token: from the end of the previous token to the end of the text
//! - middle token: between the previous and the next token
//!
//! A neighbour that is itself a placeholder cannot anchor the slice. When
//! the next token is punctuation, a trailing punctuation character of the
//! slice belongs to it and is trimmed. Placeholders that stay unresolved are
//! dropped together with their unit counts.

use g2p_frontend_core::symbols::is_punctuation;
use g2p_frontend_core::UNKNOWN_TOKEN;

fn is_placeholder(word: &str) -> bool {
    word == UNKNOWN_TOKEN
}

/// Resolve placeholders in one left-to-right pass.
///
/// `lens` holds the tagger-token count of each word and is kept aligned
/// with `words`.
pub fn recover_unknown(
    words: Vec<String>,
    lens: Vec<usize>,
    text: &str,
) -> (Vec<String>, Vec<usize>) {
    if !words.iter().any(|w| is_placeholder(w)) {
        return (words, lens);
    }
    tracing::debug!(text = %text, "Recovering unknown tagger tokens");

    let count = words.len();
    let mut resolved: Vec<Option<String>> = Vec::with_capacity(count);
    let mut cursor = 0usize;

    for i in 0..count {
        let word = &words[i];
        if !is_placeholder(word) {
            if let Some(pos) = text[cursor..].find(word.as_str()) {
                cursor += pos + word.len();
            }
            resolved.push(Some(word.clone()));
            continue;
        }

        if count == 1 {
            resolved.push(Some(text.trim().to_string()));
            continue;
        }

        let prev_ok = i == 0 || !is_placeholder(&words[i - 1]);
        let next = words.get(i + 1).filter(|w| !is_placeholder(w));
        let next_ok = i == count - 1 || next.is_some();
        if !prev_ok || !next_ok {
            resolved.push(None);
            continue;
        }

        let end = match next {
            Some(next) => match text[cursor..].find(next.as_str()) {
                Some(pos) => cursor + pos,
                None => {
                    resolved.push(None);
                    continue;
                }
            },
            None => text.len(),
        };

        let mut span = text[cursor..end].trim();
        if next.map_or(false, |n| is_punctuation(n)) {
            if let Some(last) = span.chars().last() {
                if is_punctuation(last.encode_utf8(&mut [0u8; 4])) {
                    span = span[..span.len() - last.len_utf8()].trim_end();
                }
            }
        }
        cursor = end;
        resolved.push(Some(span.to_string()).filter(|s| !s.is_empty()));
    }

    let mut out_words = Vec::with_capacity(count);
    let mut out_lens = Vec::with_capacity(count);
    for (word, len) in resolved.into_iter().zip(lens) {
        match word {
            Some(word) => {
                out_words.push(word);
                out_lens.push(len);
            }
            None => tracing::warn!("Dropping unresolved unknown token"),
        }
    }
    (out_words, out_lens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recover(words: &[&str], text: &str) -> Vec<String> {
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        let lens = vec![1; words.len()];
        recover_unknown(words, lens, text).0
    }

    #[test]
    fn test_no_placeholder() {
        assert_eq!(recover(&["회사", "."], "회사."), vec!["회사", "."]);
    }

    #[test]
    fn test_sole_placeholder() {
        assert_eq!(recover(&["[UNK]"], "  ABC "), vec!["ABC"]);
    }

    #[test]
    fn test_first_placeholder() {
        assert_eq!(recover(&["[UNK]", "회사"], "ABC 회사"), vec!["ABC", "회사"]);
    }

    #[test]
    fn test_last_placeholder() {
        assert_eq!(recover(&["회사", "[UNK]"], "회사 XYZ"), vec!["회사", "XYZ"]);
    }

    #[test]
    fn test_middle_placeholder() {
        assert_eq!(
            recover(&["나는", "[UNK]", "좋아"], "나는 Rust 좋아"),
            vec!["나는", "Rust", "좋아"]
        );
    }

    #[test]
    fn test_repeated_neighbour_uses_cursor() {
        assert_eq!(
            recover(&["가", "가", "[UNK]", "나"], "가 가 X 나"),
            vec!["가", "가", "X", "나"]
        );
    }

    #[test]
    fn test_trailing_punctuation_trimmed() {
        assert_eq!(recover(&["[UNK]", "!"], "ABC?!"), vec!["ABC", "!"]);
    }

    #[test]
    fn test_adjacent_placeholders_dropped_with_lens() {
        let words = vec!["[UNK]".to_string(), "[UNK]".to_string(), "끝".to_string()];
        let (words, lens) = recover_unknown(words, vec![1, 2, 3], "A B 끝");
        assert_eq!(words, vec!["끝"]);
        assert_eq!(lens, vec![3]);
    }

    #[test]
    fn test_empty_span_dropped() {
        let words = vec!["회사".to_string(), "[UNK]".to_string(), "!".to_string()];
        let (words, lens) = recover_unknown(words, vec![1, 1, 1], "회사!");
        assert_eq!(words, vec!["회사", "!"]);
        assert_eq!(lens, vec![1, 1]);
    }
}
