//! Letter-to-sound rules for words missing from the dictionary

use g2p_frontend_core::{PhonemePredictor, Result};

/// Rule-based ARPAbet prediction: digraphs first, then single letters.
///
/// Vowels carry primary stress; a final silent `e` is dropped.
#[derive(Debug, Clone, Default)]
pub struct LetterPredictor;

impl LetterPredictor {
    pub fn new() -> Self {
        Self
    }

    fn digraph(pair: &str) -> Option<&'static [&'static str]> {
        let phones: &'static [&'static str] = match pair {
            "th" => &["TH"],
            "sh" => &["SH"],
            "ch" => &["CH"],
            "ng" => &["NG"],
            "ph" => &["F"],
            "wh" => &["W"],
            "ck" => &["K"],
            "qu" => &["K", "W"],
            "ee" | "ea" => &["IY1"],
            "oo" => &["UW1"],
            "ou" => &["AW1"],
            "ow" => &["OW1"],
            "ai" | "ay" => &["EY1"],
            "oi" | "oy" => &["OY1"],
            _ => return None,
        };
        Some(phones)
    }
}

impl PhonemePredictor for LetterPredictor {
    fn predict(&self, word: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = word.to_lowercase().chars().filter(|c| c.is_ascii_alphabetic()).collect();
        let mut phones: Vec<&'static str> = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if i + 1 < chars.len() {
                let pair: String = chars[i..i + 2].iter().collect();
                if let Some(digraph) = Self::digraph(&pair) {
                    phones.extend_from_slice(digraph);
                    i += 2;
                    continue;
                }
            }

            let next = chars.get(i + 1).copied();
            match chars[i] {
                'a' => phones.push("AE1"),
                'b' => phones.push("B"),
                'c' if matches!(next, Some('e' | 'i' | 'y')) => phones.push("S"),
                'c' | 'k' | 'q' => phones.push("K"),
                'd' => phones.push("D"),
                'e' if i == chars.len() - 1 && !phones.is_empty() => {}
                'e' => phones.push("EH1"),
                'f' => phones.push("F"),
                'g' => phones.push("G"),
                'h' => phones.push("HH"),
                'i' => phones.push("IH1"),
                'j' => phones.push("JH"),
                'l' => phones.push("L"),
                'm' => phones.push("M"),
                'n' => phones.push("N"),
                'o' => phones.push("AA1"),
                'p' => phones.push("P"),
                'r' => phones.push("R"),
                's' => phones.push("S"),
                't' => phones.push("T"),
                'u' => phones.push("AH1"),
                'v' => phones.push("V"),
                'w' => phones.push("W"),
                'x' => phones.extend_from_slice(&["K", "S"]),
                'y' if phones.is_empty() => phones.push("Y"),
                'y' => phones.push("IY1"),
                'z' => phones.push("Z"),
                _ => {}
            }
            i += 1;
        }

        Ok(phones.into_iter().map(str::to_string).collect())
    }
}
