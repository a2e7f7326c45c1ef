//! Table-driven punctuation replacement

use regex::{Captures, Regex};
use std::collections::HashMap;

/// Replaces every occurrence of a table key with its value in one pass.
///
/// Longer keys win over their prefixes, so `...` is replaced before `.` would be.
#[derive(Debug, Clone)]
pub struct ReplaceMap {
    pattern: Regex,
    table: HashMap<&'static str, &'static str>,
}

impl ReplaceMap {
    pub fn new(pairs: &[(&'static str, &'static str)]) -> Self {
        let mut keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        keys.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        let alternation = keys
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");

        Self {
            // Escaped literals always form a valid pattern.
            pattern: Regex::new(&alternation).unwrap(),
            table: pairs.iter().copied().collect(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                self.table.get(&caps[0]).copied().unwrap_or("").to_string()
            })
            .into_owned()
    }
}

/// Punctuation table shared by the Japanese, English and Korean normalizers
pub const COMMON_PUNCTUATION: &[(&str, &str)] = &[
    ("：", ","),
    ("；", ","),
    ("，", ","),
    ("。", "."),
    ("！", "!"),
    ("？", "?"),
    ("\n", "."),
    ("．", "."),
    ("...", "…"),
    ("···", "…"),
    ("・・・", "…"),
    ("·", ","),
    ("・", ","),
    ("、", ","),
    ("$", "."),
    ("“", "'"),
    ("”", "'"),
    ("\"", "'"),
    ("‘", "'"),
    ("’", "'"),
    ("（", "'"),
    ("）", "'"),
    ("(", "'"),
    (")", "'"),
    ("《", "'"),
    ("》", "'"),
    ("【", "'"),
    ("】", "'"),
    ("[", "'"),
    ("]", "'"),
    ("—", "-"),
    ("−", "-"),
    ("～", "-"),
    ("~", "-"),
    ("「", "'"),
    ("」", "'"),
];

/// Korean additionally folds slashes and ASCII colons into commas
pub const KOREAN_EXTRA: &[(&str, &str)] = &[("/", ","), (":", ","), (";", ",")];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_key_wins() {
        let map = ReplaceMap::new(&[(".", "。"), ("...", "…")]);
        assert_eq!(map.apply("a...b."), "a…b。");
    }

    #[test]
    fn test_common_table() {
        let map = ReplaceMap::new(COMMON_PUNCTUATION);
        assert_eq!(map.apply("「はい」、そう。"), "'はい',そう.");
        assert_eq!(map.apply("wait..."), "wait…");
    }

    #[test]
    fn test_apply_is_stable() {
        let map = ReplaceMap::new(COMMON_PUNCTUATION);
        let once = map.apply("（注）：テスト！");
        assert_eq!(map.apply(&once), once);
    }
}
