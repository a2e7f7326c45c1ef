//! CMU pronouncing dictionary
//!
//! Reads the syllabified `cmudict.rep` layout (`WORD  S1 - S2`, two spaces
//! after the headword, syllables separated by ` - `) as well as the plain
//! `WORD PH PH ...` layout. Only the first pronunciation of a word is kept.

use g2p_frontend_core::{Error, PronouncingDictionary, Result};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct CmuDict {
    entries: HashMap<String, Vec<Vec<String>>>,
}

impl CmuDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let dict = Self::parse(&data)?;
        tracing::info!(path = %path.display(), words = dict.len(), "Loaded pronouncing dictionary");
        Ok(dict)
    }

    pub fn parse(data: &str) -> Result<Self> {
        let mut entries: HashMap<String, Vec<Vec<String>>> = HashMap::new();

        for (lineno, line) in data.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.starts_with(";;;") {
                continue;
            }

            let (headword, body) = match line.split_once("  ") {
                Some(parts) => parts,
                None => line.split_once(' ').ok_or_else(|| {
                    Error::Dictionary(format!("cmudict line {}: no pronunciation", lineno + 1))
                })?,
            };

            // WORD(2) marks an alternative pronunciation
            if headword.ends_with(')') && headword.contains('(') {
                continue;
            }

            let syllables: Vec<Vec<String>> = body
                .split(" - ")
                .map(|syllable| syllable.split_whitespace().map(str::to_string).collect())
                .filter(|syllable: &Vec<String>| !syllable.is_empty())
                .collect();
            if syllables.is_empty() {
                return Err(Error::Dictionary(format!(
                    "cmudict line {}: empty pronunciation for {}",
                    lineno + 1,
                    headword
                )));
            }

            entries
                .entry(headword.trim().to_uppercase())
                .or_insert(syllables);
        }

        Ok(Self { entries })
    }

    pub fn insert(&mut self, word: &str, syllables: Vec<Vec<String>>) {
        self.entries.insert(word.to_uppercase(), syllables);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PronouncingDictionary for CmuDict {
    fn lookup(&self, word: &str) -> Option<Vec<Vec<String>>> {
        self.entries.get(&word.to_uppercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = ";;; comment line
HELLO  HH AH0 - L OW1
WORLD  W ER1 L D
READ  R IY1 D
READ(2)  R EH1 D
";

    #[test]
    fn test_parse_syllables() {
        let dict = CmuDict::parse(SAMPLE).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(
            dict.lookup("hello").unwrap(),
            vec![vec!["HH", "AH0"], vec!["L", "OW1"]]
        );
        assert!(dict.contains("World"));
    }

    #[test]
    fn test_first_pronunciation_wins() {
        let dict = CmuDict::parse(SAMPLE).unwrap();
        assert_eq!(dict.lookup("READ").unwrap(), vec![vec!["R", "IY1", "D"]]);
    }

    #[test]
    fn test_plain_layout() {
        let dict = CmuDict::parse("CAT K AE1 T\n").unwrap();
        assert_eq!(dict.lookup("cat").unwrap(), vec![vec!["K", "AE1", "T"]]);
    }

    #[test]
    fn test_missing_pronunciation() {
        assert!(CmuDict::parse("LONELY\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cmudict.rep");
        std::fs::write(&path, SAMPLE).unwrap();

        let dict = CmuDict::load(&path).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(CmuDict::load(dir.path().join("missing.rep")).is_err());
    }
}
