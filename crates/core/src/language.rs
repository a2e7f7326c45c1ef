//! Language and script definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages handled by the front end
///
/// `Multi` is a request for automatic selection. It is resolved to one of
/// the concrete languages before any backend runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    /// Japanese
    Jp,
    /// English
    En,
    /// Mandarin Chinese
    Zh,
    /// Korean
    Ko,
    /// Resolve by script detection
    Multi,
}

impl Language {
    /// Concrete languages in selector resolution order
    pub const CONCRETE: [Language; 4] = [Language::En, Language::Jp, Language::Zh, Language::Ko];

    /// Tag used in configuration and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Language::Jp => "JP",
            Language::En => "EN",
            Language::Zh => "ZH",
            Language::Ko => "KO",
            Language::Multi => "MULTI",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Jp => "Japanese",
            Language::En => "English",
            Language::Zh => "Chinese",
            Language::Ko => "Korean",
            Language::Multi => "Multilingual",
        }
    }

    /// False only for the `Multi` meta tag
    pub fn is_concrete(&self) -> bool {
        !matches!(self, Language::Multi)
    }

    /// Script a language is written in
    pub fn script(&self) -> Option<Script> {
        match self {
            Language::Jp => Some(Script::Japanese),
            Language::En => Some(Script::Latin),
            Language::Zh => Some(Script::Han),
            Language::Ko => Some(Script::Hangul),
            Language::Multi => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "JP" | "JA" => Ok(Language::Jp),
            "EN" => Ok(Language::En),
            "ZH" => Ok(Language::Zh),
            "KO" | "KR" => Ok(Language::Ko),
            "MULTI" => Ok(Language::Multi),
            other => Err(crate::Error::InvalidInput(format!(
                "unknown language tag: {}",
                other
            ))),
        }
    }
}

/// Writing systems recognized by the language selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    /// CJK unified ideographs in the simplified-Chinese range
    Han,
    /// Kana, kanji and the ideographic iteration mark
    Japanese,
    /// Hangul syllables and jamo
    Hangul,
    /// Anything else, read as English
    Latin,
}

impl Script {
    pub fn language(&self) -> Language {
        match self {
            Script::Han => Language::Zh,
            Script::Japanese => Language::Jp,
            Script::Hangul => Language::Ko,
            Script::Latin => Language::En,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::Jp.code(), "JP");
        assert_eq!(Language::Multi.to_string(), "MULTI");
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("jp".parse::<Language>().unwrap(), Language::Jp);
        assert_eq!(" KO ".parse::<Language>().unwrap(), Language::Ko);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_uses_uppercase_tags() {
        let json = serde_json::to_string(&Language::Zh).unwrap();
        assert_eq!(json, "\"ZH\"");
        let lang: Language = serde_json::from_str("\"MULTI\"").unwrap();
        assert_eq!(lang, Language::Multi);
    }

    #[test]
    fn test_concrete() {
        assert!(Language::CONCRETE.iter().all(|l| l.is_concrete()));
        assert!(!Language::Multi.is_concrete());
    }

    #[test]
    fn test_script_round_trip() {
        for lang in Language::CONCRETE {
            assert_eq!(lang.script().unwrap().language(), lang);
        }
    }
}
