//! English G2P
//!
//! Subword tokens are regrouped into words, each word is looked up in the
//! short-form dictionary (all-caps tokens only), the full dictionary and
//! finally the letter predictor. ARPAbet stress digits become tones.

pub mod cmudict;
pub mod predictor;
pub mod tokenizer;

pub use cmudict::CmuDict;
pub use predictor::LetterPredictor;
#[cfg(feature = "hf-tokenizer")]
pub use tokenizer::HfTokenizer;
pub use tokenizer::MarkerTokenizer;

use g2p_frontend_core::symbols::is_punctuation;
use g2p_frontend_core::{
    Language, LanguageResult, PhonemePredictor, PronouncingDictionary, Result, SequenceBuilder,
    SubwordTokenizer, WordUnit, WORD_START_MARKER,
};
use g2p_frontend_text_processing::{EnglishNormalizer, Normalizer};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;

use super::{replace_unknown_phonemes, G2pBackend, G2pOptions};

const ARPA_VOWELS: &[&str] = &[
    "AA", "AE", "AH", "AO", "AW", "AY", "EH", "ER", "EY", "IH", "IY", "OW", "OY", "UH", "UW",
];

const ARPA_CONSONANTS: &[&str] = &[
    "B", "CH", "D", "DH", "F", "G", "HH", "JH", "K", "L", "M", "N", "NG", "P", "R", "S", "SH",
    "T", "TH", "V", "W", "Y", "Z", "ZH",
];

/// ARPAbet tokens with stress digits as they appear in cmudict
static ARPA: Lazy<HashSet<String>> = Lazy::new(|| {
    let mut set: HashSet<String> = ARPA_CONSONANTS.iter().map(|c| c.to_string()).collect();
    for vowel in ARPA_VOWELS {
        for stress in 0..3 {
            set.insert(format!("{}{}", vowel, stress));
        }
    }
    set.insert("ER".to_string());
    set.insert("IH".to_string());
    set
});

/// Symbol rewrites applied before inventory validation
fn post_replace(phoneme: String) -> String {
    let replaced = match phoneme.as_str() {
        "：" | "；" | "，" | "、" | "·" => ",",
        "。" | "\n" => ".",
        "！" => "!",
        "？" => "?",
        "..." | "……" | "⋯" => "…",
        "v" => "V",
        _ => return phoneme,
    };
    replaced.to_string()
}

/// Split a trailing stress digit into a tone: digit `d` gives `d + 1`,
/// no digit gives 3. The phoneme is lowercased.
fn refine(phoneme: &str) -> (String, u8) {
    match phoneme.chars().last().and_then(|c| c.to_digit(10)) {
        Some(stress) => (
            phoneme[..phoneme.len() - 1].to_lowercase(),
            stress as u8 + 1,
        ),
        None => (phoneme.to_lowercase(), 3),
    }
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// Group subword tokens into words.
///
/// A word-start token opens a new word. A punctuation token joins the
/// current word only when it is followed by a continuation token (as in
/// `don ' t`); otherwise it stands alone.
pub fn group_tokens(tokens: &[String]) -> Vec<Vec<String>> {
    let mut groups: Vec<Vec<String>> = Vec::new();

    for (idx, token) in tokens.iter().enumerate() {
        if let Some(rest) = token.strip_prefix(WORD_START_MARKER) {
            groups.push(vec![rest.to_string()]);
            continue;
        }

        if is_punctuation(token) {
            let continues = tokens.get(idx + 1).map_or(false, |next| {
                !next.starts_with(WORD_START_MARKER) && !is_punctuation(next)
            });
            if !continues {
                groups.push(vec![token.clone()]);
                continue;
            }
        }

        match groups.last_mut() {
            Some(group) => group.push(token.clone()),
            None => groups.push(vec![token.clone()]),
        }
    }

    groups
}

pub struct EnglishG2p {
    normalizer: EnglishNormalizer,
    tokenizer: Arc<dyn SubwordTokenizer>,
    dictionary: Arc<dyn PronouncingDictionary>,
    shortform: Arc<dyn PronouncingDictionary>,
    predictor: Arc<dyn PhonemePredictor>,
}

impl EnglishG2p {
    pub fn new(
        tokenizer: Arc<dyn SubwordTokenizer>,
        dictionary: Arc<dyn PronouncingDictionary>,
        shortform: Arc<dyn PronouncingDictionary>,
        predictor: Arc<dyn PhonemePredictor>,
    ) -> Self {
        Self {
            normalizer: EnglishNormalizer::new(),
            tokenizer,
            dictionary,
            shortform,
            predictor,
        }
    }

    /// Subword tokens of normalized text; one alignment unit each
    pub fn tokenize(&self, normalized: &str) -> Result<Vec<String>> {
        self.tokenizer.tokenize(normalized)
    }

    /// Raw phonemes and tones of one token
    fn token_phonemes(&self, token: &str) -> Result<Vec<(String, u8)>> {
        if is_punctuation(token) {
            return Ok(vec![(token.to_string(), 0)]);
        }

        let syllables = if is_all_caps(token) {
            self.shortform
                .lookup(token)
                .or_else(|| self.dictionary.lookup(token))
        } else {
            self.dictionary.lookup(token)
        };
        if let Some(syllables) = syllables {
            return Ok(syllables.iter().flatten().map(|ph| refine(ph)).collect());
        }

        let predicted = self.predictor.predict(token)?;
        Ok(predicted
            .into_iter()
            .filter(|ph| ph != " ")
            .map(|ph| {
                if ARPA.contains(&ph) {
                    refine(&ph)
                } else {
                    (ph, 0)
                }
            })
            .collect())
    }

    fn word(&self, group: &[String], options: &G2pOptions) -> Result<WordUnit> {
        let surface = group.concat();
        let mut word = WordUnit::new(surface.as_str(), group.len());

        // contractions are pronounced as one dictionary word
        let joined;
        let tokens: &[String] = if group.len() > 1 && group.iter().any(|t| t == "'") {
            joined = [surface.clone()];
            &joined
        } else {
            group
        };

        let mut phonemes = Vec::new();
        let mut tones = Vec::new();
        for token in tokens.iter().filter(|t| !t.is_empty()) {
            for (phoneme, tone) in self.token_phonemes(token)? {
                phonemes.push(post_replace(phoneme));
                tones.push(tone);
            }
        }

        let phonemes = replace_unknown_phonemes(Language::En, phonemes, options.raise_yomi_error)?;
        for (phoneme, tone) in phonemes.into_iter().zip(tones) {
            word.push(phoneme, tone);
        }
        Ok(word)
    }
}

impl G2pBackend for EnglishG2p {
    fn language(&self) -> Language {
        Language::En
    }

    fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    fn g2p(&self, text: &str, options: &G2pOptions) -> Result<LanguageResult> {
        let normalized = self.normalize(text);
        let tokens = self.tokenize(&normalized)?;

        let mut builder = SequenceBuilder::new();
        for group in group_tokens(&tokens) {
            builder.push_word(self.word(&group, options)?);
        }

        let sequence = builder.finish(normalized);
        debug_assert_eq!(sequence.unit_count(), tokens.len());
        Ok(LanguageResult::new(Language::En, sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DICT: &str = "HELLO  HH AH0 - L OW1
WORLD  W ER1 L D
DON'T  D OW1 N T
USA  Y UW1 - EH1 S - EY1
";

    const SHORTFORM: &str = "USA  Y UW1 - EY1\n";

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn backend() -> EnglishG2p {
        EnglishG2p::new(
            Arc::new(MarkerTokenizer::new()),
            Arc::new(CmuDict::parse(DICT).unwrap()),
            Arc::new(CmuDict::parse(SHORTFORM).unwrap()),
            Arc::new(LetterPredictor::new()),
        )
    }

    fn run(text: &str) -> LanguageResult {
        backend().g2p(text, &G2pOptions::default()).unwrap()
    }

    #[test]
    fn test_refine() {
        assert_eq!(refine("AH0"), ("ah".to_string(), 1));
        assert_eq!(refine("OW1"), ("ow".to_string(), 2));
        assert_eq!(refine("HH"), ("hh".to_string(), 3));
    }

    #[test]
    fn test_group_tokens() {
        let groups = group_tokens(&tokens(&["▁don", "'", "t", "▁go", ",", "▁now", "!"]));
        assert_eq!(
            groups,
            vec![
                tokens(&["don", "'", "t"]),
                tokens(&["go"]),
                tokens(&[","]),
                tokens(&["now"]),
                tokens(&["!"]),
            ]
        );
    }

    #[test]
    fn test_group_continuations_and_leading_tokens() {
        let groups = group_tokens(&tokens(&["ab", "▁un", "believ", "able"]));
        assert_eq!(groups, vec![tokens(&["ab"]), tokens(&["un", "believ", "able"])]);
    }

    #[test]
    fn test_dictionary_word() {
        let result = run("hello");
        assert_eq!(result.sequence.phonemes, vec!["_", "hh", "ah", "l", "ow", "_"]);
        assert_eq!(result.sequence.tones, vec![0, 3, 1, 3, 2, 0]);
        assert_eq!(result.sequence.word2phoneme, vec![1, 4, 1]);
    }

    #[test]
    fn test_sequence_invariants() {
        for text in ["Hello, world!", "don't stop", "USA", "zxq", ""] {
            let result = run(text);
            let seq = &result.sequence;
            assert_eq!(seq.phonemes.len(), seq.tones.len());
            assert_eq!(seq.word2phoneme.iter().sum::<usize>(), seq.phonemes.len());
            let units = MarkerTokenizer::new().tokenize(&seq.normalized_text).unwrap().len();
            assert_eq!(seq.word2phoneme.len(), units + 2);
        }
    }

    #[test]
    fn test_contraction_uses_whole_word() {
        let result = run("don't");
        assert_eq!(result.sequence.phonemes, vec!["_", "d", "ow", "n", "t", "_"]);
        // four phonemes over three subword tokens
        assert_eq!(result.sequence.word2phoneme, vec![1, 2, 1, 1, 1]);
    }

    #[test]
    fn test_shortform_preferred_for_all_caps() {
        let caps = run("USA");
        assert_eq!(caps.sequence.phonemes, vec!["_", "y", "uw", "ey", "_"]);

        let lower = run("usa");
        assert_eq!(
            lower.sequence.phonemes,
            vec!["_", "y", "uw", "eh", "s", "ey", "_"]
        );
    }

    #[test]
    fn test_punctuation_tone_zero() {
        let result = run("hello!");
        let seq = &result.sequence;
        assert_eq!(seq.phonemes[seq.phonemes.len() - 2], "!");
        assert_eq!(seq.tones[seq.tones.len() - 2], 0);
    }

    #[test]
    fn test_predictor_fallback() {
        let result = run("ship");
        assert_eq!(result.sequence.phonemes, vec!["_", "sh", "ih", "p", "_"]);
        assert_eq!(result.sequence.tones, vec![0, 3, 2, 3, 0]);
    }

    struct OddPredictor;

    impl PhonemePredictor for OddPredictor {
        fn predict(&self, _word: &str) -> Result<Vec<String>> {
            Ok(tokens(&["K", " ", "QQ", "。"]))
        }
    }

    fn odd_backend() -> EnglishG2p {
        EnglishG2p::new(
            Arc::new(MarkerTokenizer::new()),
            Arc::new(CmuDict::new()),
            Arc::new(CmuDict::new()),
            Arc::new(OddPredictor),
        )
    }

    #[test]
    fn test_unknown_predictor_symbols() {
        let result = odd_backend().g2p("word", &G2pOptions::default()).unwrap();
        assert_eq!(result.sequence.phonemes, vec!["_", "k", "UNK", ".", "_"]);
        assert_eq!(result.sequence.tones, vec![0, 3, 0, 0, 0]);
    }

    #[test]
    fn test_strict_mode_raises() {
        let err = odd_backend()
            .g2p("word", &G2pOptions::default().strict())
            .unwrap_err();
        assert!(err.is_yomi());
    }

    #[test]
    fn test_no_japanese_extras() {
        assert!(run("hello").japanese_extras().is_none());
    }
}
