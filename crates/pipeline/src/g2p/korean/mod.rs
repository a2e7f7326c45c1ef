//! Korean G2P
//!
//! Tagger tokens are merged into words (`##` tokens continue the previous
//! word), `[UNK]` tokens are recovered from the text, and each word is
//! pronounced and split into compatibility jamo. Korean carries no tones.

pub mod jamo;
pub mod recovery;
pub mod tagger;

pub use recovery::recover_unknown;
pub use tagger::{SpellingPronouncer, WhitespaceTagger};

use g2p_frontend_core::symbols::is_punctuation;
use g2p_frontend_core::{
    KoreanPronouncer, KoreanTagger, Language, LanguageResult, Result, SequenceBuilder, WordUnit,
    CONTINUATION_MARKER,
};
use g2p_frontend_text_processing::{KoreanNormalizer, Normalizer};
use std::sync::Arc;

use super::{replace_unknown_phonemes, G2pBackend, G2pOptions};

pub struct KoreanG2p {
    normalizer: KoreanNormalizer,
    tagger: Arc<dyn KoreanTagger>,
    pronouncer: Arc<dyn KoreanPronouncer>,
}

impl KoreanG2p {
    pub fn new(tagger: Arc<dyn KoreanTagger>, pronouncer: Arc<dyn KoreanPronouncer>) -> Self {
        Self {
            normalizer: KoreanNormalizer::new(),
            tagger,
            pronouncer,
        }
    }

    /// Words of normalized text and the tagger-token count of each
    pub fn text_to_words(&self, normalized: &str) -> Result<(Vec<String>, Vec<usize>)> {
        let mut words: Vec<String> = Vec::new();
        let mut lens: Vec<usize> = Vec::new();

        for token in self.tagger.tokenize(normalized)? {
            if let Some(rest) = token.strip_prefix(CONTINUATION_MARKER) {
                if let (Some(word), Some(len)) = (words.last_mut(), lens.last_mut()) {
                    word.push_str(rest);
                    *len += 1;
                    continue;
                }
            }
            words.push(token);
            lens.push(1);
        }

        Ok(recover_unknown(words, lens, normalized))
    }

    fn word(&self, surface: &str, units: usize, options: &G2pOptions) -> Result<WordUnit> {
        let mut word = WordUnit::new(surface, units);
        if is_punctuation(surface) {
            word.push(surface, 0);
            return Ok(word);
        }

        let pronounced = self.pronouncer.pronounce(surface)?;
        let phonemes = replace_unknown_phonemes(
            Language::Ko,
            jamo::to_jamo(&pronounced),
            options.raise_yomi_error,
        )?;
        for phoneme in phonemes {
            word.push(phoneme, 0);
        }
        Ok(word)
    }
}

impl G2pBackend for KoreanG2p {
    fn language(&self) -> Language {
        Language::Ko
    }

    fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    fn g2p(&self, text: &str, options: &G2pOptions) -> Result<LanguageResult> {
        let normalized = self.normalize(text);
        let (words, lens) = self.text_to_words(&normalized)?;

        let mut builder = SequenceBuilder::new();
        for (surface, units) in words.iter().zip(lens) {
            builder.push_word(self.word(surface, units, options)?);
        }

        Ok(LanguageResult::new(Language::Ko, builder.finish(normalized)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use g2p_frontend_core::symbols::UNK;

    fn backend() -> KoreanG2p {
        KoreanG2p::new(
            Arc::new(WhitespaceTagger::new()),
            Arc::new(SpellingPronouncer::new()),
        )
    }

    fn run(text: &str) -> LanguageResult {
        backend().g2p(text, &G2pOptions::default()).unwrap()
    }

    #[test]
    fn test_jamo_phonemes() {
        let result = run("한국");
        assert_eq!(
            result.sequence.phonemes,
            vec!["_", "ㅎ", "ㅏ", "ㄴ", "ㄱ", "ㅜ", "ㄱ", "_"]
        );
        assert!(result.sequence.tones.iter().all(|t| *t == 0));
        assert_eq!(result.sequence.word2phoneme, vec![1, 6, 1]);
    }

    #[test]
    fn test_pronunciation_applied() {
        let result = run("음악");
        assert_eq!(
            result.sequence.inner_phonemes(),
            &["ㅇ", "ㅡ", "ㅁ", "ㅏ", "ㄱ"].map(String::from)
        );
    }

    #[test]
    fn test_punctuation_words() {
        let result = run("네. 좋아요!");
        let seq = &result.sequence;
        assert_eq!(seq.phonemes[3], ".");
        assert_eq!(seq.phonemes[seq.phonemes.len() - 2], "!");
        assert_eq!(seq.word2phoneme.len(), 4 + 2);
    }

    #[test]
    fn test_native_numeral_with_classifier() {
        let result = run("사과 3개");
        assert_eq!(result.sequence.normalized_text, "사과 세 개");
    }

    #[test]
    fn test_unknown_span_becomes_unk() {
        let result = run("ABC 회사");
        let seq = &result.sequence;
        assert_eq!(&seq.phonemes[1..4], &[UNK, UNK, UNK].map(String::from));
        assert_eq!(seq.word2phoneme.iter().sum::<usize>(), seq.phonemes.len());
    }

    #[test]
    fn test_strict_mode_raises() {
        let err = backend()
            .g2p("ABC 회사", &G2pOptions::default().strict())
            .unwrap_err();
        assert!(err.is_yomi());
    }

    struct ContinuationTagger;

    impl KoreanTagger for ContinuationTagger {
        fn tokenize(&self, _text: &str) -> Result<Vec<String>> {
            Ok(vec!["학".into(), "##교".into(), "에".into()])
        }
    }

    #[test]
    fn test_continuation_tokens_merge() {
        let backend = KoreanG2p::new(Arc::new(ContinuationTagger), Arc::new(SpellingPronouncer));
        let (words, lens) = backend.text_to_words("학교에").unwrap();
        assert_eq!(words, vec!["학교", "에"]);
        assert_eq!(lens, vec![2, 1]);

        let result = backend.g2p("학교에", &G2pOptions::default()).unwrap();
        // 학교 spans two tagger tokens, 에 one
        assert_eq!(result.sequence.word2phoneme.len(), 3 + 2);
    }

    #[test]
    fn test_sequence_invariants() {
        for text in ["안녕하세요", "사과 3개를 샀다.", "ABC", ""] {
            let result = run(text);
            let seq = &result.sequence;
            assert_eq!(seq.phonemes.len(), seq.tones.len());
            assert_eq!(seq.word2phoneme.iter().sum::<usize>(), seq.phonemes.len());
        }
    }
}
