//! Mandarin G2P
//!
//! One alignment unit per character of the normalized text. Each Han
//! character becomes an initial and a final, both carrying the syllable
//! tone; third-tone sandhi is applied within runs of Han characters.

pub mod pinyin;

pub use self::pinyin::PinyinSource;

use g2p_frontend_core::symbols::{is_punctuation, UNK};
use g2p_frontend_core::{
    Language, LanguageResult, Result, SequenceBuilder, SyllableSource, WordUnit, YomiError,
};
use g2p_frontend_text_processing::{ChineseNormalizer, Normalizer};
use std::sync::Arc;

use self::pinyin::{initial_final, split_tone};
use super::{replace_unknown_phonemes, G2pBackend, G2pOptions};

/// One character of the input, before tones are finalized
enum Syllable {
    Punctuation(String),
    Unreadable,
    Han { initial: String, final_: String, tone: u8 },
}

/// Third-tone sandhi: a third tone followed by another becomes second
pub fn apply_sandhi(tones: &mut [u8]) {
    for i in 1..tones.len() {
        if tones[i - 1] == 3 && tones[i] == 3 {
            tones[i - 1] = 2;
        }
    }
}

pub struct ChineseG2p {
    normalizer: ChineseNormalizer,
    source: Arc<dyn SyllableSource>,
}

impl ChineseG2p {
    pub fn new(source: Arc<dyn SyllableSource>) -> Self {
        Self {
            normalizer: ChineseNormalizer::new(),
            source,
        }
    }

    fn syllable(&self, ch: char, options: &G2pOptions) -> Result<Syllable> {
        let text = ch.to_string();
        if is_punctuation(&text) {
            return Ok(Syllable::Punctuation(text));
        }

        match self.source.syllable(ch) {
            Some(syllable) => {
                let (base, tone) = split_tone(&syllable);
                let (initial, final_) = initial_final(&base);
                Ok(Syllable::Han {
                    initial,
                    final_,
                    tone,
                })
            }
            None if options.raise_yomi_error => Err(YomiError::unreadable(&text).into()),
            None => {
                tracing::warn!(character = %ch, "No pinyin for character, replaced with UNK");
                Ok(Syllable::Unreadable)
            }
        }
    }
}

/// Apply sandhi to the tones of each run of Han syllables
fn sandhi_runs(syllables: &mut [Syllable]) {
    for run in syllables.split_mut(|s| !matches!(s, Syllable::Han { .. })) {
        let mut tones: Vec<u8> = run
            .iter()
            .map(|s| match s {
                Syllable::Han { tone, .. } => *tone,
                _ => 0,
            })
            .collect();
        apply_sandhi(&mut tones);
        for (syllable, new_tone) in run.iter_mut().zip(tones) {
            if let Syllable::Han { tone, .. } = syllable {
                *tone = new_tone;
            }
        }
    }
}

impl G2pBackend for ChineseG2p {
    fn language(&self) -> Language {
        Language::Zh
    }

    fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    fn g2p(&self, text: &str, options: &G2pOptions) -> Result<LanguageResult> {
        let normalized = self.normalize(text);

        let mut syllables = normalized
            .chars()
            .map(|ch| self.syllable(ch, options))
            .collect::<Result<Vec<_>>>()?;
        sandhi_runs(&mut syllables);

        let mut builder = SequenceBuilder::new();
        for (ch, syllable) in normalized.chars().zip(syllables) {
            let mut word = WordUnit::new(ch.to_string(), 1);
            match syllable {
                Syllable::Punctuation(symbol) => word.push(symbol, 0),
                Syllable::Unreadable => word.push(UNK, 0),
                Syllable::Han {
                    initial,
                    final_,
                    tone,
                } => {
                    let phonemes: Vec<String> = [initial, final_]
                        .into_iter()
                        .filter(|p| !p.is_empty())
                        .collect();
                    let phonemes =
                        replace_unknown_phonemes(Language::Zh, phonemes, options.raise_yomi_error)?;
                    for phoneme in phonemes {
                        word.push(phoneme, tone);
                    }
                }
            }
            builder.push_word(word);
        }

        Ok(LanguageResult::new(Language::Zh, builder.finish(normalized)))
    }
}
