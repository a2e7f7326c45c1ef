//! Japanese G2P
//!
//! Normalize, analyze into morphemes, expand iteration marks, apply the
//! optional pronunciation variants, convert readings to phonemes and assign
//! pitch accent. `word2phoneme` counts characters of the normalized text.

pub mod accent;
pub mod kana;
pub mod lexicon;
pub mod odoriji;
pub mod variants;

pub use lexicon::LexiconAnalyzer;

use g2p_frontend_core::symbols::{is_punctuation, PUNCTUATIONS, UNK};
use g2p_frontend_core::{
    Error, JapaneseExtras, Language, LanguageResult, MorphemeRecord, MorphologicalAnalyzer,
    Result, SequenceBuilder, WordUnit, YomiError,
};
use g2p_frontend_text_processing::{JapaneseNormalizer, Normalizer};
use std::sync::Arc;

use self::accent::{assign_tones, AccentUnit};
use self::kana::{lower_devoiced, to_moras, trailing_vowel, Mora};
use super::{G2pBackend, G2pOptions};

/// Reading the analyzer assigns to symbols it cannot pronounce
const UNREADABLE_MARK: &str = "、";

/// How one morpheme is phonemized
enum Reading {
    Punctuation,
    Unreadable,
    Moras(Vec<Mora>),
}

pub struct JapaneseG2p {
    analyzer: Arc<dyn MorphologicalAnalyzer>,
    normalizer: JapaneseNormalizer,
}

impl JapaneseG2p {
    pub fn new(analyzer: Arc<dyn MorphologicalAnalyzer>) -> Self {
        Self {
            analyzer,
            normalizer: JapaneseNormalizer::new(),
        }
    }

    /// Morphemes of already-normalized text with iteration marks expanded
    pub fn analyze(&self, normalized: &str) -> Result<Vec<MorphemeRecord>> {
        let records = self.analyzer.analyze(normalized)?;

        let covered: String = records.iter().map(|r| r.string.as_str()).collect();
        if covered != normalized {
            return Err(Error::Analyzer(format!(
                "{} surfaces {:?} do not cover {:?}",
                self.analyzer.name(),
                covered,
                normalized
            )));
        }

        odoriji::expand_iteration_marks(records, self.analyzer.as_ref())
    }

    /// Surfaces and katakana readings of normalized text.
    ///
    /// Unreadable words keep their surface as the reading.
    pub fn text_to_sep_kata(&self, normalized: &str) -> Result<(Vec<String>, Vec<String>)> {
        let records = self.analyze(normalized)?;
        Ok(split_readings(&records))
    }

    fn reading(
        &self,
        record: &MorphemeRecord,
        prev_vowel: Option<&'static str>,
        options: &G2pOptions,
    ) -> Result<Reading> {
        if record.string.chars().all(|c| is_punctuation(c.encode_utf8(&mut [0u8; 4]))) {
            return Ok(Reading::Punctuation);
        }

        let mut pron = record.pron.clone();
        if options.babytalk {
            pron = variants::apply_babytalk(&pron);
        }
        if options.dakuten {
            pron = variants::apply_dakuten(&pron);
        }

        let err = if pron.is_empty() || pron == UNREADABLE_MARK {
            YomiError::unreadable(&record.string)
        } else {
            match to_moras(&pron, prev_vowel, options.use_jp_extra) {
                Ok(moras) => return Ok(Reading::Moras(moras)),
                Err(c) => YomiError::new("cannot read kana", c.to_string()),
            }
        };

        if options.raise_yomi_error {
            return Err(err.into());
        }
        tracing::warn!(surface = %record.string, "{}, replaced with UNK", err);
        Ok(Reading::Unreadable)
    }
}

fn split_readings(records: &[MorphemeRecord]) -> (Vec<String>, Vec<String>) {
    let sep_text = records.iter().map(|r| r.string.clone()).collect();
    let sep_kata = records
        .iter()
        .map(|r| {
            if r.read.is_empty() {
                r.string.clone()
            } else {
                r.read.clone()
            }
        })
        .collect();
    (sep_text, sep_kata)
}

/// Particles appended to the preceding word's reading
fn join_particles(records: &[MorphemeRecord], sep_kata: &[String]) -> Vec<String> {
    let mut joined: Vec<String> = Vec::with_capacity(sep_kata.len());
    for (record, kata) in records.iter().zip(sep_kata) {
        match joined.last_mut() {
            Some(last) if record.is_particle() => last.push_str(kata),
            _ => joined.push(kata.clone()),
        }
    }
    joined
}

impl G2pBackend for JapaneseG2p {
    fn language(&self) -> Language {
        Language::Jp
    }

    fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    fn g2p(&self, text: &str, options: &G2pOptions) -> Result<LanguageResult> {
        let normalized = self.normalize(text);
        let records = self.analyze(&normalized)?;

        let mut units = Vec::with_capacity(records.len());
        let mut prev_vowel = None;
        for record in &records {
            let unit = match self.reading(record, prev_vowel, options)? {
                Reading::Punctuation => AccentUnit::boundary(
                    record.string.chars().map(|c| vec![punctuation_symbol(c)]).collect(),
                ),
                Reading::Unreadable => {
                    AccentUnit::boundary(record.string.chars().map(|_| vec![UNK]).collect())
                }
                Reading::Moras(moras) => {
                    prev_vowel = trailing_vowel(&moras).or(prev_vowel);
                    AccentUnit::word(moras, record.acc, record.chain_flag)
                }
            };
            units.push(unit);
        }

        let tones = assign_tones(&units, options.keihan);

        let mut builder = SequenceBuilder::new();
        for ((record, unit), unit_tones) in records.iter().zip(&units).zip(tones) {
            let mut word = WordUnit::new(record.string.as_str(), record.surface_len());
            for (phoneme, tone) in unit.moras.iter().flatten().zip(unit_tones) {
                word.push(lower_devoiced(*phoneme), tone);
            }
            builder.push_word(word);
        }
        let sequence = builder.finish(normalized);

        let (sep_text, sep_kata) = split_readings(&records);
        let sep_kata_with_joshi = join_particles(&records, &sep_kata);
        Ok(LanguageResult::japanese(
            sequence,
            JapaneseExtras {
                sep_text,
                sep_kata,
                sep_kata_with_joshi,
            },
        ))
    }
}

/// The shared punctuation symbol for a punctuation character
fn punctuation_symbol(c: char) -> &'static str {
    PUNCTUATIONS
        .iter()
        .copied()
        .find(|p| p.starts_with(c))
        .unwrap_or(UNK)
}
