//! Phoneme sequences and the alignment finalizer
//!
//! Every backend builds its output through [`SequenceBuilder`], which runs the
//! shared distributor per word and wraps the result in `_` sentinels. The
//! length invariants are checked with assertions: a mismatch here is a
//! backend bug and must never reach feature extraction.

use serde::{Deserialize, Serialize};

use crate::distributor::distribute;
use crate::symbols::PAD;
use crate::Language;

/// Output of one backend call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonemeSequence {
    /// Text actually fed to tokenization
    pub normalized_text: String,
    /// Phoneme symbols, `_` at both ends
    pub phonemes: Vec<String>,
    /// One tone per phoneme
    pub tones: Vec<u8>,
    /// Phonemes per upstream unit, sentinel `1` at both ends
    pub word2phoneme: Vec<usize>,
}

impl PhonemeSequence {
    /// Wrap raw backend output with sentinels and check the invariants.
    ///
    /// # Panics
    /// If the phoneme, tone and alignment lengths disagree.
    pub fn finalize(
        normalized_text: String,
        mut phonemes: Vec<String>,
        mut tones: Vec<u8>,
        mut word2phoneme: Vec<usize>,
    ) -> Self {
        phonemes.insert(0, PAD.to_string());
        phonemes.push(PAD.to_string());
        tones.insert(0, 0);
        tones.push(0);
        word2phoneme.insert(0, 1);
        word2phoneme.push(1);

        assert_eq!(
            phonemes.len(),
            tones.len(),
            "phoneme/tone length mismatch for {:?}",
            normalized_text
        );
        assert_eq!(
            phonemes.len(),
            word2phoneme.iter().sum::<usize>(),
            "word2phoneme does not cover phonemes for {:?}",
            normalized_text
        );

        Self {
            normalized_text,
            phonemes,
            tones,
            word2phoneme,
        }
    }

    /// Number of upstream units, sentinels excluded
    pub fn unit_count(&self) -> usize {
        self.word2phoneme.len().saturating_sub(2)
    }

    /// Phonemes without the sentinels
    pub fn inner_phonemes(&self) -> &[String] {
        let n = self.phonemes.len();
        if n < 2 {
            return &[];
        }
        &self.phonemes[1..n - 1]
    }
}

/// A word as seen by a backend: its phonemes and how many upstream units it spans.
///
/// Lives only inside one `g2p` call.
#[derive(Debug, Clone, Default)]
pub struct WordUnit {
    pub surface: String,
    pub phonemes: Vec<String>,
    pub tones: Vec<u8>,
    pub units: usize,
}

impl WordUnit {
    pub fn new(surface: impl Into<String>, units: usize) -> Self {
        Self {
            surface: surface.into(),
            units,
            ..Default::default()
        }
    }

    pub fn push(&mut self, phoneme: impl Into<String>, tone: u8) {
        self.phonemes.push(phoneme.into());
        self.tones.push(tone);
    }
}

/// Accumulates words and produces a finalized [`PhonemeSequence`]
#[derive(Debug, Default)]
pub struct SequenceBuilder {
    phonemes: Vec<String>,
    tones: Vec<u8>,
    word2phoneme: Vec<usize>,
}

impl SequenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word, distributing its phonemes over its units.
    ///
    /// A word spanning zero units contributes its phonemes to the previous
    /// unit so nothing is dropped.
    pub fn push_word(&mut self, word: WordUnit) {
        assert_eq!(
            word.phonemes.len(),
            word.tones.len(),
            "phoneme/tone length mismatch in word {:?}",
            word.surface
        );
        let count = word.phonemes.len();
        if word.units == 0 {
            match self.word2phoneme.last_mut() {
                Some(last) => *last += count,
                None if count > 0 => self.word2phoneme.push(count),
                None => {}
            }
        } else {
            self.word2phoneme.extend(distribute(count, word.units));
        }
        self.phonemes.extend(word.phonemes);
        self.tones.extend(word.tones);
    }

    pub fn phoneme_count(&self) -> usize {
        self.phonemes.len()
    }

    pub fn finish(self, normalized_text: String) -> PhonemeSequence {
        PhonemeSequence::finalize(normalized_text, self.phonemes, self.tones, self.word2phoneme)
    }
}

/// Japanese-only segmentation data needed by prosody and BERT alignment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JapaneseExtras {
    /// Surface split into words
    pub sep_text: Vec<String>,
    /// Katakana reading per word
    pub sep_kata: Vec<String>,
    /// Readings with particles joined to the preceding word
    pub sep_kata_with_joshi: Vec<String>,
}

/// Language-specific payload of a [`LanguageResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LanguageExtras {
    Japanese(JapaneseExtras),
    None,
}

/// Dispatcher output: resolved language, shared payload, optional extras
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageResult {
    pub language: Language,
    #[serde(flatten)]
    pub sequence: PhonemeSequence,
    pub extras: LanguageExtras,
}

impl LanguageResult {
    pub fn new(language: Language, sequence: PhonemeSequence) -> Self {
        Self {
            language,
            sequence,
            extras: LanguageExtras::None,
        }
    }

    pub fn japanese(sequence: PhonemeSequence, extras: JapaneseExtras) -> Self {
        Self {
            language: Language::Jp,
            sequence,
            extras: LanguageExtras::Japanese(extras),
        }
    }

    pub fn japanese_extras(&self) -> Option<&JapaneseExtras> {
        match &self.extras {
            LanguageExtras::Japanese(extras) => Some(extras),
            LanguageExtras::None => None,
        }
    }
}
