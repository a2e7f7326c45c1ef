//! Phone-level feature expansion
//!
//! Embedding models produce one row per alignment unit plus the two boundary
//! positions. The acoustic model wants one column per phoneme, so each row
//! is repeated `word2phoneme[i]` times and the result is transposed to
//! `[dim, phonemes]`.

use g2p_frontend_config::FeatureSettings;
use g2p_frontend_core::{EmbeddingModel, Error, Language, LanguageResult, Result, SubwordTokenizer};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How embedding rows are placed on the phoneme axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureMode {
    /// One row per unit, repeated over the unit's phonemes
    #[default]
    PerUnit,
    /// One sentence vector on the two boundary positions, zeros elsewhere
    Sentence,
}

pub struct FeatureExtractor {
    model: Arc<dyn EmbeddingModel>,
    mode: FeatureMode,
    assist_text_weight: f32,
}

impl FeatureExtractor {
    pub fn new(model: Arc<dyn EmbeddingModel>, mode: FeatureMode) -> Self {
        Self {
            model,
            mode,
            assist_text_weight: g2p_frontend_config::constants::features::DEFAULT_ASSIST_TEXT_WEIGHT,
        }
    }

    pub fn from_settings(
        model: Arc<dyn EmbeddingModel>,
        mode: FeatureMode,
        settings: &FeatureSettings,
    ) -> Self {
        Self::new(model, mode).with_assist_text_weight(settings.assist_text_weight)
    }

    pub fn with_assist_text_weight(mut self, weight: f32) -> Self {
        self.assist_text_weight = weight.clamp(0.0, 1.0);
        self
    }

    pub fn mode(&self) -> FeatureMode {
        self.mode
    }

    /// Features for a dispatcher result
    pub fn extract_for(
        &self,
        result: &LanguageResult,
        assist_text: Option<&str>,
    ) -> Result<Array2<f32>> {
        self.extract(
            &result.sequence.normalized_text,
            &result.sequence.word2phoneme,
            assist_text,
        )
    }

    /// Phone-level features of `normalized_text`, shape `[dim, sum(word2phoneme)]`.
    ///
    /// `word2phoneme` must have one entry per model unit plus the two
    /// boundary entries; anything else is an [`Error::Alignment`].
    pub fn extract(
        &self,
        normalized_text: &str,
        word2phoneme: &[usize],
        assist_text: Option<&str>,
    ) -> Result<Array2<f32>> {
        let units = self.model.unit_count(normalized_text)?;
        if word2phoneme.len() != units + 2 {
            return Err(Error::Alignment(format!(
                "{} word2phoneme entries for {} {} units in {:?}",
                word2phoneme.len(),
                units,
                self.model.language(),
                normalized_text
            )));
        }

        let rows = self.model.embed(normalized_text)?;
        let dim = rows.ncols();
        if dim != self.model.dim() {
            return Err(Error::Model(format!(
                "embedding width {} does not match model dim {}",
                dim,
                self.model.dim()
            )));
        }

        let assist = match assist_text.filter(|t| !t.is_empty()) {
            Some(text) => Some(mean_row(&self.model.embed(text)?)?),
            None => None,
        };
        let blend = |row: ArrayView1<f32>| -> Array1<f32> {
            match &assist {
                Some(style) => {
                    &row * (1.0 - self.assist_text_weight) + style * self.assist_text_weight
                }
                None => row.to_owned(),
            }
        };

        let unit_rows: Vec<Array1<f32>> = match self.mode {
            FeatureMode::PerUnit => {
                if rows.nrows() != word2phoneme.len() {
                    return Err(Error::Alignment(format!(
                        "model returned {} rows for {} positions",
                        rows.nrows(),
                        word2phoneme.len()
                    )));
                }
                rows.axis_iter(Axis(0)).map(blend).collect()
            }
            FeatureMode::Sentence => {
                let sentence = blend(mean_row(&rows)?.view());
                let last = word2phoneme.len() - 1;
                (0..word2phoneme.len())
                    .map(|i| {
                        if i == 0 || i == last {
                            sentence.clone()
                        } else {
                            Array1::zeros(dim)
                        }
                    })
                    .collect()
            }
        };

        let phones: usize = word2phoneme.iter().sum();
        let mut features = Array2::<f32>::zeros((dim, phones));
        let mut column = 0;
        for (row, &repeat) in unit_rows.iter().zip(word2phoneme) {
            for _ in 0..repeat {
                features.column_mut(column).assign(row);
                column += 1;
            }
        }

        tracing::debug!(dim, phones, mode = ?self.mode, "Expanded features");
        Ok(features)
    }
}

fn mean_row(rows: &Array2<f32>) -> Result<Array1<f32>> {
    rows.mean_axis(Axis(0))
        .ok_or_else(|| Error::Model("embedding model returned no rows".to_string()))
}

/// How [`HashEmbedder`] splits text into units
#[derive(Clone)]
pub enum UnitSplit {
    /// One unit per character (Japanese, Mandarin)
    Chars,
    /// One unit per subword token (English)
    Subwords(Arc<dyn SubwordTokenizer>),
}

/// Deterministic hash embedding for hosts and tests without a real model.
///
/// Each unit row counts its characters into `(codepoint + position) % dim`
/// buckets and is L2-normalized; the two boundary rows embed the whole text.
pub struct HashEmbedder {
    language: Language,
    dim: usize,
    split: UnitSplit,
}

impl HashEmbedder {
    pub fn new(language: Language, dim: usize, split: UnitSplit) -> Self {
        Self {
            language,
            dim: dim.max(1),
            split,
        }
    }

    fn units(&self, text: &str) -> Result<Vec<String>> {
        match &self.split {
            UnitSplit::Chars => Ok(text.chars().map(String::from).collect()),
            UnitSplit::Subwords(tokenizer) => tokenizer.tokenize(text),
        }
    }

    fn hash(&self, text: &str) -> Array1<f32> {
        let mut embedding = Array1::<f32>::zeros(self.dim);
        for (i, c) in text.chars().enumerate() {
            embedding[(c as usize + i) % self.dim] += 1.0;
        }
        let norm = embedding.dot(&embedding).sqrt();
        if norm > 0.0 {
            embedding /= norm;
        }
        embedding
    }
}

impl EmbeddingModel for HashEmbedder {
    fn embed(&self, text: &str) -> Result<Array2<f32>> {
        let units = self.units(text)?;
        let mut rows = Array2::<f32>::zeros((units.len() + 2, self.dim));
        let whole = self.hash(text);
        rows.row_mut(0).assign(&whole);
        rows.row_mut(units.len() + 1).assign(&whole);
        for (i, unit) in units.iter().enumerate() {
            rows.row_mut(i + 1).assign(&self.hash(unit));
        }
        Ok(rows)
    }

    fn unit_count(&self, text: &str) -> Result<usize> {
        Ok(self.units(text)?.len())
    }

    fn language(&self) -> Language {
        self.language
    }

    fn dim(&self) -> usize {
        self.dim
    }
}
