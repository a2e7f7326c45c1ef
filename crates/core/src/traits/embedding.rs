//! Embedding model interface

use ndarray::Array2;

use crate::{Language, Result};

/// Contextual embedding model
///
/// Inference runs elsewhere; the front end only consumes the rows.
pub trait EmbeddingModel: Send + Sync {
    /// Feature rows for `text`, shape `[units + 2, dim]` with one row per
    /// alignment unit plus the two boundary positions
    fn embed(&self, text: &str) -> Result<Array2<f32>>;

    /// Number of alignment units `text` yields for this model
    fn unit_count(&self, text: &str) -> Result<usize>;

    fn language(&self) -> Language;

    fn dim(&self) -> usize;
}
