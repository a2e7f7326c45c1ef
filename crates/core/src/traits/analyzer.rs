//! Japanese morphological analysis

use crate::{MorphemeRecord, Result};

/// Morphological analyzer with readings, accent and mora data
///
/// Implementations wrap a dictionary-backed analyzer. Output must be
/// deterministic for the same input and dictionary state, and the record
/// surfaces must concatenate back to the input text.
pub trait MorphologicalAnalyzer: Send + Sync {
    /// Split `text` into morphemes
    fn analyze(&self, text: &str) -> Result<Vec<MorphemeRecord>>;

    /// Name for logging
    fn name(&self) -> &str {
        "analyzer"
    }
}
