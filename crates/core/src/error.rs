//! Error types for the G2P front end

use thiserror::Error;

/// A reading or phoneme that could not be resolved while strict mode was on.
///
/// Carries the offending unit so callers can skip the input or retry with
/// `raise_yomi_error` turned off.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}: {text}")]
pub struct YomiError {
    pub message: String,
    pub text: String,
}

impl YomiError {
    pub fn new(message: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            text: text.into(),
        }
    }

    /// An unknown phoneme produced by a backend
    pub fn unknown_phone(phone: &str) -> Self {
        Self::new("unknown phone", phone)
    }

    /// A surface the analyzer returned no reading for
    pub fn unreadable(surface: &str) -> Self {
        Self::new("cannot read", surface)
    }
}

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Yomi(#[from] YomiError),

    #[error("Morphological analyzer error: {0}")]
    Analyzer(String),

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error("Dictionary error: {0}")]
    Dictionary(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Alignment error: {0}")]
    Alignment(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the caller can recover by relaxing strict mode
    pub fn is_yomi(&self) -> bool {
        matches!(self, Error::Yomi(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yomi_error_display() {
        let err = YomiError::unknown_phone("ㅿ");
        assert_eq!(err.to_string(), "unknown phone: ㅿ");
    }

    #[test]
    fn test_yomi_converts_into_error() {
        let err: Error = YomiError::unreadable("鬱").into();
        assert!(err.is_yomi());
        assert_eq!(err.to_string(), "cannot read: 鬱");
    }

    #[test]
    fn test_non_yomi_error() {
        let err = Error::Tokenizer("vocab missing".to_string());
        assert!(!err.is_yomi());
    }
}
