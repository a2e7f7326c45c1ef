//! Subword tokenizers producing `▁`-marked tokens

use g2p_frontend_core::{Result, SubwordTokenizer, WORD_START_MARKER};

/// SentencePiece-style splitter without a vocabulary.
///
/// Each whitespace-separated word is cut into alphanumeric runs and single
/// symbol characters. The first piece of a word carries the word-start
/// marker; symbols are emitted as standalone pieces without one.
#[derive(Debug, Clone, Default)]
pub struct MarkerTokenizer;

impl MarkerTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl SubwordTokenizer for MarkerTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();

        for word in text.split_whitespace() {
            let mut first = true;
            let mut run = String::new();

            for c in word.chars() {
                if c.is_alphanumeric() {
                    if run.is_empty() && first {
                        run.push(WORD_START_MARKER);
                    }
                    run.push(c);
                    continue;
                }
                if !run.is_empty() {
                    tokens.push(std::mem::take(&mut run));
                    first = false;
                }
                tokens.push(c.to_string());
            }
            if !run.is_empty() {
                tokens.push(run);
            }
        }

        Ok(tokens)
    }
}

/// Wrapper over a HuggingFace `tokenizer.json` (DeBERTa-v3 style)
#[cfg(feature = "hf-tokenizer")]
pub struct HfTokenizer {
    tokenizer: tokenizers::Tokenizer,
}

#[cfg(feature = "hf-tokenizer")]
impl HfTokenizer {
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let tokenizer = tokenizers::Tokenizer::from_file(path)
            .map_err(|e| g2p_frontend_core::Error::Tokenizer(e.to_string()))?;
        tracing::info!(path = %path.display(), "Loaded subword tokenizer");
        Ok(Self { tokenizer })
    }
}

#[cfg(feature = "hf-tokenizer")]
impl SubwordTokenizer for HfTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let encoding = self
            .tokenizer
            .encode(text, false)
            .map_err(|e| g2p_frontend_core::Error::Tokenizer(e.to_string()))?;
        Ok(encoding.get_tokens().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<String> {
        MarkerTokenizer::new().tokenize(text).unwrap()
    }

    #[test]
    fn test_words_get_marker() {
        assert_eq!(tokenize("hello world"), vec!["▁hello", "▁world"]);
    }

    #[test]
    fn test_punctuation_split() {
        assert_eq!(tokenize("Hi, there!"), vec!["▁Hi", ",", "▁there", "!"]);
    }

    #[test]
    fn test_inner_apostrophe() {
        assert_eq!(tokenize("don't"), vec!["▁don", "'", "t"]);
    }

    #[test]
    fn test_leading_symbol() {
        assert_eq!(tokenize("'quoted'"), vec!["'", "▁quoted", "'"]);
        assert!(tokenize("   ").is_empty());
    }
}
