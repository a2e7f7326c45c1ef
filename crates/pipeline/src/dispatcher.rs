//! Multilingual dispatcher
//!
//! Resolves the candidate languages to one backend and runs it. Backends are
//! created on first use through a shared [`ModelCache`], so a host that only
//! ever sees Korean text never loads the English dictionaries.

use g2p_frontend_config::{ModelPaths, Settings};
use g2p_frontend_core::{Error, Language, LanguageResult, ModelCache, Result, SubwordTokenizer};
use g2p_frontend_text_processing::LanguageSelector;
use std::path::Path;
use std::sync::Arc;

use crate::g2p::{
    ChineseG2p, CmuDict, EnglishG2p, G2pBackend, G2pOptions, JapaneseG2p, KoreanG2p,
    LetterPredictor, LexiconAnalyzer, MarkerTokenizer, PinyinSource, SpellingPronouncer,
    WhitespaceTagger,
};

pub type BackendCache = ModelCache<dyn G2pBackend>;

/// Front door for text in any supported language
pub struct MultilingualG2p {
    backends: Arc<BackendCache>,
    selector: LanguageSelector,
    options: G2pOptions,
}

impl MultilingualG2p {
    pub fn new(backends: Arc<BackendCache>, options: G2pOptions) -> Self {
        Self {
            backends,
            selector: LanguageSelector::new(),
            options,
        }
    }

    /// Dispatcher whose backends load their resources from `settings.models`
    pub fn from_settings(settings: &Settings) -> Self {
        let paths = settings.models.clone();
        let cache = ModelCache::new(move |language| load_backend(language, &paths));
        Self::new(Arc::new(cache), G2pOptions::from_settings(settings))
    }

    pub fn options(&self) -> &G2pOptions {
        &self.options
    }

    pub fn backends(&self) -> &Arc<BackendCache> {
        &self.backends
    }

    /// Language that would handle `text` given `candidates`.
    ///
    /// No candidates means Japanese; a single concrete candidate is used as
    /// is; otherwise the selector decides among the candidates (`Multi`
    /// standing for all of them).
    pub fn resolve(&self, text: &str, candidates: &[Language]) -> Language {
        let language = match candidates {
            [] => Language::Jp,
            [single] if single.is_concrete() => *single,
            _ => self.selector.select(text, candidates),
        };
        tracing::debug!(language = %language, candidates = ?candidates, "Resolved language");
        language
    }

    pub fn backend(&self, language: Language) -> Result<Arc<dyn G2pBackend>> {
        self.backends.get_or_load(language)
    }

    pub fn g2p(&self, text: &str, candidates: &[Language]) -> Result<LanguageResult> {
        self.g2p_with(text, candidates, &self.options)
    }

    /// Like [`g2p`](Self::g2p) with per-call options
    pub fn g2p_with(
        &self,
        text: &str,
        candidates: &[Language],
        options: &G2pOptions,
    ) -> Result<LanguageResult> {
        let language = self.resolve(text, candidates);
        self.backend(language)?.g2p(text, options)
    }

    /// Normalized text as the resolved backend sees it
    pub fn normalize(&self, text: &str, candidates: &[Language]) -> Result<String> {
        let language = self.resolve(text, candidates);
        Ok(self.backend(language)?.normalize(text))
    }
}

/// Build the backend for `language` from the configured resource files.
///
/// Missing optional files fall back to the in-tree defaults with a warning;
/// a file that exists but does not parse is an error.
pub fn load_backend(language: Language, paths: &ModelPaths) -> Result<Arc<dyn G2pBackend>> {
    let backend: Arc<dyn G2pBackend> = match language {
        Language::Jp => {
            let analyzer = match existing(&paths.jp_lexicon) {
                Some(path) => LexiconAnalyzer::load(path)?,
                None => {
                    tracing::warn!(path = %paths.jp_lexicon, "Japanese lexicon not found, using built-in entries");
                    LexiconAnalyzer::builtin()
                }
            };
            Arc::new(JapaneseG2p::new(Arc::new(analyzer)))
        }
        Language::En => Arc::new(EnglishG2p::new(
            load_tokenizer(&paths.en_tokenizer)?,
            Arc::new(load_dictionary(&paths.cmudict)?),
            Arc::new(load_dictionary(&paths.en_shortform)?),
            Arc::new(LetterPredictor::new()),
        )),
        Language::Zh => Arc::new(ChineseG2p::new(Arc::new(PinyinSource::new()))),
        Language::Ko => Arc::new(KoreanG2p::new(
            Arc::new(WhitespaceTagger::new()),
            Arc::new(SpellingPronouncer::new()),
        )),
        Language::Multi => {
            return Err(Error::InvalidInput("MULTI has no backend".to_string()))
        }
    };
    Ok(backend)
}

fn existing(path: &str) -> Option<&Path> {
    let path = Path::new(path);
    (!path.as_os_str().is_empty() && path.exists()).then_some(path)
}

fn load_dictionary(path: &str) -> Result<CmuDict> {
    match existing(path) {
        Some(path) => CmuDict::load(path),
        None => {
            tracing::warn!(path = %path, "Pronouncing dictionary not found, relying on the letter predictor");
            Ok(CmuDict::new())
        }
    }
}

#[cfg(feature = "hf-tokenizer")]
fn load_tokenizer(path: &str) -> Result<Arc<dyn SubwordTokenizer>> {
    match existing(path) {
        Some(path) => Ok(Arc::new(crate::g2p::HfTokenizer::from_file(path)?)),
        None => Ok(Arc::new(MarkerTokenizer::new())),
    }
}

#[cfg(not(feature = "hf-tokenizer"))]
fn load_tokenizer(path: &str) -> Result<Arc<dyn SubwordTokenizer>> {
    if !path.is_empty() {
        tracing::warn!(path = %path, "Built without hf-tokenizer, using the marker tokenizer");
    }
    Ok(Arc::new(MarkerTokenizer::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher() -> MultilingualG2p {
        let paths = ModelPaths {
            jp_lexicon: String::new(),
            cmudict: String::new(),
            en_shortform: String::new(),
            en_tokenizer: String::new(),
        };
        let cache = ModelCache::new(move |language| load_backend(language, &paths));
        MultilingualG2p::new(Arc::new(cache), G2pOptions::default())
    }

    #[test]
    fn test_resolve_candidates() {
        let g2p = dispatcher();
        assert_eq!(g2p.resolve("안녕하세요", &[]), Language::Jp);
        assert_eq!(g2p.resolve("안녕하세요", &[Language::En]), Language::En);
        assert_eq!(g2p.resolve("안녕하세요", &[Language::Multi]), Language::Ko);
        assert_eq!(g2p.resolve("안녕하세요", &[Language::En, Language::Zh]), Language::Jp);
        assert_eq!(g2p.resolve("hello", &[Language::Multi]), Language::En);
        assert_eq!(g2p.resolve("你好", &[Language::Multi]), Language::Zh);
    }

    #[test]
    fn test_dispatch_to_korean() {
        let g2p = dispatcher();
        let result = g2p.g2p("안녕하세요", &[Language::Multi]).unwrap();
        assert_eq!(result.language, Language::Ko);
        assert!(result.japanese_extras().is_none());
    }

    #[test]
    fn test_backends_load_once() {
        let g2p = dispatcher();
        g2p.g2p("hello", &[Language::En]).unwrap();
        g2p.g2p("world", &[Language::En]).unwrap();
        assert_eq!(g2p.backends().stats.loads(), 1);
        assert_eq!(g2p.backends().loaded_languages(), vec![Language::En]);

        g2p.backends().unload_all();
        assert!(!g2p.backends().is_loaded(Language::En));
    }

    #[test]
    fn test_multi_has_no_backend() {
        let paths = ModelPaths::default();
        assert!(load_backend(Language::Multi, &paths).is_err());
    }

    #[test]
    fn test_missing_dictionary_falls_back() {
        let g2p = dispatcher();
        let result = g2p.g2p("ship", &[Language::En]).unwrap();
        assert_eq!(result.sequence.inner_phonemes(), &["sh", "ih", "p"].map(String::from));
    }
}
