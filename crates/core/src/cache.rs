//! Per-language model cache
//!
//! Tokenizers, analyzers and embedding models are expensive to load, so
//! they are created on first use and shared afterwards. The cache is an
//! explicit object injected into whoever needs it; the host decides when to
//! tear entries down.

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::{Error, Language, Result};

type Loader<T> = dyn Fn(Language) -> Result<Arc<T>> + Send + Sync;

/// Cache counters
#[derive(Debug, Default)]
pub struct CacheStats {
    pub hits: AtomicU64,
    pub loads: AtomicU64,
    pub unloads: AtomicU64,
}

impl CacheStats {
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn loads(&self) -> u64 {
        self.loads.load(Ordering::Relaxed)
    }

    pub fn unloads(&self) -> u64 {
        self.unloads.load(Ordering::Relaxed)
    }
}

/// Lazily populated, explicitly unloadable cache keyed by language
///
/// Each key is initialized at most once even when several threads ask for
/// it at the same time: the first caller runs the loader while the others
/// wait on the same cell.
pub struct ModelCache<T: ?Sized + Send + Sync> {
    slots: Mutex<HashMap<Language, Arc<OnceCell<Arc<T>>>>>,
    loader: Box<Loader<T>>,
    pub stats: CacheStats,
}

impl<T: ?Sized + Send + Sync> ModelCache<T> {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn(Language) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        Self {
            slots: Mutex::new(HashMap::new()),
            loader: Box::new(loader),
            stats: CacheStats::default(),
        }
    }

    /// Return the cached handle for `language`, loading it on first use
    pub fn get_or_load(&self, language: Language) -> Result<Arc<T>> {
        if !language.is_concrete() {
            return Err(Error::InvalidInput(format!(
                "no model can be loaded for {}",
                language
            )));
        }

        // The map lock is only held to fetch the cell, never during a load.
        let cell = {
            let mut slots = self.slots.lock();
            slots
                .entry(language)
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        if let Some(handle) = cell.get() {
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(handle.clone());
        }

        let handle = cell.get_or_try_init(|| {
            tracing::info!(language = %language, "Loading model");
            let loaded = (self.loader)(language)?;
            self.stats.loads.fetch_add(1, Ordering::Relaxed);
            Ok::<_, Error>(loaded)
        })?;
        Ok(handle.clone())
    }

    pub fn is_loaded(&self, language: Language) -> bool {
        self.slots
            .lock()
            .get(&language)
            .map(|cell| cell.get().is_some())
            .unwrap_or(false)
    }

    /// Drop the entry for `language`. Handles already given out stay valid.
    pub fn unload(&self, language: Language) -> bool {
        let removed = self
            .slots
            .lock()
            .remove(&language)
            .map(|cell| cell.get().is_some())
            .unwrap_or(false);
        if removed {
            self.stats.unloads.fetch_add(1, Ordering::Relaxed);
            tracing::info!(language = %language, "Unloaded model");
        }
        removed
    }

    pub fn unload_all(&self) {
        let drained: Vec<Language> = {
            let mut slots = self.slots.lock();
            slots
                .drain()
                .filter(|(_, cell)| cell.get().is_some())
                .map(|(lang, _)| lang)
                .collect()
        };
        for language in drained {
            self.stats.unloads.fetch_add(1, Ordering::Relaxed);
            tracing::info!(language = %language, "Unloaded model");
        }
    }

    /// Languages with a loaded entry
    pub fn loaded_languages(&self) -> Vec<Language> {
        self.slots
            .lock()
            .iter()
            .filter(|(_, cell)| cell.get().is_some())
            .map(|(lang, _)| *lang)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_cache() -> (ModelCache<String>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let cache = ModelCache::new(move |lang: Language| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(format!("model-{}", lang.code())))
        });
        (cache, calls)
    }

    #[test]
    fn test_loads_once() {
        let (cache, calls) = counting_cache();
        let first = cache.get_or_load(Language::En).unwrap();
        let second = cache.get_or_load(Language::En).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.stats.hits(), 1);
        assert!(cache.is_loaded(Language::En));
        assert!(!cache.is_loaded(Language::Jp));
    }

    #[test]
    fn test_concurrent_first_load() {
        let (cache, calls) = counting_cache();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    let handle = cache.get_or_load(Language::Ko).unwrap();
                    assert_eq!(handle.as_str(), "model-KO");
                });
            }
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unload_then_reload() {
        let (cache, calls) = counting_cache();
        let held = cache.get_or_load(Language::Zh).unwrap();
        assert!(cache.unload(Language::Zh));
        assert!(!cache.unload(Language::Zh));
        assert_eq!(held.as_str(), "model-ZH");

        cache.get_or_load(Language::Zh).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unload_all() {
        let (cache, _) = counting_cache();
        cache.get_or_load(Language::En).unwrap();
        cache.get_or_load(Language::Jp).unwrap();
        assert_eq!(cache.loaded_languages().len(), 2);
        cache.unload_all();
        assert!(cache.loaded_languages().is_empty());
        assert_eq!(cache.stats.unloads(), 2);
    }

    #[test]
    fn test_multi_is_rejected() {
        let (cache, calls) = counting_cache();
        assert!(cache.get_or_load(Language::Multi).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_failed_load_is_retried_next_call() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();
        let cache: ModelCache<String> = ModelCache::new(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(Error::Model("missing weights".to_string()))
            } else {
                Ok(Arc::new("ok".to_string()))
            }
        });
        assert!(cache.get_or_load(Language::Jp).is_err());
        assert!(!cache.is_loaded(Language::Jp));
        assert_eq!(cache.get_or_load(Language::Jp).unwrap().as_str(), "ok");
    }
}
