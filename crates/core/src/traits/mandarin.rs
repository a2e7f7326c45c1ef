//! Mandarin syllable lookup

/// Character to pinyin mapping
pub trait SyllableSource: Send + Sync {
    /// Tone-numbered pinyin such as `hao3`, `lv4` or `de5`; `None` for
    /// characters without a reading
    fn syllable(&self, ch: char) -> Option<String>;
}
