//! Longest-match lexicon analyzer
//!
//! A small in-tree `MorphologicalAnalyzer` backed by a tab-separated
//! lexicon. Lines are `surface<TAB>pos<TAB>read<TAB>pron<TAB>accent`, with
//! `*` in the pron column meaning "same as read". Unknown kana runs are read
//! as written, punctuation becomes a symbol record, and anything else is
//! left without a reading.

use g2p_frontend_core::morpheme::{KANA_ITERATION_MARKS, KANJI_ITERATION_MARK, POS_PARTICLE, POS_SYMBOL};
use g2p_frontend_core::symbols::is_punctuation;
use g2p_frontend_core::{Error, MorphemeRecord, MorphologicalAnalyzer, Result};
use std::collections::HashMap;
use std::path::Path;

use super::kana::{count_moras, is_kana, to_katakana};

/// Part of speech for spans not found in the lexicon
pub const POS_UNKNOWN: &str = "未知語";

const POS_AUXILIARY: &str = "助動詞";

/// Closed-class words every lexicon carries
const BUILTIN: &str = "\
は\t助詞\tハ\tワ\t0
が\t助詞\tガ\t*\t0
を\t助詞\tヲ\tオ\t0
に\t助詞\tニ\t*\t0
へ\t助詞\tヘ\tエ\t0
で\t助詞\tデ\t*\t0
と\t助詞\tト\t*\t0
も\t助詞\tモ\t*\t0
の\t助詞\tノ\t*\t0
や\t助詞\tヤ\t*\t0
か\t助詞\tカ\t*\t0
ね\t助詞\tネ\t*\t0
よ\t助詞\tヨ\t*\t0
から\t助詞\tカラ\t*\t0
まで\t助詞\tマデ\t*\t0
より\t助詞\tヨリ\t*\t0
です\t助動詞\tデス\t*\t1
ます\t助動詞\tマス\t*\t1
でした\t助動詞\tデシタ\t*\t1
ました\t助動詞\tマシタ\t*\t1
だ\t助動詞\tダ\t*\t1
た\t助動詞\tタ\t*\t0
";

#[derive(Debug, Clone)]
struct LexiconEntry {
    pos: String,
    read: String,
    pron: String,
    acc: u32,
}

/// Longest-match analyzer over an in-memory lexicon
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    entries: HashMap<String, LexiconEntry>,
    max_len: usize,
}

impl LexiconAnalyzer {
    /// Analyzer with only the closed-class entries
    pub fn builtin() -> Self {
        let mut analyzer = Self {
            entries: HashMap::new(),
            max_len: 0,
        };
        let parsed = analyzer.extend_from_tsv(BUILTIN);
        debug_assert!(parsed.is_ok(), "built-in lexicon: {:?}", parsed);
        analyzer
    }

    /// Built-in entries plus the given TSV text
    pub fn from_tsv(data: &str) -> Result<Self> {
        let mut analyzer = Self::builtin();
        analyzer.extend_from_tsv(data)?;
        Ok(analyzer)
    }

    /// Load a TSV lexicon file on top of the built-in entries
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let analyzer = Self::from_tsv(&data)?;
        tracing::info!(path = %path.display(), entries = analyzer.len(), "Loaded Japanese lexicon");
        Ok(analyzer)
    }

    pub fn insert(&mut self, surface: &str, pos: &str, read: &str, pron: &str, acc: u32) {
        self.max_len = self.max_len.max(surface.chars().count());
        self.entries.insert(
            surface.to_string(),
            LexiconEntry {
                pos: pos.to_string(),
                read: read.to_string(),
                pron: pron.to_string(),
                acc,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn extend_from_tsv(&mut self, data: &str) -> Result<()> {
        for (lineno, line) in data.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 3 {
                return Err(Error::Dictionary(format!(
                    "lexicon line {}: expected at least 3 fields, got {}",
                    lineno + 1,
                    fields.len()
                )));
            }
            let read = fields[2];
            let pron = match fields.get(3) {
                Some(p) if *p != "*" && !p.is_empty() => *p,
                _ => read,
            };
            let acc = match fields.get(4) {
                Some(a) => a.parse::<u32>().map_err(|e| {
                    Error::Dictionary(format!("lexicon line {}: bad accent {:?}: {}", lineno + 1, a, e))
                })?,
                None => 0,
            };
            self.insert(fields[0], fields[1], read, pron, acc);
        }
        Ok(())
    }

    fn longest_match(&self, chars: &[char], start: usize) -> Option<(usize, &LexiconEntry)> {
        let limit = self.max_len.min(chars.len() - start);
        (1..=limit).rev().find_map(|len| {
            let candidate: String = chars[start..start + len].iter().collect();
            self.entries.get(&candidate).map(|entry| (len, entry))
        })
    }

    fn entry_record(surface: &str, entry: &LexiconEntry) -> MorphemeRecord {
        let chain_flag = if entry.pos == POS_PARTICLE || entry.pos == POS_AUXILIARY {
            1
        } else {
            -1
        };
        let mut record = MorphemeRecord::new(
            surface,
            &entry.pos,
            &entry.read,
            entry.acc,
            count_moras(&entry.pron),
        )
        .with_chain_flag(chain_flag);
        record.pron = entry.pron.clone();
        record
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_iteration_mark(c: char) -> bool {
    c == KANJI_ITERATION_MARK || KANA_ITERATION_MARKS.contains(&c)
}

impl MorphologicalAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<MorphemeRecord>> {
        let chars: Vec<char> = text.chars().collect();
        let mut records = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if let Some((len, entry)) = self.longest_match(&chars, i) {
                let surface: String = chars[i..i + len].iter().collect();
                records.push(Self::entry_record(&surface, entry));
                i += len;
                continue;
            }

            let c = chars[i];
            let mut buf = [0u8; 4];
            let single = &*c.encode_utf8(&mut buf);

            if is_punctuation(single) {
                records.push(MorphemeRecord::new(single, POS_SYMBOL, single, 0, 0));
                i += 1;
            } else if is_iteration_mark(c) {
                // 々 and kana marks each form their own run
                let kanji = c == KANJI_ITERATION_MARK;
                let start = i;
                while i < chars.len()
                    && is_iteration_mark(chars[i])
                    && (chars[i] == KANJI_ITERATION_MARK) == kanji
                {
                    i += 1;
                }
                let surface: String = chars[start..i].iter().collect();
                records.push(MorphemeRecord::new(&surface, POS_SYMBOL, "", 0, 0));
            } else if is_kana(c) {
                let start = i;
                i += 1;
                while i < chars.len()
                    && is_kana(chars[i])
                    && self.longest_match(&chars, i).is_none()
                {
                    i += 1;
                }
                let surface: String = chars[start..i].iter().collect();
                let reading = to_katakana(&surface);
                let moras = count_moras(&reading);
                records.push(MorphemeRecord::new(&surface, POS_UNKNOWN, &reading, 0, moras));
            } else {
                records.push(MorphemeRecord::new(single, POS_UNKNOWN, "", 0, 0));
                i += 1;
            }
        }

        Ok(records)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
