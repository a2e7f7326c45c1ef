//! Iteration mark (踊り字) expansion
//!
//! Kana marks repeat the previous mora. The kanji mark 々 repeats the
//! preceding kanji; its reading comes from re-analyzing the repeated
//! characters so rendaku and compound readings survive.

use g2p_frontend_core::morpheme::KANJI_ITERATION_MARK;
use g2p_frontend_core::{MorphemeRecord, MorphologicalAnalyzer, Result};

use super::kana::{count_moras, last_mora};
use super::variants::{unvoiced, voiced};

/// Longest 々 run that is split into pairs; longer runs become one unit
const MAX_REPEAT_RUN: usize = 4;

fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}

fn is_voiced_mark(c: char) -> bool {
    matches!(c, 'ゞ' | 'ヾ')
}

/// Expand every iteration mark in `records`
pub fn expand_iteration_marks(
    records: Vec<MorphemeRecord>,
    analyzer: &dyn MorphologicalAnalyzer,
) -> Result<Vec<MorphemeRecord>> {
    let records = expand_kana_marks(records);
    expand_kanji_marks(records, analyzer)
}

fn repeat_mora(mora: &str, mark: char) -> String {
    let mut chars = mora.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let head = if is_voiced_mark(mark) {
        voiced(first).unwrap_or(first)
    } else {
        unvoiced(first).unwrap_or(first)
    };
    std::iter::once(head).chain(chars).collect()
}

fn expand_kana_marks(records: Vec<MorphemeRecord>) -> Vec<MorphemeRecord> {
    let mut out: Vec<MorphemeRecord> = Vec::with_capacity(records.len());

    for mut record in records {
        if record.is_kana_mark_only() {
            let base = out.last().and_then(|prev| last_mora(&prev.read));
            if let Some(base) = base {
                let reading: String = record
                    .string
                    .chars()
                    .map(|mark| repeat_mora(&base, mark))
                    .collect();
                tracing::debug!(surface = %record.string, reading = %reading, "Expanded kana iteration mark");
                record.mora_size = record.surface_len() as u32;
                record.read = reading.clone();
                record.pron = reading;
            }
        }
        out.push(record);
    }

    out
}

/// Trailing run of kanji across the surfaces already emitted
fn trailing_kanji(records: &[MorphemeRecord]) -> Vec<char> {
    let mut kanji = Vec::new();
    'outer: for record in records.iter().rev() {
        for c in record.string.chars().rev() {
            if !is_kanji(c) {
                break 'outer;
            }
            kanji.push(c);
        }
    }
    kanji.reverse();
    kanji
}

/// One record carrying `surface` with the concatenated reading of `parts`
fn merge_reading(
    surface: String,
    parts: &[MorphemeRecord],
    template: &MorphemeRecord,
) -> MorphemeRecord {
    let read: String = parts.iter().map(|r| r.read.as_str()).collect();
    let pron: String = parts.iter().map(|r| r.pron.as_str()).collect();
    let mut record = template.clone();
    if let Some(first) = parts.first() {
        record.pos = first.pos.clone();
        record.acc = first.acc;
    }
    record.mora_size = count_moras(&pron);
    record.string = surface;
    record.read = read;
    record.pron = pron;
    record
}

fn repeated(
    surface_len: usize,
    read: &str,
    pron: &str,
    times: usize,
    template: &MorphemeRecord,
) -> MorphemeRecord {
    let mut record = template.clone();
    record.string = std::iter::repeat(KANJI_ITERATION_MARK).take(surface_len).collect();
    record.read = read.repeat(times);
    record.pron = pron.repeat(times);
    record.mora_size = count_moras(&record.pron);
    record
}

fn expand_kanji_marks(
    records: Vec<MorphemeRecord>,
    analyzer: &dyn MorphologicalAnalyzer,
) -> Result<Vec<MorphemeRecord>> {
    let mut out: Vec<MorphemeRecord> = Vec::with_capacity(records.len());
    let mut i = 0;

    while i < records.len() {
        if !records[i].is_kanji_mark_only() {
            out.push(records[i].clone());
            i += 1;
            continue;
        }

        // Adjacent mark records form one run
        let start = i;
        while i < records.len() && records[i].is_kanji_mark_only() {
            i += 1;
        }
        let marks = &records[start..i];
        let run: usize = marks.iter().map(|r| r.surface_len()).sum();
        let template = &marks[0];

        let prev = trailing_kanji(&out);
        let Some(&last) = prev.last() else {
            out.extend(marks.iter().cloned());
            continue;
        };

        if run == 1 {
            // The mark and any kanji words right after it read as one compound
            let mut surface = KANJI_ITERATION_MARK.to_string();
            let mut compound = last.to_string();
            while i < records.len()
                && !records[i].string.is_empty()
                && records[i].string.chars().all(is_kanji)
            {
                surface.push_str(&records[i].string);
                compound.push_str(&records[i].string);
                i += 1;
            }
            let parts = analyzer.analyze(&compound)?;
            tracing::debug!(compound = %compound, "Re-analyzed single iteration mark");
            out.push(merge_reading(surface, &parts, template));
        } else if run == 2 && prev.len() >= 2 {
            let compound: String = prev[prev.len() - 2..].iter().collect();
            let parts = analyzer.analyze(&compound)?;
            tracing::debug!(compound = %compound, "Re-analyzed doubled iteration mark");
            let surface = std::iter::repeat(KANJI_ITERATION_MARK).take(run).collect();
            out.push(merge_reading(surface, &parts, template));
        } else {
            let unit: String = if prev.len() >= 2 {
                prev[prev.len() - 2..].iter().collect()
            } else {
                last.to_string()
            };
            let unit_len = unit.chars().count();
            let parts = analyzer.analyze(&unit)?;
            let read: String = parts.iter().map(|r| r.read.as_str()).collect();
            let pron: String = parts.iter().map(|r| r.pron.as_str()).collect();

            if run <= MAX_REPEAT_RUN {
                tracing::debug!(unit = %unit, run, "Split iteration mark run into pairs");
                let mut remaining = run;
                while remaining > 0 {
                    let size = remaining.min(2);
                    let times = if unit_len == 1 { size } else { 1 };
                    out.push(repeated(size, &read, &pron, times, template));
                    remaining -= size;
                }
            } else {
                // One mark per repetition of a single kanji, one per pair otherwise
                let times = if unit_len == 1 { run } else { run.div_ceil(2) };
                tracing::debug!(unit = %unit, run, "Substituted long iteration mark run");
                out.push(repeated(run, &read, &pron, times, template));
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::g2p::japanese::lexicon::LexiconAnalyzer;

    fn analyzer() -> LexiconAnalyzer {
        LexiconAnalyzer::from_tsv(
            "樹\t名詞\tキ\t*\t1\n\
             叙\t名詞\tジョ\t*\t1\n\
             苑\t名詞\tエン\t*\t1\n\
             結婚式\t名詞\tケッコンシキ\t*\t3\n\
             式場\t名詞\tシキジョウ\t*\t0\n\
             場\t名詞\tバ\t*\t0\n\
             今日\t名詞\tキョウ\t*\t1\n\
             前進\t名詞\tゼンシン\t*\t0\n\
             其\t連体詞\tソノ\t*\t0\n\
             他\t名詞\tホカ\t*\t0\n\
             人\t名詞\tヒト\t*\t0\n\
             金子\t名詞\tカネコ\t*\t0\n\
             漬け\t名詞\tヅケ\t*\t0\n\
             愛\t名詞\tアイ\t*\t1\n\
             複\t名詞\tフク\tフ’ク\t1\n\
             線\t名詞\tセン\t*\t1\n\
             学生\t名詞\tガクセイ\tガク’セー\t0\n\
             生活\t名詞\tセイカツ\tセーカツ\t0\n\
             民主\t名詞\tミンシュ\t*\t0\n\
             主義\t名詞\tシュギ\t*\t1\n\
             部分\t名詞\tブブン\t*\t1\n\
             後手\t名詞\tゴテ\t*\t0\n",
        )
        .unwrap()
    }

    fn expand(text: &str) -> Vec<MorphemeRecord> {
        let analyzer = analyzer();
        let records = analyzer.analyze(text).unwrap();
        expand_iteration_marks(records, &analyzer).unwrap()
    }

    fn reads(records: &[MorphemeRecord]) -> Vec<&str> {
        records.iter().map(|r| r.read.as_str()).collect()
    }

    fn prons(records: &[MorphemeRecord]) -> Vec<&str> {
        records.iter().map(|r| r.pron.as_str()).collect()
    }

    fn moras(records: &[MorphemeRecord]) -> Vec<u32> {
        records.iter().map(|r| r.mora_size).collect()
    }

    #[test]
    fn test_kana_mark() {
        let records = expand("なゝ樹");
        assert_eq!(reads(&records), vec!["ナ", "ナ", "キ"]);
        let moras: Vec<u32> = records.iter().map(|r| r.mora_size).collect();
        assert_eq!(moras, vec![1, 1, 1]);
    }

    #[test]
    fn test_voiced_kana_mark() {
        let records = expand("すゞ");
        assert_eq!(reads(&records), vec!["ス", "ズ"]);

        let records = expand("金子みすゞ");
        assert_eq!(reads(&records), vec!["カネコ", "ミス", "ズ"]);
        assert_eq!(moras(&records), vec![3, 2, 1]);
    }

    #[test]
    fn test_plain_mark_unvoices() {
        let records = expand("づゝ");
        assert_eq!(reads(&records), vec!["ヅ", "ツ"]);
        assert_eq!(prons(&records), vec!["ヅ", "ツ"]);
    }

    #[test]
    fn test_voiced_mark_after_voiced_kana() {
        let records = expand("ぶゞ漬け");
        assert_eq!(reads(&records), vec!["ブ", "ブ", "ヅケ"]);
        assert_eq!(moras(&records), vec![1, 1, 2]);
    }

    #[test]
    fn test_katakana_mark() {
        let records = expand("バナヽ");
        assert_eq!(reads(&records), vec!["バナ", "ナ"]);
        assert_eq!(moras(&records), vec![2, 1]);
    }

    #[test]
    fn test_doubled_mark_after_single_kanji() {
        let records = expand("叙々々苑");
        assert_eq!(reads(&records), vec!["ジョ", "ジョジョ", "エン"]);
        assert_eq!(records[1].mora_size, 2);
        assert_eq!(records[1].string, "々々");
    }

    #[test]
    fn test_mark_runs_split_into_pairs() {
        let records = expand("叙々々々苑");
        assert_eq!(reads(&records), vec!["ジョ", "ジョジョ", "ジョ", "エン"]);
        assert_eq!(moras(&records), vec![1, 2, 1, 2]);

        let records = expand("叙々々々々苑");
        assert_eq!(reads(&records), vec!["ジョ", "ジョジョ", "ジョジョ", "エン"]);
        assert_eq!(moras(&records), vec![1, 2, 2, 2]);
    }

    #[test]
    fn test_pairs_keep_devoicing_marks() {
        let records = expand("複々々線");
        assert_eq!(reads(&records)[..2], ["フク", "フクフク"]);
        assert_eq!(prons(&records)[..2], ["フ’ク", "フ’クフ’ク"]);
        assert_eq!(moras(&records)[..2], [2, 4]);

        let records = expand("複々々々線");
        assert_eq!(prons(&records)[..3], ["フ’ク", "フ’クフ’ク", "フ’ク"]);
        assert_eq!(moras(&records)[..3], [2, 4, 2]);
    }

    #[test]
    fn test_long_run_repeats_each_mark() {
        let records = expand("叙々々々々々苑");
        assert_eq!(reads(&records), vec!["ジョ", "ジョジョジョジョジョ", "エン"]);
        assert_eq!(records[1].pron, "ジョジョジョジョジョ");
        assert_eq!(records[1].mora_size, 5);
        assert_eq!(records[1].string, "々々々々々");
    }

    #[test]
    fn test_single_mark_joins_following_kanji() {
        let records = expand("結婚式々場");
        assert_eq!(reads(&records), vec!["ケッコンシキ", "シキジョウ"]);
        assert_eq!(records[1].string, "々場");

        let records = expand("学生々活");
        assert_eq!(reads(&records), vec!["ガクセイ", "セイカツ"]);
        assert_eq!(prons(&records), vec!["ガク’セー", "セーカツ"]);
        assert_eq!(moras(&records), vec![4, 4]);

        let records = expand("民主々義");
        assert_eq!(reads(&records), vec!["ミンシュ", "シュギ"]);
        assert_eq!(moras(&records), vec![3, 2]);
    }

    #[test]
    fn test_doubled_mark_after_compound() {
        let records = expand("今日も前進々々");
        assert_eq!(reads(&records), vec!["キョウ", "モ", "ゼンシン", "ゼンシン"]);

        let records = expand("其他々々");
        assert_eq!(reads(&records), vec!["ソノ", "ホカ", "ソノホカ"]);
    }

    #[test]
    fn test_single_mark_at_end() {
        let records = expand("人々");
        assert_eq!(reads(&records), vec!["ヒト", "ヒト"]);

        let records = expand("愛々");
        assert_eq!(reads(&records), vec!["アイ", "アイ"]);
        assert_eq!(moras(&records), vec![2, 2]);
    }

    #[test]
    fn test_doubled_mark_repeats_compound() {
        assert_eq!(reads(&expand("部分々々")), vec!["ブブン", "ブブン"]);
        assert_eq!(reads(&expand("後手々々")), vec!["ゴテ", "ゴテ"]);
    }

    #[test]
    fn test_mark_without_kanji_left_alone() {
        let records = expand("々");
        assert_eq!(records.len(), 1);
        assert!(records[0].read.is_empty());
    }

    #[test]
    fn test_surfaces_preserved() {
        for text in ["叙々々苑", "結婚式々場", "其他々々", "人々々", "叙々々々々々苑", "複々々々線"] {
            let joined: String = expand(text).iter().map(|r| r.string.as_str()).collect();
            assert_eq!(joined, text);
        }
    }
}
