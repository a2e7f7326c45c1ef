//! Katakana to phoneme conversion
//!
//! Readings are split into moras greedily (two-character digraphs first),
//! each mora mapping to one or two phonemes of the Japanese inventory.
//!
//! Devoiced `i`/`u` come out as `I`/`U`. Analyzer pronunciations mark them
//! with `’` after the mora; unmarked readings get the voiceless-context rule.
//! The backend lowers them again before emitting phonemes, as the inventory
//! has no separate devoiced vowels.

use g2p_frontend_core::symbols::UNK;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Phonemes of a single mora
pub type Mora = Vec<&'static str>;

/// Geminate (促音)
pub const GEMINATE: &str = "q";

/// Moraic nasal (撥音)
pub const MORAIC_NASAL: &str = "N";

const LONG_VOWEL_MARK: char = 'ー';

/// Devoicing mark the analyzer places after a mora in `pron`
pub const DEVOICING_MARK: char = '’';

/// Consonants that devoice a following `i`/`u` when another one follows
const VOICELESS: [&str; 12] = ["k", "ky", "s", "sh", "t", "ch", "ts", "h", "hy", "f", "p", "py"];

const VOWELS: [&str; 5] = ["a", "i", "u", "e", "o"];

/// Small kana that attach to the preceding character
const SMALL_KANA: [char; 9] = ['ャ', 'ュ', 'ョ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ヮ'];

const MORA_TABLE: &[(&str, &[&str])] = &[
    // digraphs
    ("キャ", &["ky", "a"]),
    ("キュ", &["ky", "u"]),
    ("キョ", &["ky", "o"]),
    ("キェ", &["ky", "e"]),
    ("ギャ", &["gy", "a"]),
    ("ギュ", &["gy", "u"]),
    ("ギョ", &["gy", "o"]),
    ("ギェ", &["gy", "e"]),
    ("シャ", &["sh", "a"]),
    ("シュ", &["sh", "u"]),
    ("ショ", &["sh", "o"]),
    ("シェ", &["sh", "e"]),
    ("ジャ", &["j", "a"]),
    ("ジュ", &["j", "u"]),
    ("ジョ", &["j", "o"]),
    ("ジェ", &["j", "e"]),
    ("チャ", &["ch", "a"]),
    ("チュ", &["ch", "u"]),
    ("チョ", &["ch", "o"]),
    ("チェ", &["ch", "e"]),
    ("ヂャ", &["j", "a"]),
    ("ヂュ", &["j", "u"]),
    ("ヂョ", &["j", "o"]),
    ("ニャ", &["ny", "a"]),
    ("ニュ", &["ny", "u"]),
    ("ニョ", &["ny", "o"]),
    ("ニェ", &["ny", "e"]),
    ("ヒャ", &["hy", "a"]),
    ("ヒュ", &["hy", "u"]),
    ("ヒョ", &["hy", "o"]),
    ("ヒェ", &["hy", "e"]),
    ("ビャ", &["by", "a"]),
    ("ビュ", &["by", "u"]),
    ("ビョ", &["by", "o"]),
    ("ビェ", &["by", "e"]),
    ("ピャ", &["py", "a"]),
    ("ピュ", &["py", "u"]),
    ("ピョ", &["py", "o"]),
    ("ピェ", &["py", "e"]),
    ("ミャ", &["my", "a"]),
    ("ミュ", &["my", "u"]),
    ("ミョ", &["my", "o"]),
    ("ミェ", &["my", "e"]),
    ("リャ", &["ry", "a"]),
    ("リュ", &["ry", "u"]),
    ("リョ", &["ry", "o"]),
    ("リェ", &["ry", "e"]),
    ("ティ", &["t", "i"]),
    ("トゥ", &["t", "u"]),
    ("テュ", &["ty", "u"]),
    ("ディ", &["d", "i"]),
    ("ドゥ", &["d", "u"]),
    ("デュ", &["dy", "u"]),
    ("ツァ", &["ts", "a"]),
    ("ツィ", &["ts", "i"]),
    ("ツェ", &["ts", "e"]),
    ("ツォ", &["ts", "o"]),
    ("ファ", &["f", "a"]),
    ("フィ", &["f", "i"]),
    ("フェ", &["f", "e"]),
    ("フォ", &["f", "o"]),
    ("フュ", &["hy", "u"]),
    ("ウィ", &["w", "i"]),
    ("ウェ", &["w", "e"]),
    ("ウォ", &["w", "o"]),
    ("ヴァ", &["b", "a"]),
    ("ヴィ", &["b", "i"]),
    ("ヴェ", &["b", "e"]),
    ("ヴォ", &["b", "o"]),
    ("ヴュ", &["by", "u"]),
    ("スィ", &["s", "i"]),
    ("ズィ", &["z", "i"]),
    ("イェ", &["y", "e"]),
    // single kana
    ("ア", &["a"]),
    ("イ", &["i"]),
    ("ウ", &["u"]),
    ("エ", &["e"]),
    ("オ", &["o"]),
    ("カ", &["k", "a"]),
    ("キ", &["k", "i"]),
    ("ク", &["k", "u"]),
    ("ケ", &["k", "e"]),
    ("コ", &["k", "o"]),
    ("ガ", &["g", "a"]),
    ("ギ", &["g", "i"]),
    ("グ", &["g", "u"]),
    ("ゲ", &["g", "e"]),
    ("ゴ", &["g", "o"]),
    ("サ", &["s", "a"]),
    ("シ", &["sh", "i"]),
    ("ス", &["s", "u"]),
    ("セ", &["s", "e"]),
    ("ソ", &["s", "o"]),
    ("ザ", &["z", "a"]),
    ("ジ", &["j", "i"]),
    ("ズ", &["z", "u"]),
    ("ゼ", &["z", "e"]),
    ("ゾ", &["z", "o"]),
    ("タ", &["t", "a"]),
    ("チ", &["ch", "i"]),
    ("ツ", &["ts", "u"]),
    ("テ", &["t", "e"]),
    ("ト", &["t", "o"]),
    ("ダ", &["d", "a"]),
    ("ヂ", &["j", "i"]),
    ("ヅ", &["z", "u"]),
    ("デ", &["d", "e"]),
    ("ド", &["d", "o"]),
    ("ナ", &["n", "a"]),
    ("ニ", &["n", "i"]),
    ("ヌ", &["n", "u"]),
    ("ネ", &["n", "e"]),
    ("ノ", &["n", "o"]),
    ("ハ", &["h", "a"]),
    ("ヒ", &["h", "i"]),
    ("フ", &["f", "u"]),
    ("ヘ", &["h", "e"]),
    ("ホ", &["h", "o"]),
    ("バ", &["b", "a"]),
    ("ビ", &["b", "i"]),
    ("ブ", &["b", "u"]),
    ("ベ", &["b", "e"]),
    ("ボ", &["b", "o"]),
    ("パ", &["p", "a"]),
    ("ピ", &["p", "i"]),
    ("プ", &["p", "u"]),
    ("ペ", &["p", "e"]),
    ("ポ", &["p", "o"]),
    ("マ", &["m", "a"]),
    ("ミ", &["m", "i"]),
    ("ム", &["m", "u"]),
    ("メ", &["m", "e"]),
    ("モ", &["m", "o"]),
    ("ヤ", &["y", "a"]),
    ("ユ", &["y", "u"]),
    ("ヨ", &["y", "o"]),
    ("ラ", &["r", "a"]),
    ("リ", &["r", "i"]),
    ("ル", &["r", "u"]),
    ("レ", &["r", "e"]),
    ("ロ", &["r", "o"]),
    ("ワ", &["w", "a"]),
    ("ヰ", &["i"]),
    ("ヱ", &["e"]),
    ("ヲ", &["o"]),
    ("ヴ", &["b", "u"]),
    ("ァ", &["a"]),
    ("ィ", &["i"]),
    ("ゥ", &["u"]),
    ("ェ", &["e"]),
    ("ォ", &["o"]),
    ("ャ", &["y", "a"]),
    ("ュ", &["y", "u"]),
    ("ョ", &["y", "o"]),
    ("ヮ", &["w", "a"]),
    ("ヵ", &["k", "a"]),
    ("ヶ", &["k", "e"]),
];

static MORAS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| MORA_TABLE.iter().copied().collect());

/// Hiragana folded to katakana; everything else unchanged
pub fn to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' => char::from_u32(c as u32 + 0x60).unwrap_or(c),
            _ => c,
        })
        .collect()
}

pub fn is_kana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | '\u{30A1}'..='\u{30FA}' | 'ー')
}

/// Number of moras in a katakana reading
pub fn count_moras(reading: &str) -> u32 {
    reading
        .chars()
        .filter(|c| !SMALL_KANA.contains(c) && *c != DEVOICING_MARK)
        .count() as u32
}

/// The trailing mora of a reading, small kana included
pub fn last_mora(reading: &str) -> Option<String> {
    let chars: Vec<char> = reading.chars().filter(|c| *c != DEVOICING_MARK).collect();
    let last = *chars.last()?;
    if SMALL_KANA.contains(&last) && chars.len() >= 2 {
        Some(chars[chars.len() - 2..].iter().collect())
    } else {
        Some(last.to_string())
    }
}

/// Last vowel phoneme of a mora sequence
pub fn trailing_vowel(moras: &[Mora]) -> Option<&'static str> {
    moras
        .iter()
        .rev()
        .flat_map(|m| m.iter().rev())
        .map(|p| lower_devoiced(*p))
        .find(|p| VOWELS.contains(p))
}

/// Devoiced vowels folded back into the inventory
pub fn lower_devoiced(phoneme: &'static str) -> &'static str {
    match phoneme {
        "I" => "i",
        "U" => "u",
        other => other,
    }
}

fn devoice(mora: &mut Mora) -> bool {
    let Some(vowel) = mora.last_mut() else {
        return false;
    };
    *vowel = match *vowel {
        "i" => "I",
        "u" => "U",
        _ => return false,
    };
    true
}

fn voiceless_onset(mora: &Mora) -> bool {
    mora.len() == 2 && VOICELESS.contains(&mora[0])
}

/// `i`/`u` between voiceless consonants, never two moras in a row
fn devoice_by_context(moras: &mut [Mora]) {
    let mut prev_devoiced = false;
    for i in 0..moras.len() {
        let candidate = !prev_devoiced
            && voiceless_onset(&moras[i])
            && moras.get(i + 1).is_some_and(|next| voiceless_onset(next));
        prev_devoiced = candidate && devoice(&mut moras[i]);
    }
}

/// Split a reading into moras.
///
/// `prev_vowel` carries the last vowel of the preceding word so a leading
/// `ー` can lengthen it. Returns the first character with no mapping.
/// Devoiced vowels are returned as `I`/`U`.
pub fn to_moras(
    reading: &str,
    prev_vowel: Option<&'static str>,
    use_jp_extra: bool,
) -> Result<Vec<Mora>, char> {
    let chars: Vec<char> = to_katakana(reading).chars().collect();
    let mut moras: Vec<Mora> = Vec::with_capacity(chars.len());
    let marked = chars.contains(&DEVOICING_MARK);
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == DEVOICING_MARK {
            if let Some(prev) = moras.last_mut() {
                devoice(prev);
            }
            i += 1;
            continue;
        }
        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if let Some(phonemes) = MORAS.get(pair.as_str()) {
                moras.push(phonemes.to_vec());
                i += 2;
                continue;
            }
        }

        let c = chars[i];
        let mora = match c {
            'ッ' => vec![GEMINATE],
            'ン' if use_jp_extra => vec![MORAIC_NASAL],
            'ン' => vec!["n"],
            LONG_VOWEL_MARK => match trailing_vowel(&moras).or(prev_vowel) {
                Some(vowel) => vec![vowel],
                None => {
                    tracing::warn!("Long vowel mark with no vowel before it in {:?}", reading);
                    vec![UNK]
                }
            },
            _ => {
                let mut buf = [0u8; 4];
                match MORAS.get(&*c.encode_utf8(&mut buf)) {
                    Some(phonemes) => phonemes.to_vec(),
                    None => return Err(c),
                }
            }
        };
        moras.push(mora);
        i += 1;
    }

    if !marked {
        devoice_by_context(&mut moras);
    }
    Ok(moras)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(reading: &str) -> Vec<&'static str> {
        to_moras(reading, None, true)
            .unwrap()
            .into_iter()
            .flatten()
            .map(lower_devoiced)
            .collect()
    }

    #[test]
    fn test_basic_reading() {
        assert_eq!(flat("コンニチハ"), vec!["k", "o", "N", "n", "i", "ch", "i", "h", "a"]);
        assert_eq!(flat("キョウ"), vec!["ky", "o", "u"]);
    }

    #[test]
    fn test_geminate_and_long_vowel() {
        assert_eq!(flat("ケッコン"), vec!["k", "e", "q", "k", "o", "N"]);
        assert_eq!(flat("ラーメン"), vec!["r", "a", "a", "m", "e", "N"]);
    }

    #[test]
    fn test_moraic_nasal_without_extra() {
        let moras = to_moras("ホン", None, false).unwrap();
        assert_eq!(moras, vec![vec!["h", "o"], vec!["n"]]);
    }

    #[test]
    fn test_leading_long_vowel_uses_previous_word() {
        let moras = to_moras("ー", Some("a"), true).unwrap();
        assert_eq!(moras, vec![vec!["a"]]);

        let orphan = to_moras("ー", None, true).unwrap();
        assert_eq!(orphan, vec![vec![UNK]]);
    }

    #[test]
    fn test_hiragana_and_v() {
        assert_eq!(flat("ばいおりん"), vec!["b", "a", "i", "o", "r", "i", "N"]);
        assert_eq!(flat("ヴァイオリン")[..2], ["b", "a"]);
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(to_moras("カ漢", None, true), Err('漢'));
    }

    #[test]
    fn test_devoicing_mark() {
        let moras = to_moras("シ’キジョー", None, true).unwrap();
        assert_eq!(moras[0], vec!["sh", "I"]);
        assert_eq!(moras[1], vec!["k", "i"]);
        assert_eq!(flat("シ’キジョー"), vec!["sh", "i", "k", "i", "j", "o", "o"]);
        assert_eq!(flat("ケッコンシ’キ").len(), 10);
    }

    #[test]
    fn test_devoicing_by_context() {
        // ス between s and k, then キ is spared as the next one in a row
        let moras = to_moras("スキ", None, true).unwrap();
        assert_eq!(moras, vec![vec!["s", "U"], vec!["k", "i"]]);

        let moras = to_moras("キクチ", None, true).unwrap();
        assert_eq!(moras[0], vec!["k", "I"]);
        assert_eq!(moras[1], vec!["k", "u"]);

        // voiced neighbours keep the vowel
        let moras = to_moras("スギ", None, true).unwrap();
        assert_eq!(moras[0], vec!["s", "u"]);
        let moras = to_moras("キ", None, true).unwrap();
        assert_eq!(moras[0], vec!["k", "i"]);
    }

    #[test]
    fn test_marked_reading_skips_context_rule() {
        // only the marked mora devoices even though スキ fits the rule
        let moras = to_moras("スキク’カ", None, true).unwrap();
        assert_eq!(moras[0], vec!["s", "u"]);
        assert_eq!(moras[2], vec!["k", "U"]);
    }

    #[test]
    fn test_mora_helpers() {
        assert_eq!(count_moras("ジョジョ"), 2);
        assert_eq!(count_moras("ケッコンシキ"), 6);
        assert_eq!(count_moras("ケッコンシ’キ"), 6);
        assert_eq!(last_mora("デス’").as_deref(), Some("ス"));
        assert_eq!(last_mora("ジョ").as_deref(), Some("ジョ"));
        assert_eq!(last_mora("ナ").as_deref(), Some("ナ"));
        assert_eq!(last_mora(""), None);
    }
}
