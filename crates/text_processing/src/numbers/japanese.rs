//! Kanji numerals for Japanese

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::parse_digits;

const DIGITS: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Myriad group markers, one per four digits
const GROUPS: [&str; 5] = ["", "万", "億", "兆", "京"];

static CURRENCY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([$¥£€])([0-9.,]*[0-9])").unwrap());

static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:,[0-9]{3})*(?:\.[0-9]+)?").unwrap());

fn currency_name(symbol: &str) -> &'static str {
    match symbol {
        "$" => "ドル",
        "¥" => "円",
        "£" => "ポンド",
        "€" => "ユーロ",
        _ => "",
    }
}

/// Integer to kanji numerals (`1234` → `千二百三十四`)
pub fn to_kanji(n: u64) -> String {
    if n == 0 {
        return DIGITS[0].to_string();
    }

    let mut groups = Vec::new();
    let mut remaining = n;
    while remaining > 0 {
        groups.push(remaining % 10_000);
        remaining /= 10_000;
    }

    let mut out = String::new();
    for (idx, group) in groups.iter().enumerate().rev() {
        if *group == 0 {
            continue;
        }
        out.push_str(&below_myriad(*group));
        out.push_str(GROUPS.get(idx).copied().unwrap_or(""));
    }
    out
}

fn below_myriad(n: u64) -> String {
    let mut out = String::new();
    for (unit, name) in [(1000, "千"), (100, "百"), (10, "十")] {
        let digit = (n / unit) % 10;
        if digit == 0 {
            continue;
        }
        if digit > 1 {
            out.push_str(DIGITS[digit as usize]);
        }
        out.push_str(name);
    }
    let ones = n % 10;
    if ones > 0 {
        out.push_str(DIGITS[ones as usize]);
    }
    out
}

fn digit_string(digits: &str) -> String {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| DIGITS[d as usize])
        .collect()
}

fn number_to_kanji(number: &str) -> String {
    let (integer, fraction) = match number.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (number, None),
    };

    let mut out = match parse_digits(integer) {
        Some(n) => to_kanji(n),
        None => digit_string(integer),
    };
    if let Some(fraction) = fraction {
        out.push('点');
        out.push_str(&digit_string(fraction));
    }
    out
}

/// Move currency symbols after the amount and spell every number in kanji
pub fn expand(text: &str) -> String {
    let text = CURRENCY_PATTERN.replace_all(text, |caps: &Captures| {
        format!("{}{}", &caps[2], currency_name(&caps[1]))
    });

    NUMBER_PATTERN
        .replace_all(&text, |caps: &Captures| number_to_kanji(&caps[0]))
        .into_owned()
}
