//! Arabic numerals to Chinese numerals

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::parse_digits;

const DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];
const SECTION_UNITS: [&str; 4] = ["", "万", "亿", "万亿"];

static PERCENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)%").unwrap());

static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:,[0-9]{3})*(?:\.[0-9]+)?").unwrap());

/// Integer to Chinese numerals (`105` → `一百零五`, `12` → `十二`)
pub fn an2cn(n: u64) -> String {
    if n == 0 {
        return DIGITS[0].to_string();
    }

    let mut sections = Vec::new();
    let mut remaining = n;
    while remaining > 0 {
        sections.push(remaining % 10_000);
        remaining /= 10_000;
    }

    let mut out = String::new();
    let mut pending_zero = false;
    for (idx, &section) in sections.iter().enumerate().rev() {
        if section == 0 {
            pending_zero = !out.is_empty();
            continue;
        }
        // A gap inside the number is read as a single 零.
        if !out.is_empty() && (pending_zero || section < 1000) {
            out.push(DIGITS[0]);
        }
        pending_zero = false;
        out.push_str(&section_to_cn(section));
        out.push_str(SECTION_UNITS.get(idx).copied().unwrap_or(""));
    }

    if (10..20).contains(&n) {
        // 一十二 is read 十二
        out.remove(0);
    }
    out
}

fn section_to_cn(section: u64) -> String {
    let mut out = String::new();
    let mut zero_run = false;
    for (unit, name) in [(1000, "千"), (100, "百"), (10, "十"), (1, "")] {
        let digit = (section / unit) % 10;
        if digit == 0 {
            zero_run = !out.is_empty();
            continue;
        }
        if zero_run {
            out.push(DIGITS[0]);
            zero_run = false;
        }
        out.push(DIGITS[digit as usize]);
        out.push_str(name);
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

fn number_to_cn(number: &str) -> String {
    let (integer, fraction) = match number.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (number, None),
    };

    let mut out = match parse_digits(integer) {
        Some(n) => an2cn(n),
        None => digit_string(integer),
    };
    if let Some(fraction) = fraction {
        out.push('点');
        out.push_str(&digit_string(fraction));
    }
    out
}

/// Spell percentages and numbers in `text` with Chinese numerals
pub fn expand(text: &str) -> String {
    let text = PERCENT_PATTERN.replace_all(text, |caps: &Captures| {
        format!("百分之{}", number_to_cn(&caps[1]))
    });

    NUMBER_PATTERN
        .replace_all(&text, |caps: &Captures| number_to_cn(&caps[0]))
        .into_owned()
}
