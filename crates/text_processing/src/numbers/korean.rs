//! Korean numeral readings
//!
//! Counters from a closed list take native Korean numerals (한 개, 두 마리);
//! everything else is read with Sino-Korean numerals (삼 층, 십 분).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const SINO_DIGITS: [&str; 10] = ["", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];
const NATIVE_ONES: [&str; 10] = [
    "", "한", "두", "세", "네", "다섯", "여섯", "일곱", "여덟", "아홉",
];
const NATIVE_TENS: [&str; 10] = [
    "", "열", "스물", "서른", "마흔", "쉰", "예순", "일흔", "여든", "아흔",
];

/// Digit names used when a digit is read on its own
const DIGIT_NAMES: [&str; 10] = ["영", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

/// Counters read with native numerals
pub const NATIVE_CLASSIFIERS: &[&str] = &[
    "군데", "권", "개", "그루", "닢", "대", "두", "마리", "모", "모금", "뭇", "발", "발짝", "방",
    "번", "벌", "보루", "살", "수", "술", "시", "쌈", "움큼", "정", "짝", "채", "척", "첩", "축",
    "켤레", "톨", "통",
];

/// Spoken marker for a decimal point
pub const DECIMAL_POINT: &str = "쩜";

static COUNTER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9][0-9,]*)([\x{AC00}-\x{D71F}]+)").unwrap());

/// Place names by position from the right. Positions 4 and up are only
/// reached for Sino readings of large numbers.
fn place_name(position: usize) -> &'static str {
    match position % 4 {
        1 => "십",
        2 => "백",
        3 => "천",
        _ => match position / 4 {
            1 => "만",
            2 => "억",
            3 => "조",
            _ => "",
        },
    }
}

/// Spell a digit string as a Korean numeral.
///
/// `sino` selects Sino-Korean readings; otherwise the ones and tens places
/// use native numerals. Leading 일 is dropped before 십/백/천/만 within the
/// first myriad group.
pub fn hangul_number(num: &str, sino: bool) -> String {
    let num: String = num.chars().filter(|c| *c != ',').collect();

    if num == "0" {
        return DIGIT_NAMES[0].to_string();
    }
    if !sino && num == "20" {
        return "스무".to_string();
    }

    let digits: Vec<usize> = num
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();
    let len = digits.len();

    let mut spelled: Vec<String> = Vec::with_capacity(len);
    for (idx, &digit) in digits.iter().enumerate() {
        let position = len - idx - 1;

        if digit == 0 {
            if position % 4 == 0 && position > 0 {
                // A myriad marker is still read when any of the three
                // places before it was read.
                let start = spelled.len().saturating_sub(3);
                if spelled[start..].iter().all(|s| s.is_empty()) {
                    spelled.push(String::new());
                } else {
                    spelled.push(place_name(position).to_string());
                }
            } else {
                spelled.push(String::new());
            }
            continue;
        }

        let name = match position {
            0 if sino => SINO_DIGITS[digit].to_string(),
            0 => NATIVE_ONES[digit].to_string(),
            1 if !sino => NATIVE_TENS[digit].to_string(),
            _ => {
                let place = place_name(position);
                let drop_one = digit == 1 && position <= 7 && position != 0;
                if drop_one {
                    place.to_string()
                } else {
                    format!("{}{}", SINO_DIGITS[digit], place)
                }
            }
        };
        spelled.push(name);
    }

    spelled.concat()
}

/// Whether the counter's first one or two syllables are a whole classifier.
///
/// Partial syllables do not count: `마일` is not `마리`, so miles stay Sino.
fn is_native_classifier(counter: &str) -> bool {
    let first_two: String = counter.chars().take(2).collect();
    let first: String = counter.chars().take(1).collect();
    NATIVE_CLASSIFIERS.contains(&first_two.as_str()) || NATIVE_CLASSIFIERS.contains(&first.as_str())
}

/// Spell digit runs followed by a counter word, then read any digits left
/// over one by one.
///
/// Digits right after a decimal point marker are not treated as a counted
/// number; they stay digit-by-digit.
pub fn number_to_hangul(text: &str) -> String {
    let replaced = COUNTER_PATTERN.replace_all(text, |caps: &Captures| {
        let whole = caps.get(0).map(|m| m.start()).unwrap_or(0);
        let num = &caps[1];
        let counter = &caps[2];

        let preceding: Vec<char> = text[..whole].chars().rev().take(2).collect();
        if preceding.len() == 2 && preceding[1].to_string() == DECIMAL_POINT {
            return format!("{} {}", num, counter);
        }

        let spelled = hangul_number(num, !is_native_classifier(counter));
        format!("{} {}", spelled, counter)
    });

    replaced
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => DIGIT_NAMES[d as usize].to_string(),
            None => c.to_string(),
        })
        .collect()
}
