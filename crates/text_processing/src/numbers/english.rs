//! English number words

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{parse_digits, strip_commas};

const ONES: &[&str] = &[
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: &[&str] = &[
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: &[(u64, &str)] = &[
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

static POUNDS_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"£([0-9]+(?:,[0-9]{3})*)").unwrap());

static DOLLARS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([0-9]+(?:,[0-9]{3})*)(?:\.([0-9]+))?").unwrap());

static PERCENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*%").unwrap());

static DECIMAL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\.([0-9]+)").unwrap());

static ORDINAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:,[0-9]{3})*)(st|nd|rd|th)\b").unwrap());

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+(?:,[0-9]{3})*").unwrap());

/// Western-grouping number to words converter
pub struct EnglishNumbers;

impl EnglishNumbers {
    /// Convert an integer to words
    pub fn to_words(n: u64) -> String {
        if n < 20 {
            return ONES[n as usize].to_string();
        }

        let mut parts: Vec<String> = Vec::new();
        let mut remaining = n;

        for &(scale, name) in SCALES {
            if remaining >= scale {
                parts.push(format!("{} {}", Self::below_thousand(remaining / scale), name));
                remaining %= scale;
            }
        }

        if remaining > 0 {
            parts.push(Self::below_thousand(remaining));
        }

        parts.join(" ")
    }

    fn below_thousand(n: u64) -> String {
        let mut parts = Vec::new();
        if n >= 100 {
            parts.push(format!("{} hundred", ONES[(n / 100) as usize]));
        }
        let rest = n % 100;
        if rest > 0 {
            parts.push(Self::below_hundred(rest));
        }
        parts.join(" ")
    }

    fn below_hundred(n: u64) -> String {
        if n < 20 {
            ONES[n as usize].to_string()
        } else if n % 10 == 0 {
            TENS[(n / 10) as usize].to_string()
        } else {
            format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
        }
    }

    /// Digits read one at a time, for numbers too long to group
    fn digit_by_digit(digits: &str) -> String {
        digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| ONES[d as usize])
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn digits_to_words(digits: &str) -> String {
        match parse_digits(digits) {
            Some(n) => Self::to_words(n),
            None => Self::digit_by_digit(&strip_commas(digits)),
        }
    }

    /// Replace every numeral in `text` with words
    pub fn expand(text: &str) -> String {
        let text = POUNDS_PATTERN.replace_all(text, |caps: &Captures| {
            let words = Self::digits_to_words(&caps[1]);
            let unit = if words == "one" { "pound" } else { "pounds" };
            format!("{} {}", words, unit)
        });

        let text = DOLLARS_PATTERN.replace_all(&text, |caps: &Captures| {
            let dollars = Self::digits_to_words(&caps[1]);
            let dollar_unit = if dollars == "one" { "dollar" } else { "dollars" };
            match caps.get(2).and_then(|c| parse_digits(c.as_str())) {
                Some(cents) if cents > 0 => {
                    let cent_unit = if cents == 1 { "cent" } else { "cents" };
                    format!(
                        "{} {}, {} {}",
                        dollars,
                        dollar_unit,
                        Self::to_words(cents),
                        cent_unit
                    )
                }
                _ => format!("{} {}", dollars, dollar_unit),
            }
        });

        let text = PERCENT_PATTERN.replace_all(&text, |caps: &Captures| {
            format!("{} percent", &caps[1])
        });

        let text = DECIMAL_PATTERN.replace_all(&text, |caps: &Captures| {
            format!(
                "{} point {}",
                Self::digits_to_words(&caps[1]),
                Self::digit_by_digit(&caps[2])
            )
        });

        let text = ORDINAL_PATTERN.replace_all(&text, |caps: &Captures| {
            ordinal_words(&Self::digits_to_words(&caps[1]))
        });

        NUMBER_PATTERN
            .replace_all(&text, |caps: &Captures| Self::digits_to_words(&caps[0]))
            .into_owned()
    }
}

/// Turn cardinal words into their ordinal form ("twenty one" → "twenty first")
pub fn ordinal_words(cardinal: &str) -> String {
    let (head, last) = match cardinal.rsplit_once(' ') {
        Some((head, last)) => (Some(head), last),
        None => (None, cardinal),
    };

    let ordinal = match last {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        word if word.ends_with('y') => format!("{}ieth", &word[..word.len() - 1]),
        word => format!("{}th", word),
    };

    match head {
        Some(head) => format!("{} {}", head, ordinal),
        None => ordinal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_words() {
        assert_eq!(EnglishNumbers::to_words(0), "zero");
        assert_eq!(EnglishNumbers::to_words(15), "fifteen");
        assert_eq!(EnglishNumbers::to_words(42), "forty two");
        assert_eq!(EnglishNumbers::to_words(100), "one hundred");
        assert_eq!(EnglishNumbers::to_words(1_005), "one thousand five");
        assert_eq!(
            EnglishNumbers::to_words(2_300_019),
            "two million three hundred thousand nineteen"
        );
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal_words("one"), "first");
        assert_eq!(ordinal_words("twenty"), "twentieth");
        assert_eq!(ordinal_words("twenty two"), "twenty second");
        assert_eq!(ordinal_words("eleven"), "eleventh");
    }

    #[test]
    fn test_expand() {
        assert_eq!(EnglishNumbers::expand("I have 3 cats"), "I have three cats");
        assert_eq!(EnglishNumbers::expand("1,000 people"), "one thousand people");
        assert_eq!(EnglishNumbers::expand("pi is 3.14"), "pi is three point one four");
        assert_eq!(EnglishNumbers::expand("the 21st day"), "the twenty first day");
        assert_eq!(EnglishNumbers::expand("50%"), "fifty percent");
    }

    #[test]
    fn test_currency() {
        assert_eq!(EnglishNumbers::expand("$1"), "one dollar");
        assert_eq!(
            EnglishNumbers::expand("$2.50"),
            "two dollars, fifty cents"
        );
        assert_eq!(EnglishNumbers::expand("£10"), "ten pounds");
    }
}
