//! Spelling out numerals
//!
//! One converter per language. Each turns digit strings into the words the
//! backend can read aloud; the normalizers decide where numbers are.

pub mod chinese;
pub mod english;
pub mod japanese;
pub mod korean;

pub use chinese::an2cn;
pub use english::{ordinal_words, EnglishNumbers};
pub use japanese::to_kanji;
pub use korean::{hangul_number, number_to_hangul};

/// Remove thousands separators from a digit string
pub(crate) fn strip_commas(digits: &str) -> String {
    digits.chars().filter(|c| *c != ',').collect()
}

/// Parse a digit string that may be too long for `u64`
pub(crate) fn parse_digits(digits: &str) -> Option<u64> {
    strip_commas(digits).parse().ok()
}
