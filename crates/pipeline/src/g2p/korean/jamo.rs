//! Hangul syllable arithmetic and compatibility jamo
//!
//! A precomposed syllable is `0xAC00 + (initial * 21 + medial) * 28 + final`.

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const MEDIAL_COUNT: u32 = 21;
const FINAL_COUNT: u32 = 28;

/// Initial consonants in syllable order, as compatibility jamo
const INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
    'ㅍ', 'ㅎ',
];

const MEDIALS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ',
    'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Final consonants; index 0 is "no final"
const FINALS: [&str; 28] = [
    "", "ㄱ", "ㄲ", "ㄱㅅ", "ㄴ", "ㄴㅈ", "ㄴㅎ", "ㄷ", "ㄹ", "ㄹㄱ", "ㄹㅁ", "ㄹㅂ", "ㄹㅅ", "ㄹㅌ",
    "ㄹㅍ", "ㄹㅎ", "ㅁ", "ㅂ", "ㅂㅅ", "ㅅ", "ㅆ", "ㅇ", "ㅈ", "ㅊ", "ㅋ", "ㅌ", "ㅍ", "ㅎ",
];

/// Index of the silent initial ㅇ
pub const SILENT_INITIAL: u32 = 11;

/// A precomposed syllable split into its three indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub initial: u32,
    pub medial: u32,
    pub final_: u32,
}

impl Syllable {
    pub fn decompose(c: char) -> Option<Self> {
        let code = c as u32;
        if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
            return None;
        }
        let index = code - SYLLABLE_BASE;
        Some(Self {
            initial: index / (MEDIAL_COUNT * FINAL_COUNT),
            medial: (index % (MEDIAL_COUNT * FINAL_COUNT)) / FINAL_COUNT,
            final_: index % FINAL_COUNT,
        })
    }

    pub fn compose(&self) -> char {
        let code =
            SYLLABLE_BASE + (self.initial * MEDIAL_COUNT + self.medial) * FINAL_COUNT + self.final_;
        // indices come from decompose or the liaison table and stay in range
        char::from_u32(code).unwrap_or('\u{FFFD}')
    }

    /// Compatibility jamo of this syllable, compound finals split in two
    pub fn jamo(&self) -> impl Iterator<Item = char> {
        [INITIALS[self.initial as usize], MEDIALS[self.medial as usize]]
            .into_iter()
            .chain(FINALS[self.final_ as usize].chars())
    }
}

pub fn is_hangul(c: char) -> bool {
    Syllable::decompose(c).is_some() || ('\u{3131}'..='\u{318E}').contains(&c)
}

/// Decompose text into one phoneme per compatibility jamo.
///
/// Characters that are not precomposed syllables pass through unchanged.
pub fn to_jamo(text: &str) -> Vec<String> {
    let mut phonemes = Vec::new();
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        match Syllable::decompose(c) {
            Some(syllable) => phonemes.extend(syllable.jamo().map(String::from)),
            None => phonemes.push(c.to_string()),
        }
    }
    phonemes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_compose() {
        let syllable = Syllable::decompose('한').unwrap();
        assert_eq!(
            syllable,
            Syllable {
                initial: 18,
                medial: 0,
                final_: 4
            }
        );
        assert_eq!(syllable.compose(), '한');
        assert!(Syllable::decompose('a').is_none());
    }

    #[test]
    fn test_to_jamo() {
        assert_eq!(to_jamo("아"), vec!["ㅇ", "ㅏ"]);
        assert_eq!(to_jamo("한국"), vec!["ㅎ", "ㅏ", "ㄴ", "ㄱ", "ㅜ", "ㄱ"]);
    }

    #[test]
    fn test_compound_final_split() {
        assert_eq!(to_jamo("닭"), vec!["ㄷ", "ㅏ", "ㄹ", "ㄱ"]);
        assert_eq!(to_jamo("값"), vec!["ㄱ", "ㅏ", "ㅂ", "ㅅ"]);
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(to_jamo("ㅋ A"), vec!["ㅋ", "A"]);
        assert!(is_hangul('ㅋ'));
        assert!(!is_hangul('A'));
    }
}
