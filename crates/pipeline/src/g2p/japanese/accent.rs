//! Pitch accent assignment
//!
//! Words chained to their predecessor (`chain_flag == 1`) continue its
//! accent phrase. Each phrase takes the accent nucleus of its first word:
//! pitch is high up to the nucleus and falls after it. Punctuation and
//! unreadable words end the phrase and carry tone 0.

use super::kana::Mora;

/// One analyzed word as seen by the accent pass
#[derive(Debug, Clone)]
pub struct AccentUnit {
    pub moras: Vec<Mora>,
    /// Accent nucleus, 0 for flat
    pub acc: u32,
    pub chain_flag: i32,
    /// Punctuation or an unreadable span
    pub boundary: bool,
}

impl AccentUnit {
    pub fn word(moras: Vec<Mora>, acc: u32, chain_flag: i32) -> Self {
        Self {
            moras,
            acc,
            chain_flag,
            boundary: false,
        }
    }

    pub fn boundary(moras: Vec<Mora>) -> Self {
        Self {
            moras,
            acc: 0,
            chain_flag: -1,
            boundary: true,
        }
    }
}

/// High (1) or low (0) pitch of the mora at `index` in a phrase accented at `acc`
pub fn mora_tone(index: usize, acc: u32, keihan: bool) -> u8 {
    let acc = acc as usize;
    match (acc, index) {
        (1, 0) => 1,
        (1, _) => 0,
        (_, 0) => u8::from(keihan),
        (0, _) => 1,
        (_, i) if i < acc => 1,
        _ => 0,
    }
}

/// Tones for every phoneme of every unit, shaped like the input
pub fn assign_tones(units: &[AccentUnit], keihan: bool) -> Vec<Vec<u8>> {
    let mut tones = Vec::with_capacity(units.len());
    let mut phrase_acc = 0u32;
    let mut mora_index = 0usize;
    let mut after_boundary = true;

    for unit in units {
        if unit.boundary {
            tones.push(vec![0; unit.moras.iter().map(Vec::len).sum()]);
            after_boundary = true;
            continue;
        }

        if after_boundary || unit.chain_flag != 1 {
            phrase_acc = unit.acc;
            mora_index = 0;
        }
        after_boundary = false;

        let mut unit_tones = Vec::new();
        for mora in &unit.moras {
            let tone = mora_tone(mora_index, phrase_acc, keihan);
            unit_tones.extend(std::iter::repeat(tone).take(mora.len()));
            mora_index += 1;
        }
        tones.push(unit_tones);
    }

    tones
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::g2p::japanese::kana::to_moras;

    fn unit(reading: &str, acc: u32, chain_flag: i32) -> AccentUnit {
        AccentUnit::word(to_moras(reading, None, true).unwrap(), acc, chain_flag)
    }

    #[test]
    fn test_mora_tone_patterns() {
        // heiban: low then high
        let flat: Vec<u8> = (0..4).map(|i| mora_tone(i, 0, false)).collect();
        assert_eq!(flat, vec![0, 1, 1, 1]);
        // atamadaka: high then low
        let head: Vec<u8> = (0..4).map(|i| mora_tone(i, 1, false)).collect();
        assert_eq!(head, vec![1, 0, 0, 0]);
        // nakadaka on the third mora
        let mid: Vec<u8> = (0..5).map(|i| mora_tone(i, 3, false)).collect();
        assert_eq!(mid, vec![0, 1, 1, 0, 0]);
    }

    #[test]
    fn test_keihan_starts_high() {
        assert_eq!(mora_tone(0, 0, true), 1);
        assert_eq!(mora_tone(0, 3, true), 1);
        assert_eq!(mora_tone(3, 3, true), 0);
    }

    #[test]
    fn test_particle_continues_phrase() {
        let units = vec![unit("キョウ", 1, -1), unit("ワ", 0, 1)];
        let tones = assign_tones(&units, false);
        assert_eq!(tones, vec![vec![1, 1, 0], vec![0, 0]]);
    }

    #[test]
    fn test_new_phrase_resets() {
        let units = vec![unit("サクラ", 0, -1), unit("ガ", 0, 1), unit("サク", 0, -1)];
        let tones = assign_tones(&units, false);
        assert_eq!(tones[0], vec![0, 0, 1, 1, 1, 1]);
        assert_eq!(tones[1], vec![1, 1]);
        assert_eq!(tones[2], vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_boundary_breaks_chain() {
        let units = vec![
            unit("ネ", 1, -1),
            AccentUnit::boundary(vec![vec![","]]),
            unit("ネ", 1, 1),
        ];
        let tones = assign_tones(&units, false);
        assert_eq!(tones, vec![vec![1, 1], vec![0], vec![1, 1]]);
    }
}
