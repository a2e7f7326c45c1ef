//! Word-length distribution
//!
//! Spreads the phonemes produced for one word over the units (characters,
//! subword tokens, tagger tokens) that the word spans upstream.

/// Distribute `phoneme_count` phonemes over `unit_count` units.
///
/// Each phoneme goes to the currently smallest bucket, lowest index first,
/// so buckets never differ by more than one and earlier units get the extra
/// phonemes. Every backend uses this one function.
///
/// # Examples
/// ```
/// use g2p_frontend_core::distribute;
/// assert_eq!(distribute(5, 3), vec![2, 2, 1]);
/// assert_eq!(distribute(1, 3), vec![1, 0, 0]);
/// ```
pub fn distribute(phoneme_count: usize, unit_count: usize) -> Vec<usize> {
    assert!(unit_count > 0, "cannot distribute over zero units");

    let mut buckets = vec![0usize; unit_count];
    for _ in 0..phoneme_count {
        let mut min_index = 0;
        for (i, &count) in buckets.iter().enumerate().skip(1) {
            if count < buckets[min_index] {
                min_index = i;
            }
        }
        buckets[min_index] += 1;
    }
    buckets
}
