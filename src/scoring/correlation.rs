//! Shift correlation between the known target and a shifted reference.
//!
//! For a shift `s`, the target position `j` is compared against reference
//! position `j + s` ([`ShiftDirection::Forward`]) or `j - s`
//! ([`ShiftDirection::Backward`]). Reference positions outside the sequence
//! are skipped. A single search routine serves both directions.

use crate::core::sequence::Alignment;

/// Which way the reference window is offset from the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    /// Target `j` against reference `j + shift`
    Forward,
    /// Target `j` against reference `j - shift`
    Backward,
}

impl ShiftDirection {
    /// Reference index paired with target index `j`, if inside `[0, len)`
    #[inline]
    #[must_use]
    pub fn reference_index(self, j: usize, shift: usize, len: usize) -> Option<usize> {
        match self {
            Self::Forward => j.checked_add(shift).filter(|&r| r < len),
            Self::Backward => j.checked_sub(shift),
        }
    }
}

/// Best shift found by [`best_shift`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftMatch {
    pub shift: usize,
    pub count: usize,
}

/// Count target positions in `[start, n)` that agree with the reference
/// offset by `shift` in `direction`. Unknown target positions never agree.
#[must_use]
pub fn correlation_at(
    alignment: &Alignment,
    start: usize,
    shift: usize,
    direction: ShiftDirection,
) -> usize {
    let reference = alignment.reference();
    let target = alignment.target();
    let len = alignment.len();

    (start..len)
        .filter(|&j| {
            let Some(symbol) = target.get(j) else {
                return false;
            };
            direction
                .reference_index(j, shift, len)
                .is_some_and(|r| reference[r] == symbol)
        })
        .count()
}

/// Maximize [`correlation_at`] over shifts `1..=max_shift`.
///
/// Ties go to the smallest shift. Returns `None` when `max_shift` is 0.
#[must_use]
pub fn best_shift(
    alignment: &Alignment,
    start: usize,
    max_shift: usize,
    direction: ShiftDirection,
) -> Option<ShiftMatch> {
    let mut best: Option<ShiftMatch> = None;
    for shift in 1..=max_shift {
        let count = correlation_at(alignment, start, shift, direction);
        if best.map_or(true, |b| count > b.count) {
            best = Some(ShiftMatch { shift, count });
        }
    }
    best
}

/// Best forward correlation count, 0 if no shift is allowed
#[must_use]
pub fn forward_correlation(alignment: &Alignment, max_shift: usize, start: usize) -> usize {
    best_shift(alignment, start, max_shift, ShiftDirection::Forward).map_or(0, |m| m.count)
}

/// Best backward correlation count, 0 if no shift is allowed
#[must_use]
pub fn backward_correlation(alignment: &Alignment, max_shift: usize, start: usize) -> usize {
    best_shift(alignment, start, max_shift, ShiftDirection::Backward).map_or(0, |m| m.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::case::Override;

    fn alignment(reference: &[u8], target: &str) -> Alignment {
        let overrides: Vec<Override> = target
            .bytes()
            .enumerate()
            .filter(|&(_, b)| b != b'?')
            .map(|(i, b)| Override::new(i + 1, b))
            .collect();
        Alignment::build(reference, &overrides).unwrap()
    }

    #[test]
    fn test_reference_index_bounds() {
        assert_eq!(ShiftDirection::Forward.reference_index(2, 2, 5), Some(4));
        assert_eq!(ShiftDirection::Forward.reference_index(3, 2, 5), None);
        assert_eq!(ShiftDirection::Backward.reference_index(2, 2, 5), Some(0));
        assert_eq!(ShiftDirection::Backward.reference_index(1, 2, 5), None);
    }

    #[test]
    fn test_forward_correlation() {
        // Target is the reference shifted left by one
        let a = alignment(b"abcde", "bcd??");
        assert_eq!(correlation_at(&a, 0, 1, ShiftDirection::Forward), 3);
        assert_eq!(correlation_at(&a, 1, 1, ShiftDirection::Forward), 2);
        assert_eq!(correlation_at(&a, 0, 2, ShiftDirection::Forward), 0);
        assert_eq!(
            best_shift(&a, 0, 2, ShiftDirection::Forward),
            Some(ShiftMatch { shift: 1, count: 3 })
        );
        assert_eq!(forward_correlation(&a, 2, 0), 3);
    }

    #[test]
    fn test_backward_correlation() {
        // Target is the reference shifted right by one
        let a = alignment(b"abcde", "?abcd");
        assert_eq!(correlation_at(&a, 1, 1, ShiftDirection::Backward), 4);
        assert_eq!(correlation_at(&a, 1, 2, ShiftDirection::Backward), 0);
        assert_eq!(backward_correlation(&a, 1, 1), 4);
        assert_eq!(backward_correlation(&a, 3, 2), 3);
    }

    #[test]
    fn test_larger_shift_wins() {
        let a = alignment(b"abcdef", "??abcd");
        assert_eq!(
            best_shift(&a, 2, 3, ShiftDirection::Backward),
            Some(ShiftMatch { shift: 2, count: 4 })
        );
    }

    #[test]
    fn test_ties_prefer_smallest_shift() {
        let a = alignment(b"aaaa", "aa??");
        assert_eq!(
            best_shift(&a, 0, 3, ShiftDirection::Forward),
            Some(ShiftMatch { shift: 1, count: 2 })
        );
    }

    #[test]
    fn test_zero_shift_bound() {
        let a = alignment(b"abc", "abc");
        assert_eq!(best_shift(&a, 0, 0, ShiftDirection::Forward), None);
        assert_eq!(forward_correlation(&a, 0, 0), 0);
        assert_eq!(backward_correlation(&a, 0, 0), 0);
    }

    #[test]
    fn test_start_past_end() {
        let a = alignment(b"abc", "abc");
        assert_eq!(correlation_at(&a, 7, 1, ShiftDirection::Backward), 0);
    }
}
