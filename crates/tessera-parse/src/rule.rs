//! Bounds rules for sequence arguments.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Requested inclusive-start, exclusive-end bounds on a sequence.
///
/// Requests are clamped against the actual sequence length rather than
/// rejected. A negative minimum becomes `0`, a maximum past the end becomes
/// the length, and a minimum past the clamped maximum collapses onto it,
/// leaving an empty range.
///
/// # Example
///
/// ```
/// use tessera_parse::MinMax;
///
/// let rule = MinMax::new(1, 3);
/// assert_eq!(rule.select(&["a", "b", "c", "d", "e"]), &["b", "c"]);
///
/// // Out-of-range requests are clamped
/// assert_eq!(MinMax::new(-4, 99).select(&[1, 2]), &[1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinMax {
    /// Requested start index.
    pub min: isize,
    /// Requested end index (exclusive).
    pub max: isize,
}

impl MinMax {
    /// Creates a rule for `[min, max)`.
    #[must_use]
    pub const fn new(min: isize, max: isize) -> Self {
        Self { min, max }
    }

    /// Keeps everything from `min` onwards.
    #[must_use]
    pub const fn at_least(min: isize) -> Self {
        Self::new(min, isize::MAX)
    }

    /// Keeps everything before `max`.
    #[must_use]
    pub const fn at_most(max: isize) -> Self {
        Self::new(0, max)
    }

    /// Clamps the requested bounds against a sequence of length `len`.
    #[must_use]
    pub fn clamp(&self, len: usize) -> Bounds {
        let end = clamp_index(self.max, len);
        let start = clamp_index(self.min, len).min(end);
        Bounds { start, end }
    }

    /// Returns the part of `items` the rule keeps.
    #[must_use]
    pub fn select<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.clamp(items.len()).range()]
    }
}

fn clamp_index(index: isize, len: usize) -> usize {
    usize::try_from(index).map_or(0, |i| i.min(len))
}

/// Effective bounds after clamping, always `start <= end <= len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// First kept index.
    pub start: usize,
    /// One past the last kept index.
    pub end: usize,
}

impl Bounds {
    /// Returns `true` if nothing is kept.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of kept elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the bounds as a range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_within_range() {
        let bounds = MinMax::new(1, 2).clamp(5);
        assert_eq!(bounds, Bounds { start: 1, end: 2 });
        assert_eq!(bounds.len(), 1);
    }

    #[test]
    fn test_clamp_max_past_end() {
        assert_eq!(MinMax::new(0, 10).clamp(3).end, 3);
    }

    #[test]
    fn test_clamp_negative_min() {
        assert_eq!(MinMax::new(-2, 2).clamp(3).start, 0);
    }

    #[test]
    fn test_clamp_negative_max() {
        let bounds = MinMax::new(0, -1).clamp(3);
        assert!(bounds.is_empty());
        assert_eq!(bounds.end, 0);
    }

    #[test]
    fn test_min_past_max_collapses() {
        let bounds = MinMax::new(4, 2).clamp(5);
        assert_eq!(bounds, Bounds { start: 2, end: 2 });
        assert!(bounds.is_empty());
    }

    #[test]
    fn test_min_past_len_collapses() {
        let bounds = MinMax::at_least(7).clamp(3);
        assert_eq!(bounds.range(), 3..3);
    }

    #[test]
    fn test_at_most() {
        assert_eq!(MinMax::at_most(2).select(&[1, 2, 3]), &[1, 2]);
    }

    #[test]
    fn test_select_empty_slice() {
        let items: [u8; 0] = [];
        assert!(MinMax::new(1, 2).select(&items).is_empty());
    }

    #[test]
    fn test_serde_shape() {
        let rule: MinMax = serde_json::from_str(r#"{"min":1,"max":3}"#).unwrap();
        assert_eq!(rule, MinMax::new(1, 3));
    }
}
