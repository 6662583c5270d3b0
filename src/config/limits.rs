//! Travel limit types.

use serde::Deserialize;

/// An inclusive range of axis positions.
///
/// Used for both the hard (physical) limits and the soft (operating) limits.
/// Nothing forces `min <= max` or nests the soft range inside the hard one;
/// those relationships are checked by
/// [`validate_config`](super::validate_config) when loading a configuration,
/// and otherwise left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TravelLimits {
    /// Lowest allowed position.
    pub min: i32,
    /// Highest allowed position.
    pub max: i32,
}

impl TravelLimits {
    /// Create new travel limits.
    #[inline]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Check if a position is within limits (inclusive).
    #[inline]
    pub fn contains(&self, position: i64) -> bool {
        position >= i64::from(self.min) && position <= i64::from(self.max)
    }

    /// Check if `other` lies entirely inside these limits.
    pub fn encloses(&self, other: &TravelLimits) -> bool {
        other.min >= self.min && other.max <= self.max
    }

    /// Width of the range, `max - min`, without overflow.
    #[inline]
    pub fn span(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let limits = TravelLimits::new(10, 990);

        assert!(limits.contains(10));
        assert!(limits.contains(500));
        assert!(limits.contains(990));
        assert!(!limits.contains(9));
        assert!(!limits.contains(991));
    }

    #[test]
    fn test_contains_beyond_i32() {
        let limits = TravelLimits::new(i32::MIN, i32::MAX);

        assert!(limits.contains(0));
        assert!(!limits.contains(i64::from(i32::MAX) + 1));
        assert!(!limits.contains(i64::from(i32::MIN) - 1));
    }

    #[test]
    fn test_encloses() {
        let hard = TravelLimits::new(0, 1000);

        assert!(hard.encloses(&TravelLimits::new(10, 990)));
        assert!(hard.encloses(&hard));
        assert!(!hard.encloses(&TravelLimits::new(-1, 990)));
        assert!(!hard.encloses(&TravelLimits::new(10, 1001)));
    }

    #[test]
    fn test_span() {
        assert_eq!(TravelLimits::new(0, 1000).span(), 1000);
        assert_eq!(TravelLimits::new(5, 5).span(), 0);
        assert_eq!(TravelLimits::new(i32::MIN, i32::MAX).span(), u32::MAX as i64);
    }
}
