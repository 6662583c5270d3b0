//! Unit types for axis timing.
//!
//! Timestamps and step delays share one wrapping millisecond unit so the
//! two can never be mixed up with raw position values.

use core::ops::Add;

use serde::Deserialize;

/// Milliseconds on a free-running, wrapping `u32` counter.
///
/// Used both as a timestamp (a reading of the host clock) and as a duration
/// (the step delay). Differences between two readings are taken with
/// [`Millis::elapsed_since`], which stays correct across counter overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Millis(pub u32);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Time elapsed from `earlier` to `self`, modulo 2^32.
    #[inline]
    pub const fn elapsed_since(self, earlier: Millis) -> Millis {
        Millis(self.0.wrapping_sub(earlier.0))
    }
}

impl Add for Millis {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_since() {
        assert_eq!(Millis(150).elapsed_since(Millis(100)), Millis(50));
        assert_eq!(Millis(100).elapsed_since(Millis(100)), Millis::ZERO);
    }

    #[test]
    fn test_elapsed_across_wraparound() {
        // 10 ms before overflow to 20 ms after it
        let before = Millis(u32::MAX - 9);
        let after = Millis(20);
        assert_eq!(after.elapsed_since(before), Millis(30));
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(Millis(u32::MAX) + Millis(2), Millis(1));
    }
}
