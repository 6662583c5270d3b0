//! Clock sources for axis timing.
//!
//! The axis never reads time on its own. Hosts either pass a [`Millis`]
//! straight to [`Axis::tick`](crate::Axis::tick) or hand a [`Clock`] to
//! [`Axis::run`](crate::Axis::run).

use crate::config::units::Millis;

/// Something that reports the current time on a wrapping millisecond counter.
pub trait Clock {
    /// Current reading. Must be monotonic modulo 2^32.
    fn now(&self) -> Millis;
}

impl<F> Clock for F
where
    F: Fn() -> Millis,
{
    fn now(&self) -> Millis {
        self()
    }
}

/// Milliseconds since creation, backed by the operating system.
///
/// The reading is truncated to `u32` and wraps after roughly 49.7 days,
/// the same as a microcontroller `millis()` counter.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    created_at: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Start a new clock at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self {
            created_at: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now(&self) -> Millis {
        Millis(self.created_at.elapsed().as_millis() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_closure_clock() {
        let ticks = Cell::new(0u32);
        let clock = || {
            ticks.set(ticks.get() + 10);
            Millis(ticks.get())
        };

        assert_eq!(clock.now(), Millis(10));
        assert_eq!(clock.now(), Millis(20));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_std_clock_is_monotonic() {
        let clock = StdClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
