//! Diagnostic snapshot of an axis.

use core::fmt;

use crate::config::units::Millis;
use crate::config::TravelLimits;

/// Point-in-time copy of everything an operator may want to see about an
/// axis. Produced by [`Axis::status`](super::Axis::status); formatting it
/// with `{}` gives a multi-line report for logs or a serial console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisStatus {
    /// Axis name.
    pub name: heapless::String<32>,
    /// Electronic pin or channel number.
    pub pin: u8,
    /// Timestamp of the last eligible tick.
    pub timer: Millis,
    /// Minimum time between steps.
    pub step_delay: Millis,
    /// Current position.
    pub current: i32,
    /// Destination position.
    pub destination: i32,
    /// Park position.
    pub park: i32,
    /// Hard limits.
    pub hard: TravelLimits,
    /// Soft limits.
    pub soft: TravelLimits,
}

impl AxisStatus {
    /// Position as a percentage of hard travel.
    ///
    /// `100 - (span - current) * 100 / span` with `span = hard_max - hard_min`,
    /// in truncating integer arithmetic. Note this measures `current` from
    /// zero, not from `hard_min`. Returns `None` when the hard limits are
    /// equal and the ratio is undefined.
    pub fn percent(&self) -> Option<i64> {
        let span = self.hard.span();
        if span == 0 {
            return None;
        }
        Some(100 - (span - i64::from(self.current)) * 100 / span)
    }
}

impl fmt::Display for AxisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Axis: {}", self.name)?;
        writeln!(f, "  Electronic pin: {}", self.pin)?;
        writeln!(f, "  Timer: {}", self.timer.value())?;
        writeln!(f, "  Move delay: {}", self.step_delay.value())?;
        writeln!(f, "  Positions:")?;
        writeln!(f, "    Current: {}", self.current)?;
        writeln!(f, "    Destination: {}", self.destination)?;
        match self.percent() {
            Some(percent) => writeln!(f, "    Percent: {}%", percent)?,
            None => writeln!(f, "    Percent: undefined")?,
        }
        writeln!(f, "    Park: {}", self.park)?;
        writeln!(f, "    Hard minimum: {}", self.hard.min)?;
        writeln!(f, "    Soft minimum: {}", self.soft.min)?;
        writeln!(f, "    Hard maximum: {}", self.hard.max)?;
        write!(f, "    Soft maximum: {}", self.soft.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(hard: TravelLimits, current: i32) -> AxisStatus {
        AxisStatus {
            name: heapless::String::try_from("wrist").unwrap(),
            pin: 9,
            timer: Millis(1234),
            step_delay: Millis(50),
            current,
            destination: 600,
            park: 500,
            hard,
            soft: TravelLimits::new(10, 990),
        }
    }

    #[test]
    fn test_percent() {
        let hard = TravelLimits::new(0, 1000);

        assert_eq!(status(hard, 0).percent(), Some(0));
        assert_eq!(status(hard, 500).percent(), Some(50));
        assert_eq!(status(hard, 1000).percent(), Some(100));
        // (1000 - 333) * 100 / 1000 = 66 after truncation
        assert_eq!(status(hard, 333).percent(), Some(34));
    }

    #[test]
    fn test_percent_undefined_for_equal_hard_limits() {
        assert_eq!(status(TravelLimits::new(7, 7), 7).percent(), None);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display_contains_every_field() {
        let text = std::format!("{}", status(TravelLimits::new(0, 1000), 500));

        for line in [
            "Axis: wrist",
            "Electronic pin: 9",
            "Timer: 1234",
            "Move delay: 50",
            "Current: 500",
            "Destination: 600",
            "Percent: 50%",
            "Park: 500",
            "Hard minimum: 0",
            "Soft minimum: 10",
            "Hard maximum: 1000",
            "Soft maximum: 990",
        ] {
            assert!(text.contains(line), "missing '{}' in:\n{}", line, text);
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display_undefined_percent() {
        let text = std::format!("{}", status(TravelLimits::new(3, 3), 3));
        assert!(text.contains("Percent: undefined"));
    }
}
