//! Per-tick step direction.

/// Direction of the step taken on the most recent tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepDirection {
    /// Stepped toward lower positions.
    Backward,
    /// No step on the last tick.
    #[default]
    Hold,
    /// Stepped toward higher positions.
    Forward,
}

impl StepDirection {
    /// Direction needed to go from `current` toward `destination`.
    #[inline]
    pub fn toward(current: i32, destination: i32) -> Self {
        match destination.cmp(&current) {
            core::cmp::Ordering::Greater => StepDirection::Forward,
            core::cmp::Ordering::Less => StepDirection::Backward,
            core::cmp::Ordering::Equal => StepDirection::Hold,
        }
    }

    /// Signed unit: -1, 0 or +1.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            StepDirection::Backward => -1,
            StepDirection::Hold => 0,
            StepDirection::Forward => 1,
        }
    }
}
