//! Move request addressing modes.

use serde::Deserialize;

/// How [`Axis::request_move`](super::Axis::request_move) interprets its
/// argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum AddressingMode {
    /// The amount is a target coordinate.
    #[default]
    Absolute,
    /// The amount is added to the current destination.
    Relative,
}

impl AddressingMode {
    /// Mode for a boolean "absolute" flag.
    #[inline]
    pub const fn from_absolute(absolute: bool) -> Self {
        if absolute {
            AddressingMode::Absolute
        } else {
            AddressingMode::Relative
        }
    }

    /// Whether this is [`AddressingMode::Absolute`].
    #[inline]
    pub const fn is_absolute(self) -> bool {
        matches!(self, AddressingMode::Absolute)
    }

    /// Resolve a requested amount against the current destination.
    ///
    /// Computed in 64 bits so relative requests cannot overflow.
    #[inline]
    pub fn resolve(self, destination: i32, amount: i32) -> i64 {
        match self {
            AddressingMode::Absolute => i64::from(amount),
            AddressingMode::Relative => i64::from(destination) + i64::from(amount),
        }
    }
}
