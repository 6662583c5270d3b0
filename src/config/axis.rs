//! Axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::axis::AddressingMode;

use super::limits::TravelLimits;
use super::units::Millis;

/// Complete axis configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Electronic pin or channel number driving the axis.
    pub pin: u8,

    /// Physical travel minimum.
    pub hard_min: i32,

    /// Physical travel maximum.
    pub hard_max: i32,

    /// Lowest position a move request may target.
    pub soft_min: i32,

    /// Highest position a move request may target.
    pub soft_max: i32,

    /// Rest position; the axis starts here.
    #[serde(default)]
    pub park: i32,

    /// Minimum time between two steps.
    #[serde(rename = "step_delay_ms")]
    pub step_delay: Millis,

    /// Initial addressing mode.
    #[serde(default)]
    pub mode: AddressingMode,
}

impl AxisConfig {
    /// Hard limits as a range.
    pub fn hard_limits(&self) -> TravelLimits {
        TravelLimits::new(self.hard_min, self.hard_max)
    }

    /// Soft limits as a range.
    pub fn soft_limits(&self) -> TravelLimits {
        TravelLimits::new(self.soft_min, self.soft_max)
    }
}
