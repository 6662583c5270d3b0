//! Builder pattern for Axis.

use crate::config::units::Millis;
use crate::config::{AxisConfig, SystemConfig, TravelLimits};
use crate::error::{ConfigError, Error, Result};

use super::machine::Axis;
use super::mode::AddressingMode;

/// Builder for creating Axis instances.
#[derive(Debug, Clone, Default)]
pub struct AxisBuilder {
    name: Option<heapless::String<32>>,
    pin: u8,
    hard: Option<TravelLimits>,
    soft: Option<TravelLimits>,
    park: i32,
    step_delay: Option<Millis>,
    mode: AddressingMode,
    started_at: Millis,
}

impl AxisBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the axis name.
    ///
    /// A name longer than 32 bytes is dropped, and the axis is built as `"axis"`.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the electronic pin or channel number.
    pub fn pin(mut self, pin: u8) -> Self {
        self.pin = pin;
        self
    }

    /// Set the hard (physical) limits.
    pub fn hard_limits(mut self, min: i32, max: i32) -> Self {
        self.hard = Some(TravelLimits::new(min, max));
        self
    }

    /// Set the soft (operating) limits.
    pub fn soft_limits(mut self, min: i32, max: i32) -> Self {
        self.soft = Some(TravelLimits::new(min, max));
        self
    }

    /// Set the park position.
    pub fn park(mut self, position: i32) -> Self {
        self.park = position;
        self
    }

    /// Set the minimum time between steps.
    pub fn step_delay(mut self, delay: Millis) -> Self {
        self.step_delay = Some(delay);
        self
    }

    /// Set the initial addressing mode.
    pub fn mode(mut self, mode: AddressingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the clock reading that opens the first step delay window.
    pub fn started_at(mut self, now: Millis) -> Self {
        self.started_at = now;
        self
    }

    /// Configure from an AxisConfig.
    pub fn from_axis_config(mut self, config: &AxisConfig) -> Self {
        self.name = Some(config.name.clone());
        self.pin = config.pin;
        self.hard = Some(config.hard_limits());
        self.soft = Some(config.soft_limits());
        self.park = config.park;
        self.step_delay = Some(config.step_delay);
        self.mode = config.mode;
        self
    }

    /// Configure from SystemConfig by axis key.
    pub fn from_config(self, config: &SystemConfig, key: &str) -> Result<Self> {
        let axis_config = config.axis(key).ok_or_else(|| {
            Error::Config(ConfigError::AxisNotFound(
                heapless::String::try_from(key).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_axis_config(axis_config))
    }

    /// Build the Axis.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if hard limits, soft limits or
    /// step delay were never set.
    pub fn build(self) -> Result<Axis> {
        let hard = self.hard.ok_or(ConfigError::MissingField("hard_limits"))?;
        let soft = self.soft.ok_or(ConfigError::MissingField("soft_limits"))?;
        let step_delay = self.step_delay.ok_or(ConfigError::MissingField("step_delay"))?;

        let name = match self.name {
            Some(name) => name,
            None => heapless::String::try_from("axis").unwrap_or_default(),
        };

        let mut axis = Axis::new(
            name,
            self.pin,
            hard,
            soft,
            self.park,
            step_delay,
            self.started_at,
        );
        axis.set_addressing_mode(self.mode);

        Ok(axis)
    }
}
