//! Configuration validation.
//!
//! These checks run when a configuration is loaded. An [`Axis`](crate::Axis)
//! built by hand, or reconfigured through its setters, is never validated.

use crate::error::{ConfigError, Error, Result};

use super::{AxisConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Hard limits are a non-empty range (min < max)
/// - Soft limits are ordered (min <= max)
/// - No two axes share a pin
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for axis in config.axes.values() {
        validate_axis(axis)?;
    }

    let mut seen: heapless::Vec<u8, 8> = heapless::Vec::new();
    for axis in config.axes.values() {
        if seen.contains(&axis.pin) {
            return Err(Error::Config(ConfigError::DuplicatePin(axis.pin)));
        }
        // Capacity matches the axis map, so this cannot overflow.
        let _ = seen.push(axis.pin);
    }

    Ok(())
}

fn validate_axis(config: &AxisConfig) -> Result<()> {
    // Equal hard limits leave percent-of-travel undefined
    if config.hard_min >= config.hard_max {
        return Err(Error::Config(ConfigError::InvalidHardLimits {
            min: config.hard_min,
            max: config.hard_max,
        }));
    }

    if config.soft_min > config.soft_max {
        return Err(Error::Config(ConfigError::InvalidSoftLimits {
            min: config.soft_min,
            max: config.soft_max,
        }));
    }

    Ok(())
}
