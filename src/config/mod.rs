//! Configuration module for axis-motion.
//!
//! Provides types for loading and validating axis configurations from TOML
//! files (with `std` feature) or pre-parsed data.

mod axis;
mod limits;
#[cfg(feature = "std")]
mod loader;
mod system;
pub mod units;
mod validation;

pub use axis::AxisConfig;
pub use limits::TravelLimits;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

pub use units::Millis;
