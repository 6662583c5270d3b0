//! # axis-motion
//!
//! Position control for a single mechanical axis, such as a stepper-driven
//! robot joint.
//!
//! ## Features
//!
//! - **Time-gated stepping**: at most one unit of travel per tick, never
//!   faster than the configured step delay
//! - **Two-tier limits**: move requests are checked against soft limits;
//!   hard limits are kept for reporting and calibration
//! - **Absolute or relative addressing**: relative requests accumulate on the
//!   pending destination
//! - **Injected time**: pass a timestamp or any [`Clock`], so the axis is
//!   deterministic under test
//! - **no_std compatible**: the core never allocates
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use axis_motion::{AxisBuilder, Millis, StdClock};
//!
//! let clock = StdClock::new();
//! let mut base = AxisBuilder::new()
//!     .name("base")
//!     .pin(2)
//!     .hard_limits(0, 180)
//!     .soft_limits(10, 170)
//!     .park(90)
//!     .step_delay(Millis(15))
//!     .build()?;
//!
//! base.request_move(120)?;
//! while !base.is_settled() {
//!     if base.run(&clock) {
//!         pulse(base.last_step());
//!     }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and [`StdClock`]
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod axis;
pub mod clock;
pub mod config;
pub mod error;

// Re-exports for ergonomic API
pub use axis::{AddressingMode, Axis, AxisBuilder, AxisStatus, StepDirection};
pub use clock::Clock;
pub use config::{validate_config, AxisConfig, SystemConfig, TravelLimits};
pub use error::{AxisError, ConfigError, Error, Result};

#[cfg(feature = "std")]
pub use clock::StdClock;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::Millis;
