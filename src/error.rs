//! Error types for axis-motion library.
//!
//! Provides unified error handling across configuration and axis control.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all axis-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Axis operation error
    Axis(AxisError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Axis name not found in configuration
    AxisNotFound(heapless::String<32>),
    /// A required builder field was never set
    MissingField(&'static str),
    /// Invalid hard limits (min must be < max)
    InvalidHardLimits {
        /// Minimum limit value
        min: i32,
        /// Maximum limit value
        max: i32,
    },
    /// Invalid soft limits (min must be <= max)
    InvalidSoftLimits {
        /// Minimum limit value
        min: i32,
        /// Maximum limit value
        max: i32,
    },
    /// Two axes are wired to the same pin
    DuplicatePin(u8),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Axis operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisError {
    /// Requested position falls outside the soft limits; nothing was changed.
    OutOfSoftRange {
        /// Resolved target position
        requested: i64,
        /// Soft minimum at the time of the request
        min: i32,
        /// Soft maximum at the time of the request
        max: i32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Axis(e) => write!(f, "Axis error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::AxisNotFound(name) => write!(f, "Axis '{}' not found", name),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::InvalidHardLimits { min, max } => {
                write!(f, "Invalid hard limits: min ({}) must be < max ({})", min, max)
            }
            ConfigError::InvalidSoftLimits { min, max } => {
                write!(f, "Invalid soft limits: min ({}) must be <= max ({})", min, max)
            }
            ConfigError::DuplicatePin(pin) => write!(f, "Pin {} is used by more than one axis", pin),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisError::OutOfSoftRange { requested, min, max } => {
                write!(f, "Position {} outside soft limits [{}, {}]", requested, min, max)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<AxisError> for Error {
    fn from(e: AxisError) -> Self {
        Error::Axis(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for AxisError {}
