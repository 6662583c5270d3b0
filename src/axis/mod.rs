//! Axis module for axis-motion.
//!
//! Provides the time-gated axis state machine and its supporting types.

mod builder;
mod direction;
mod machine;
mod mode;
mod status;

pub use builder::AxisBuilder;
pub use direction::StepDirection;
pub use machine::Axis;
pub use mode::AddressingMode;
pub use status::AxisStatus;
