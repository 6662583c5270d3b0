//! The axis state machine.
//!
//! An axis is either idle (`current == destination`) or moving. Each tick
//! that falls at least one step delay after the previous eligible tick moves
//! the axis a single unit toward its destination.

use crate::clock::Clock;
use crate::config::units::Millis;
use crate::config::TravelLimits;
use crate::error::{AxisError, Result};

use super::direction::StepDirection;
use super::mode::AddressingMode;
use super::status::AxisStatus;

/// A single time-gated axis with hard and soft travel limits.
///
/// The four limit values are independent fields. Setters never check them
/// against each other or against the current position; keeping them
/// consistent is the caller's job.
///
/// Not internally synchronized. Share across threads only behind a lock.
#[derive(Debug, Clone)]
pub struct Axis {
    /// Axis name for diagnostics.
    name: heapless::String<32>,

    /// Electronic pin or channel number.
    pin: u8,

    /// Physical travel limits.
    hard: TravelLimits,

    /// Range accepted by move requests.
    soft: TravelLimits,

    /// Rest position.
    park: i32,

    /// Present position.
    current: i32,

    /// Position being moved toward.
    destination: i32,

    /// Direction of the step taken on the last tick.
    last_step: StepDirection,

    /// Minimum time between steps.
    step_delay: Millis,

    /// Time of the last eligible tick.
    last_step_time: Millis,

    /// How move requests are interpreted.
    mode: AddressingMode,
}

impl Axis {
    /// Create an idle axis at its park position.
    ///
    /// `now` starts the first step delay window. No ordering between the
    /// limit values is checked.
    pub fn new(
        name: heapless::String<32>,
        pin: u8,
        hard: TravelLimits,
        soft: TravelLimits,
        park: i32,
        step_delay: Millis,
        now: Millis,
    ) -> Self {
        Self {
            name,
            pin,
            hard,
            soft,
            park,
            current: park,
            destination: park,
            last_step: StepDirection::Hold,
            step_delay,
            last_step_time: now,
            mode: AddressingMode::Absolute,
        }
    }

    /// Advance the axis by at most one unit.
    ///
    /// Returns `false` if less than the step delay has passed since the last
    /// eligible tick. Otherwise takes one step toward the destination (if
    /// not already there), restarts the delay window at `now`, and returns
    /// `true`. The window restarts even when the axis is already settled.
    pub fn tick(&mut self, now: Millis) -> bool {
        self.last_step = StepDirection::Hold;

        if now.elapsed_since(self.last_step_time) < self.step_delay {
            return false;
        }

        let direction = StepDirection::toward(self.current, self.destination);
        self.current += direction.sign();
        self.last_step = direction;
        self.last_step_time = now;

        #[cfg(feature = "defmt")]
        {
            if direction != StepDirection::Hold {
                defmt::trace!("axis pin {}: step {} -> {}", self.pin, direction, self.current);
            }
        }

        true
    }

    /// [`tick`](Self::tick) with the time read from `clock`.
    #[inline]
    pub fn run<C: Clock + ?Sized>(&mut self, clock: &C) -> bool {
        self.tick(clock.now())
    }

    /// Set a new destination.
    ///
    /// In [`AddressingMode::Absolute`] `amount` is the target. In
    /// [`AddressingMode::Relative`] it is added to the current destination,
    /// so requests issued mid-move accumulate.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::OutOfSoftRange`] if the resolved target lies
    /// outside the soft limits. The destination is left untouched; targets
    /// are never clamped, and hard limits are not consulted.
    pub fn request_move(&mut self, amount: i32) -> Result<()> {
        let target = self.mode.resolve(self.destination, amount);

        if !self.soft.contains(target) {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "axis pin {}: rejected {} outside [{}, {}]",
                self.pin,
                target,
                self.soft.min,
                self.soft.max
            );
            return Err(AxisError::OutOfSoftRange {
                requested: target,
                min: self.soft.min,
                max: self.soft.max,
            }
            .into());
        }

        // Inside soft limits, so it fits in i32
        self.destination = target as i32;
        Ok(())
    }

    /// Declare the present location to be position zero.
    ///
    /// Clears both current and destination positions. The step timer and
    /// addressing mode are kept.
    pub fn reset_position(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("axis pin {}: position reset from {}", self.pin, self.current);

        self.current = 0;
        self.destination = 0;
    }

    /// True when the axis has reached its destination.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.current == self.destination
    }

    /// Change how future move requests are interpreted.
    #[inline]
    pub fn set_addressing_mode(&mut self, mode: AddressingMode) {
        self.mode = mode;
    }

    /// Switch to absolute (`true`) or relative (`false`) addressing.
    ///
    /// Returns the flag that was set.
    #[inline]
    pub fn set_absolute(&mut self, absolute: bool) -> bool {
        self.mode = AddressingMode::from_absolute(absolute);
        absolute
    }

    /// Current addressing mode.
    #[inline]
    pub fn addressing_mode(&self) -> AddressingMode {
        self.mode
    }

    /// Whether move requests are absolute.
    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.mode.is_absolute()
    }

    /// Snapshot for diagnostics.
    pub fn status(&self) -> AxisStatus {
        AxisStatus {
            name: self.name.clone(),
            pin: self.pin,
            timer: self.last_step_time,
            step_delay: self.step_delay,
            current: self.current,
            destination: self.destination,
            park: self.park,
            hard: self.hard,
            soft: self.soft,
        }
    }

    /// Axis name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Electronic pin or channel number.
    #[inline]
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Present position.
    #[inline]
    pub fn position(&self) -> i32 {
        self.current
    }

    /// Position being moved toward.
    #[inline]
    pub fn destination(&self) -> i32 {
        self.destination
    }

    /// Direction stepped on the last tick, [`StepDirection::Hold`] if none.
    #[inline]
    pub fn last_step(&self) -> StepDirection {
        self.last_step
    }

    /// Time of the last eligible tick.
    #[inline]
    pub fn last_step_time(&self) -> Millis {
        self.last_step_time
    }

    /// Hard limits.
    #[inline]
    pub fn hard_limits(&self) -> TravelLimits {
        self.hard
    }

    /// Soft limits.
    #[inline]
    pub fn soft_limits(&self) -> TravelLimits {
        self.soft
    }

    /// Hard minimum.
    #[inline]
    pub fn hard_min(&self) -> i32 {
        self.hard.min
    }

    /// Set the hard minimum.
    #[inline]
    pub fn set_hard_min(&mut self, position: i32) {
        self.hard.min = position;
    }

    /// Hard maximum.
    #[inline]
    pub fn hard_max(&self) -> i32 {
        self.hard.max
    }

    /// Set the hard maximum.
    #[inline]
    pub fn set_hard_max(&mut self, position: i32) {
        self.hard.max = position;
    }

    /// Soft minimum.
    #[inline]
    pub fn soft_min(&self) -> i32 {
        self.soft.min
    }

    /// Set the soft minimum.
    #[inline]
    pub fn set_soft_min(&mut self, position: i32) {
        self.soft.min = position;
    }

    /// Soft maximum.
    #[inline]
    pub fn soft_max(&self) -> i32 {
        self.soft.max
    }

    /// Set the soft maximum.
    #[inline]
    pub fn set_soft_max(&mut self, position: i32) {
        self.soft.max = position;
    }

    /// Park position.
    #[inline]
    pub fn park(&self) -> i32 {
        self.park
    }

    /// Set the park position. Does not move the axis.
    #[inline]
    pub fn set_park(&mut self, position: i32) {
        self.park = position;
    }

    /// Minimum time between steps.
    #[inline]
    pub fn step_delay(&self) -> Millis {
        self.step_delay
    }

    /// Set the minimum time between steps.
    #[inline]
    pub fn set_step_delay(&mut self, delay: Millis) {
        self.step_delay = delay;
    }
}
