//! PWM output abstractions
//!
//! Motor speed lines are PWM outputs that share a single period: changing
//! the period for one line changes it for all of them. The trait models the
//! whole bank so that constraint is visible at the type level.

/// Full-scale duty value (10-bit, matching the analog write range)
pub const MAX_DUTY: u16 = 1023;

/// Errors from PWM operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmError {
    /// Channel index is not part of this bank
    InvalidChannel,
    /// Requested period cannot be produced by the timer
    PeriodOutOfRange,
}

/// A bank of PWM outputs sharing one period
pub trait PwmBank {
    /// Number of channels in the bank
    fn channel_count(&self) -> usize;

    /// Set the duty of one channel (0..=[`MAX_DUTY`])
    ///
    /// Values above [`MAX_DUTY`] are treated as full on.
    fn set_duty(&mut self, channel: usize, duty: u16) -> Result<(), PwmError>;

    /// Drive one channel as a plain digital level (no modulation)
    fn set_level(&mut self, channel: usize, high: bool) -> Result<(), PwmError>;

    /// Set the PWM period in microseconds for every channel of the bank
    fn set_period_us(&mut self, period_us: u32) -> Result<(), PwmError>;
}
