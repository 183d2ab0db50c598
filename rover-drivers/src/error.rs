//! Driver error type

use rover_hal::{I2cError, LedError, PwmError};

/// A peripheral access failed
///
/// Drivers never retry or swallow these; they propagate to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralIoError {
    /// I2C transfer to the servo controller or EEPROM failed
    I2c(I2cError),
    /// Motor PWM output rejected a setting
    Pwm(PwmError),
    /// LED frame could not be sent
    Led(LedError),
}

impl From<I2cError> for PeripheralIoError {
    fn from(e: I2cError) -> Self {
        PeripheralIoError::I2c(e)
    }
}

impl From<PwmError> for PeripheralIoError {
    fn from(e: PwmError) -> Self {
        PeripheralIoError::Pwm(e)
    }
}

impl From<LedError> for PeripheralIoError {
    fn from(e: LedError) -> Self {
        PeripheralIoError::Led(e)
    }
}
