//! Drive motor trait
//!
//! The rover has one motor (or motor pair) per side, each behind an
//! H-bridge with a forward and a reverse input.

use crate::motion::{DriveDirection, MotorSide, StopMode};

/// Speed-controlled drive motors
pub trait MotorDriver {
    /// Error raised by the PWM hardware
    type Error;

    /// Drive the selected side(s) at `speed` percent (0-100)
    ///
    /// Values above 100 are treated as 100.
    fn drive(
        &mut self,
        side: MotorSide,
        direction: DriveDirection,
        speed: u8,
    ) -> Result<(), Self::Error>;

    /// Bring every motor to rest
    fn stop(&mut self, mode: StopMode) -> Result<(), Self::Error>;
}

impl<T: MotorDriver + ?Sized> MotorDriver for &mut T {
    type Error = T::Error;

    fn drive(
        &mut self,
        side: MotorSide,
        direction: DriveDirection,
        speed: u8,
    ) -> Result<(), Self::Error> {
        (**self).drive(side, direction, speed)
    }

    fn stop(&mut self, mode: StopMode) -> Result<(), Self::Error> {
        (**self).stop(mode)
    }
}
