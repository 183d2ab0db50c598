//! Servo driver trait

use crate::motion::WheelAngles;
use crate::servo::{ServoChannel, ServoGroup};

/// A bank of positional servos addressed by channel
///
/// Implementations apply their own trim offsets and clamp the angle to
/// the mechanical range; callers pass the nominal angle in degrees.
pub trait ServoDriver {
    /// Error raised by the underlying bus
    type Error;

    /// Move one channel to `angle` degrees (-90..=90)
    fn set_angle(&mut self, channel: ServoChannel, angle: i16) -> Result<(), Self::Error>;

    /// Move every servo in a group to 0°
    fn zero(&mut self, group: ServoGroup) -> Result<(), Self::Error> {
        for channel in group.channels() {
            self.set_angle(channel, 0)?;
        }
        Ok(())
    }

    /// Write a full steering stance
    fn set_wheels(&mut self, angles: &WheelAngles) -> Result<(), Self::Error> {
        for (servo, angle) in angles.assignments() {
            self.set_angle(servo.channel(), angle)?;
        }
        Ok(())
    }
}

impl<T: ServoDriver + ?Sized> ServoDriver for &mut T {
    type Error = T::Error;

    fn set_angle(&mut self, channel: ServoChannel, angle: i16) -> Result<(), Self::Error> {
        (**self).set_angle(channel, angle)
    }
}
