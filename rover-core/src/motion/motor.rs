//! Motor duty scaling and PWM period selection
//!
//! Speeds are percentages (0-100) at the public API and 10-bit duty values
//! (0-1023) at the PWM outputs. All motor lines share one PWM period, and
//! slow speeds need a longer period to keep enough torque, so the period is
//! picked from the duty being requested.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::intent::DriveDirection;

/// Maximum speed percentage
pub const MAX_SPEED: u8 = 100;

/// Full-scale duty value
pub const MAX_DUTY: u16 = 1023;

/// PWM period used below [`MEDIUM_DUTY_THRESHOLD`]
pub const SLOW_PERIOD_US: u32 = 60_000;

/// PWM period used between the two thresholds
pub const MEDIUM_PERIOD_US: u32 = 40_000;

/// PWM period used at and above [`FAST_DUTY_THRESHOLD`]
pub const FAST_PERIOD_US: u32 = 30_000;

/// Duty at which the medium period takes over
pub const MEDIUM_DUTY_THRESHOLD: u16 = 200;

/// Duty at which the fast period takes over
pub const FAST_DUTY_THRESHOLD: u16 = 300;

/// Clamp a requested speed into `0..=100`
pub fn clamp_speed(speed: i16) -> u8 {
    speed.clamp(0, MAX_SPEED as i16) as u8
}

/// Scale a speed percentage to a duty value (×10.23, truncated)
pub fn speed_to_duty(speed: u8) -> u16 {
    (speed.min(MAX_SPEED) as u32 * MAX_DUTY as u32 / MAX_SPEED as u32) as u16
}

/// PWM period for a duty value
pub fn period_for_duty(duty: u16) -> u32 {
    if duty < MEDIUM_DUTY_THRESHOLD {
        SLOW_PERIOD_US
    } else if duty < FAST_DUTY_THRESHOLD {
        MEDIUM_PERIOD_US
    } else {
        FAST_PERIOD_US
    }
}

/// Commanded state of one drive side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotorState {
    /// Direction of rotation
    pub direction: DriveDirection,
    /// Duty on the active line (0-1023)
    pub duty: u16,
}

impl MotorState {
    /// A side at rest
    pub const STOPPED: Self = Self {
        direction: DriveDirection::Forward,
        duty: 0,
    };

    /// State for a speed percentage in a direction
    pub fn from_speed(direction: DriveDirection, speed: u8) -> Self {
        Self {
            direction,
            duty: speed_to_duty(speed),
        }
    }

    /// Duties for the `(forward, reverse)` line pair
    ///
    /// Only one line of a pair is ever active; the other is held at 0.
    pub fn line_duties(&self) -> (u16, u16) {
        match self.direction {
            DriveDirection::Forward => (self.duty, 0),
            DriveDirection::Reverse => (0, self.duty),
        }
    }

    /// Whether this side is being driven
    pub fn is_moving(&self) -> bool {
        self.duty > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_speed() {
        assert_eq!(clamp_speed(-20), 0);
        assert_eq!(clamp_speed(0), 0);
        assert_eq!(clamp_speed(60), 60);
        assert_eq!(clamp_speed(250), 100);
    }

    #[test]
    fn test_speed_to_duty() {
        assert_eq!(speed_to_duty(0), 0);
        assert_eq!(speed_to_duty(50), 511);
        assert_eq!(speed_to_duty(100), 1023);
        assert_eq!(speed_to_duty(200), 1023);
    }

    #[test]
    fn test_period_tiers() {
        assert_eq!(period_for_duty(0), SLOW_PERIOD_US);
        assert_eq!(period_for_duty(199), SLOW_PERIOD_US);
        assert_eq!(period_for_duty(200), MEDIUM_PERIOD_US);
        assert_eq!(period_for_duty(299), MEDIUM_PERIOD_US);
        assert_eq!(period_for_duty(300), FAST_PERIOD_US);
        assert_eq!(period_for_duty(1023), FAST_PERIOD_US);

        // 19% lands in the slow tier, 20% in the medium one
        assert_eq!(period_for_duty(speed_to_duty(19)), SLOW_PERIOD_US);
        assert_eq!(period_for_duty(speed_to_duty(20)), MEDIUM_PERIOD_US);
    }

    #[test]
    fn test_line_duties() {
        let fwd = MotorState::from_speed(DriveDirection::Forward, 100);
        assert_eq!(fwd.line_duties(), (1023, 0));

        let rev = MotorState::from_speed(DriveDirection::Reverse, 50);
        assert_eq!(rev.line_duties(), (0, 511));

        assert_eq!(MotorState::STOPPED.line_duties(), (0, 0));
        assert!(!MotorState::STOPPED.is_moving());
    }
}
