//! Motion coordinator
//!
//! Translates steer/spin/move intents into servo angles and motor outputs.
//! The coordinator holds no state of its own beyond the two drivers; every
//! call derives the actuator commands fresh from its arguments.

use embedded_hal::delay::DelayNs;

use super::intent::{DriveDirection, MotionIntent, MotorSide, StopMode, TurnDirection};
use super::motor::clamp_speed;
use super::stance::WheelAngles;
use crate::servo::ServoGroup;
use crate::traits::{MotorDriver, ServoDriver};

/// Coordinates the steering servos and drive motors
///
/// Both drivers must share one error type so that a failing servo write and
/// a failing motor write surface the same way to the caller.
pub struct MotionCoordinator<S, M> {
    servos: S,
    motors: M,
}

impl<S, M, E> MotionCoordinator<S, M>
where
    S: ServoDriver<Error = E>,
    M: MotorDriver<Error = E>,
{
    /// Create a coordinator over a servo bank and motor pair
    pub fn new(servos: S, motors: M) -> Self {
        Self { servos, motors }
    }

    /// Servo driver, for direct channel access (mast, calibration)
    pub fn servos(&mut self) -> &mut S {
        &mut self.servos
    }

    /// Motor driver
    pub fn motors(&mut self) -> &mut M {
        &mut self.motors
    }

    /// Give the drivers back
    pub fn release(self) -> (S, M) {
        (self.servos, self.motors)
    }

    /// Steer all four wheels
    ///
    /// Front wheels take the signed angle, rear wheels the opposite.
    pub fn steer(&mut self, direction: TurnDirection, angle: i16) -> Result<(), E> {
        self.servos.set_wheels(&WheelAngles::steer(direction, angle))
    }

    /// Rotate in place
    ///
    /// Sets the diagonal stance first, then drives the sides in opposite
    /// directions at equal speed.
    pub fn spin(&mut self, direction: TurnDirection, speed: i16) -> Result<(), E> {
        let speed = clamp_speed(speed);
        self.servos.set_wheels(&WheelAngles::SPIN)?;

        let (left, right) = match direction {
            TurnDirection::Left => (DriveDirection::Reverse, DriveDirection::Forward),
            TurnDirection::Right => (DriveDirection::Forward, DriveDirection::Reverse),
        };
        self.motors.drive(MotorSide::Left, left, speed)?;
        self.motors.drive(MotorSide::Right, right, speed)
    }

    /// Drive both sides in one direction until told otherwise
    pub fn move_at(&mut self, direction: DriveDirection, speed: i16) -> Result<(), E> {
        self.drive_motors(MotorSide::Both, direction, speed)
    }

    /// Drive both sides for `duration_ms`, then coast
    ///
    /// Blocks for the full duration. If starting the motors fails, a coast
    /// stop is still attempted before the error is returned.
    pub fn move_for<D: DelayNs>(
        &mut self,
        direction: DriveDirection,
        speed: i16,
        duration_ms: u32,
        delay: &mut D,
    ) -> Result<(), E> {
        if let Err(e) = self.move_at(direction, speed) {
            let _ = self.motors.stop(StopMode::Coast);
            return Err(e);
        }
        delay.delay_ms(duration_ms);
        self.motors.stop(StopMode::Coast)
    }

    /// Stop the drive motors
    pub fn stop(&mut self, mode: StopMode) -> Result<(), E> {
        self.motors.stop(mode)
    }

    /// Drive selected side(s) at a clamped speed
    pub fn drive_motors(
        &mut self,
        side: MotorSide,
        direction: DriveDirection,
        speed: i16,
    ) -> Result<(), E> {
        self.motors.drive(side, direction, clamp_speed(speed))
    }

    /// Return a servo group to 0°
    pub fn zero(&mut self, group: ServoGroup) -> Result<(), E> {
        self.servos.zero(group)
    }

    /// Execute one intent
    pub fn execute<D: DelayNs>(&mut self, intent: MotionIntent, delay: &mut D) -> Result<(), E> {
        match intent {
            MotionIntent::Steer { direction, angle } => self.steer(direction, angle),
            MotionIntent::Spin { direction, speed } => self.spin(direction, speed),
            MotionIntent::Move {
                direction,
                speed,
                duration_ms: Some(ms),
            } => self.move_for(direction, speed, ms, delay),
            MotionIntent::Move {
                direction,
                speed,
                duration_ms: None,
            } => self.move_at(direction, speed),
            MotionIntent::Zero { group } => self.zero(group),
            MotionIntent::Stop { mode } => self.stop(mode),
        }
    }
}
