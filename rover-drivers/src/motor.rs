//! Dual H-bridge drive motors
//!
//! Each side has two bridge inputs. Driving PWM into the first input turns
//! the motor forward, into the second turns it in reverse. Holding both
//! inputs at the same level stops it: both low lets it coast, both high
//! shorts the windings and brakes.
//!
//! The four inputs share one PWM period. Low duty at a short period
//! stalls the motors, so the period is lengthened for slow speeds.

use rover_core::motion::{
    period_for_duty, speed_to_duty, DriveDirection, MotorSide, MotorState, StopMode,
};
use rover_core::traits::MotorDriver;
use rover_hal::PwmBank;

use crate::error::PeripheralIoError;

/// PWM bank channel for each bridge input
pub mod line {
    pub const LEFT_FORWARD: usize = 0;
    pub const LEFT_REVERSE: usize = 1;
    pub const RIGHT_FORWARD: usize = 2;
    pub const RIGHT_REVERSE: usize = 3;

    /// Every motor line
    pub const ALL: [usize; 4] = [LEFT_FORWARD, LEFT_REVERSE, RIGHT_FORWARD, RIGHT_REVERSE];
}

/// Two drive sides on a four-channel PWM bank
pub struct MotorBridge<P> {
    pwm: P,
    left: MotorState,
    right: MotorState,
    period_us: Option<u32>,
}

impl<P: PwmBank> MotorBridge<P> {
    /// Create a bridge; the motors are left as the PWM bank found them
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            left: MotorState::STOPPED,
            right: MotorState::STOPPED,
            period_us: None,
        }
    }

    /// Last commanded state of the left side
    pub fn left(&self) -> MotorState {
        self.left
    }

    /// Last commanded state of the right side
    pub fn right(&self) -> MotorState {
        self.right
    }

    /// PWM period currently programmed
    pub fn period_us(&self) -> Option<u32> {
        self.period_us
    }

    fn apply_period(&mut self, duty: u16) -> Result<(), PeripheralIoError> {
        let period = period_for_duty(duty);
        if self.period_us != Some(period) {
            self.pwm.set_period_us(period)?;
            self.period_us = Some(period);
            log_debug!("Motor PWM period {} us", period);
        }
        Ok(())
    }

    fn apply_side(
        &mut self,
        forward_line: usize,
        reverse_line: usize,
        state: MotorState,
    ) -> Result<(), PeripheralIoError> {
        let (forward, reverse) = state.line_duties();
        self.pwm.set_duty(forward_line, forward)?;
        self.pwm.set_duty(reverse_line, reverse)?;
        Ok(())
    }

    /// Give back the PWM bank
    pub fn release(self) -> P {
        self.pwm
    }
}

impl<P: PwmBank> MotorDriver for MotorBridge<P> {
    type Error = PeripheralIoError;

    fn drive(
        &mut self,
        side: MotorSide,
        direction: DriveDirection,
        speed: u8,
    ) -> Result<(), PeripheralIoError> {
        let state = MotorState {
            direction,
            duty: speed_to_duty(speed),
        };
        self.apply_period(state.duty)?;

        if side.includes_left() {
            self.apply_side(line::LEFT_FORWARD, line::LEFT_REVERSE, state)?;
            self.left = state;
        }
        if side.includes_right() {
            self.apply_side(line::RIGHT_FORWARD, line::RIGHT_REVERSE, state)?;
            self.right = state;
        }
        Ok(())
    }

    fn stop(&mut self, mode: StopMode) -> Result<(), PeripheralIoError> {
        let level = mode.line_level();
        for channel in line::ALL {
            self.pwm.set_level(channel, level)?;
        }
        self.left = MotorState::STOPPED;
        self.right = MotorState::STOPPED;
        Ok(())
    }
}
