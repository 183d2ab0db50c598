//! Angle to PCA9685 pulse encoding
//!
//! At 60 Hz the PCA9685 divides each cycle into 4096 ticks. A servo centres
//! at 369 ticks (~1.5 ms) and sweeps ±223 ticks across ±90°. Every channel
//! starts its pulse at tick 0, so only the stop tick varies.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum servo angle in degrees
pub const MIN_ANGLE: i16 = -90;

/// Maximum servo angle in degrees
pub const MAX_ANGLE: i16 = 90;

/// Stop tick for a centred servo
pub const CENTRE_TICKS: i32 = 369;

/// Ticks spanned by 90° of travel
pub const HALF_SWING_TICKS: i32 = 223;

/// Degrees represented by [`HALF_SWING_TICKS`]
const HALF_SWING_DEGREES: i32 = 90;

/// PWM stop tick for one channel
///
/// Not clamped: a large trim offset can push the value outside the
/// 12-bit range, and the register bytes then carry whatever bits remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PulseStop(pub i32);

impl PulseStop {
    /// Raw tick value
    pub const fn ticks(self) -> i32 {
        self.0
    }

    /// Byte for the `LEDn_OFF_L` register
    pub const fn low_byte(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Byte for the `LEDn_OFF_H` register
    pub const fn high_byte(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }
}

/// Clamp an angle into `MIN_ANGLE..=MAX_ANGLE`
pub fn clamp_angle(angle: i16) -> i16 {
    angle.clamp(MIN_ANGLE, MAX_ANGLE)
}

/// Encode an angle plus trim offset as a stop tick
///
/// Computes `round(369 + (angle + offset) * 223 / 90)`, rounding half away
/// from zero. The angle is expected to be clamped by the caller; the
/// encoder itself applies no limits.
pub fn encode(angle: i16, offset: i8) -> PulseStop {
    let degrees = angle as i32 + offset as i32;
    let numerator = CENTRE_TICKS * HALF_SWING_DEGREES + degrees * HALF_SWING_TICKS;
    PulseStop(div_round(numerator, HALF_SWING_DEGREES))
}

/// Integer division rounding half away from zero
fn div_round(numerator: i32, denominator: i32) -> i32 {
    let half = denominator / 2;
    if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        -((-numerator + half) / denominator)
    }
}
