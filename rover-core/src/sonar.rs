//! Ultrasonic ranging arithmetic
//!
//! The sensor reports distance as the width of an echo pulse. Sound takes
//! about 58 µs per centimetre of range (out and back) and 148 µs per inch.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Echo microseconds per centimetre of range
pub const US_PER_CM: u32 = 58;

/// Echo microseconds per inch of range
pub const US_PER_INCH: u32 = 148;

/// Furthest range worth waiting for
pub const MAX_RANGE_CM: u32 = 500;

/// Trigger attempts before giving up
pub const MAX_ATTEMPTS: u8 = 10;

/// Unit for a range reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PingUnit {
    #[default]
    Centimeters,
    Inches,
    /// Raw echo width
    Microseconds,
}

/// Echo timeout for a maximum range
pub const fn echo_timeout_us(max_range_cm: u32) -> u32 {
    max_range_cm * US_PER_CM
}

/// Convert an echo width to a distance, rounding to nearest
///
/// A zero echo (nothing heard) is zero in every unit.
pub fn convert(echo_us: u32, unit: PingUnit) -> u32 {
    match unit {
        PingUnit::Centimeters => div_round(echo_us, US_PER_CM),
        PingUnit::Inches => div_round(echo_us, US_PER_INCH),
        PingUnit::Microseconds => echo_us,
    }
}

fn div_round(value: u32, divisor: u32) -> u32 {
    (value + divisor / 2) / divisor
}
