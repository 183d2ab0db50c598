//! Motion intent types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::servo::ServoGroup;

/// Left/right sense for steering and spinning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnDirection {
    Left,
    Right,
}

/// Forward/reverse sense for driving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DriveDirection {
    #[default]
    Forward,
    Reverse,
}

impl DriveDirection {
    /// The opposite direction
    pub const fn reversed(self) -> Self {
        match self {
            DriveDirection::Forward => DriveDirection::Reverse,
            DriveDirection::Reverse => DriveDirection::Forward,
        }
    }
}

/// Which drive side(s) a motor command applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MotorSide {
    Left,
    Right,
    Both,
}

impl MotorSide {
    /// Whether this selection includes the left side
    pub const fn includes_left(self) -> bool {
        matches!(self, MotorSide::Left | MotorSide::Both)
    }

    /// Whether this selection includes the right side
    pub const fn includes_right(self) -> bool {
        matches!(self, MotorSide::Right | MotorSide::Both)
    }
}

/// How the motors come to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopMode {
    /// All bridge inputs low; the rover rolls to a halt
    #[default]
    Coast,
    /// All bridge inputs high; the motors are shorted and brake
    Brake,
}

impl StopMode {
    /// Logic level written to every motor line
    pub const fn line_level(self) -> bool {
        matches!(self, StopMode::Brake)
    }
}

/// A single high-level motion request
///
/// Angles and speeds are carried unclamped; the coordinator clamps them
/// when the intent is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MotionIntent {
    /// Steer all four wheels by `angle` degrees (0-90)
    Steer { direction: TurnDirection, angle: i16 },
    /// Rotate in place at `speed` percent
    Spin { direction: TurnDirection, speed: i16 },
    /// Drive both sides at `speed` percent, optionally for a fixed time
    Move {
        direction: DriveDirection,
        speed: i16,
        duration_ms: Option<u32>,
    },
    /// Return a servo group to 0°
    Zero { group: ServoGroup },
    /// Stop the drive motors
    Stop { mode: StopMode },
}
