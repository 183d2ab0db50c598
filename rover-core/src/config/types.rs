//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::led::{UpdateMode, DEFAULT_BRIGHTNESS, DEFAULT_PIXELS};
use crate::sonar::{MAX_ATTEMPTS, MAX_RANGE_CM};

/// Servo controller (PCA9685) settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServoConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// PRESCALE register value; 101 gives ~60 Hz from the 25 MHz oscillator
    pub prescale: u8,
}

impl ServoConfig {
    pub const fn new() -> Self {
        Self {
            address: 0x40,
            prescale: 101,
        }
    }
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Offset EEPROM settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EepromConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Wait after every access before the next one (ms)
    pub settle_ms: u32,
}

impl EepromConfig {
    pub const fn new() -> Self {
        Self {
            address: 0x50,
            settle_ms: 1,
        }
    }
}

impl Default for EepromConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Sonar settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SonarConfig {
    /// Furthest range to wait for (cm)
    pub max_range_cm: u32,
    /// Trigger attempts per reading
    pub attempts: u8,
}

impl SonarConfig {
    pub const fn new() -> Self {
        Self {
            max_range_cm: MAX_RANGE_CM,
            attempts: MAX_ATTEMPTS,
        }
    }
}

impl Default for SonarConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Keypad polling settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeypadConfig {
    /// Ready-line polls between 1 ms yields
    pub yield_interval: u32,
    /// Give up waiting for a key after this many polls (`None` waits forever)
    pub max_polls: Option<u32>,
}

impl KeypadConfig {
    pub const fn new() -> Self {
        Self {
            yield_interval: 1000,
            max_polls: None,
        }
    }
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Status LED band settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LedConfig {
    /// Brightness applied on flush (0-255)
    pub brightness: u8,
    /// Flush policy
    pub mode: UpdateMode,
}

impl LedConfig {
    pub const fn new() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            mode: UpdateMode::Auto,
        }
    }

    /// Pixel count of the stock band
    pub const fn pixels() -> usize {
        DEFAULT_PIXELS
    }
}

impl Default for LedConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Speeds and angles used by keypad teleoperation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TeleopConfig {
    /// Drive speed (0-100)
    pub drive_speed: i16,
    /// Spin speed (0-100)
    pub spin_speed: i16,
    /// Steering angle for the diagonal keys (0-90)
    pub steer_angle: i16,
    /// Mast movement per key press (degrees)
    pub mast_step: i16,
}

impl TeleopConfig {
    pub const fn new() -> Self {
        Self {
            drive_speed: 60,
            spin_speed: 50,
            steer_angle: 30,
            mast_step: 15,
        }
    }
}

impl Default for TeleopConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete rover configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoverConfig {
    pub servo: ServoConfig,
    pub eeprom: EepromConfig,
    pub sonar: SonarConfig,
    pub keypad: KeypadConfig,
    pub led: LedConfig,
    pub teleop: TeleopConfig,
}

impl RoverConfig {
    pub const fn new() -> Self {
        Self {
            servo: ServoConfig::new(),
            eeprom: EepromConfig::new(),
            sonar: SonarConfig::new(),
            keypad: KeypadConfig::new(),
            led: LedConfig::new(),
            teleop: TeleopConfig::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoverConfig::default();
        assert_eq!(config, RoverConfig::new());
        assert_eq!(config.servo.address, 0x40);
        assert_eq!(config.servo.prescale, 101);
        assert_eq!(config.eeprom.address, 0x50);
        assert_eq!(config.eeprom.settle_ms, 1);
        assert_eq!(config.sonar.attempts, 10);
        assert_eq!(config.sonar.max_range_cm, 500);
        assert_eq!(config.keypad.yield_interval, 1000);
        assert_eq!(config.led.brightness, 40);
        assert_eq!(config.led.mode, UpdateMode::Auto);
        assert_eq!(LedConfig::pixels(), 4);
    }
}
