//! Board wiring and build-time configuration
//!
//! Pin numbers are fixed by the carrier board. Everything else comes from
//! `rover.toml`, validated and turned into constants by the build script.
//!
//! | Function              | GPIO | Peripheral    |
//! |-----------------------|------|---------------|
//! | I2C SDA               | 4    | I2C0          |
//! | I2C SCL               | 5    | I2C0          |
//! | Left motor fwd / rev  | 2/3  | PWM slice 1   |
//! | Right motor fwd / rev | 6/7  | PWM slice 3   |
//! | Sonar trigger/echo    | 13   | GPIO (flex)   |
//! | Keypad data           | 15   | GPIO in       |
//! | Keypad clock          | 16   | GPIO out      |
//! | Status LEDs           | 22   | PIO0 SM0, DMA0|

use rover_core::config::{
    EepromConfig, KeypadConfig, LedConfig, RoverConfig, ServoConfig, SonarConfig, TeleopConfig,
};
use rover_core::led::UpdateMode;

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));

/// Pixels on the status band
pub const LED_PIXELS: usize = 4;

/// Motor PWM period before the first drive command
pub const INITIAL_MOTOR_PERIOD_US: u32 = 60_000;
