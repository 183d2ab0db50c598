//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in rover-core for the rover's peripherals:
//!
//! - PCA9685 16-channel servo controller with lazy bring-up
//! - AT24-style I2C EEPROM holding servo trims and user bytes
//! - Offset store mirroring the trim table to the EEPROM
//! - Dual H-bridge motor bridge on four PWM lines
//! - Single-pin ultrasonic sonar
//! - Bit-banged 16-key keypad
//! - Status LED band

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod eeprom;
pub mod error;
pub mod keypad;
pub mod led;
pub mod motor;
pub mod offsets;
pub mod pca9685;
pub mod sonar;

#[cfg(test)]
pub(crate) mod mock;

pub use eeprom::Eeprom;
pub use error::PeripheralIoError;
pub use keypad::Keypad;
pub use led::LedBand;
pub use motor::MotorBridge;
pub use offsets::OffsetStore;
pub use pca9685::ServoController;
pub use sonar::Sonar;
