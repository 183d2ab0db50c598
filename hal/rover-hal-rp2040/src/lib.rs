//! RP2040-specific HAL for the rover firmware
//!
//! This crate provides RP2040 implementations of the shared `rover-hal`
//! traits:
//!
//! - I2C adapter over any `embedded-hal` bus (shared or exclusive)
//! - GPIO wrappers for plain, input and bidirectional pins
//! - Four-channel motor PWM on two PWM slices
//! - Microsecond clock from `embassy-time`
//! - WS2812 LED strip over embassy-rp's PIO driver

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod pwm;
pub mod time;
pub mod ws2812;

pub use gpio::{RpFlex, RpInput, RpOutput};
pub use i2c::HalI2c;
pub use pwm::MotorPwm;
pub use time::EmbassyClock;
pub use ws2812::Ws2812Strip;
