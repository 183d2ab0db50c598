//! Rover Hardware Abstraction Layer
//!
//! This crate defines the narrow peripheral interfaces the servo and motor
//! stack talks to. Chip-specific crates implement them; the drivers and the
//! core logic only ever see these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  rover-firmware / rover-drivers         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rover-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  rover-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::FlexPin`] - Digital I/O
//! - [`i2c::I2cBus`] - I2C bus operations (servo controller, EEPROM)
//! - [`pwm::PwmBank`] - PWM outputs sharing one period (motor bridge)
//! - [`time::Clock`] - Microsecond timestamps for pulse measurement
//! - [`led::LedStrip`] - Addressable LED strip output

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod led;
pub mod pwm;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{FlexPin, InputPin, OutputPin};
pub use i2c::{I2cBus, I2cError};
pub use led::{LedError, LedStrip};
pub use pwm::{PwmBank, PwmError};
pub use time::Clock;
