//! Board-agnostic core logic for the rover
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Servo channel naming, pulse encoding and the trim offset table
//! - Motion intents and the coordinator that fans them out to servos/motors
//! - Motor duty scaling and PWM period selection
//! - Keypad key codes, sonar unit conversion, LED colours
//! - Teleop key mapping and configuration types
//! - Driver traits implemented by `rover-drivers`

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod keypad;
pub mod led;
pub mod motion;
pub mod servo;
pub mod sonar;
pub mod teleop;
pub mod traits;
