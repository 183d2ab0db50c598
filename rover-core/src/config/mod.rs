//! Configuration types
//!
//! Board-agnostic settings for the rover peripherals. Defaults match the
//! stock chassis wiring; the firmware overrides pins and bus addresses from
//! its build-time board file.

pub mod types;

pub use types::*;
