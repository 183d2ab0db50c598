//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the peripheral drivers in `rover-drivers`.

pub mod motor;
pub mod servo;
pub mod storage;

pub use motor::MotorDriver;
pub use servo::ServoDriver;
pub use storage::ByteStore;
