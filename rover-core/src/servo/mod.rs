//! Servo channels, pulse encoding and trim offsets
//!
//! The PCA9685 exposes 16 channels. Five of them carry named actuators
//! (four steering servos and the mast); the rest are free for user servos.

pub mod channel;
pub mod offsets;
pub mod pulse;

pub use channel::{NamedServo, ServoChannel, ServoGroup, CHANNEL_COUNT};
pub use offsets::OffsetTable;
pub use pulse::{clamp_angle, encode, PulseStop, MAX_ANGLE, MIN_ANGLE};
