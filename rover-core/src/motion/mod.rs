//! Motion intents and their translation to actuator commands
//!
//! The rover has four independently steered wheels and two drive sides.
//! A single intent (steer, spin, move) fans out into several servo angles
//! and motor outputs that must stay mechanically consistent.

pub mod coordinator;
pub mod intent;
pub mod motor;
pub mod stance;

pub use coordinator::MotionCoordinator;
pub use intent::{DriveDirection, MotionIntent, MotorSide, StopMode, TurnDirection};
pub use motor::{clamp_speed, period_for_duty, speed_to_duty, MotorState, MAX_SPEED};
pub use stance::WheelAngles;
