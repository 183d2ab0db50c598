//! Keypad teleoperation
//!
//! Maps each keypad key to what the rover should do. The mapping is pure;
//! the firmware control loop executes the resulting commands.

use crate::config::TeleopConfig;
use crate::keypad::Key;
use crate::motion::{DriveDirection, MotionIntent, StopMode, TurnDirection};
use crate::servo::{ServoGroup, MAX_ANGLE, MIN_ANGLE};

/// Longest motion sequence a single key produces
pub const MAX_PLAN: usize = 2;

/// Motion intents run in order for one key press
pub type IntentPlan = heapless::Vec<MotionIntent, MAX_PLAN>;

/// Action requested by a key press
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TeleopCommand {
    /// Run motion intents in order
    Motion(IntentPlan),
    /// Turn the mast by a relative number of degrees
    MastNudge(i16),
    /// Centre the wheels and the mast
    Home,
    /// Write the in-memory trims to EEPROM
    SaveOffsets,
    /// Reload trims from EEPROM
    LoadOffsets,
    /// Zero every trim in memory
    ClearOffsets,
}

impl TeleopCommand {
    fn plan(intents: &[MotionIntent]) -> Self {
        let mut plan = IntentPlan::new();
        for intent in intents.iter().take(MAX_PLAN) {
            // Bounded by take(MAX_PLAN)
            let _ = plan.push(*intent);
        }
        TeleopCommand::Motion(plan)
    }

    /// Whether this command drives forward
    pub fn moves_forward(&self) -> bool {
        match self {
            TeleopCommand::Motion(plan) => plan.iter().any(|intent| {
                matches!(
                    intent,
                    MotionIntent::Move {
                        direction: DriveDirection::Forward,
                        ..
                    }
                )
            }),
            _ => false,
        }
    }
}

/// Command for a key
pub fn command_for(key: Key, config: &TeleopConfig) -> TeleopCommand {
    let straight = |direction| {
        TeleopCommand::plan(&[
            MotionIntent::Zero {
                group: ServoGroup::Wheels,
            },
            MotionIntent::Move {
                direction,
                speed: config.drive_speed,
                duration_ms: None,
            },
        ])
    };
    let arc = |turn, direction| {
        TeleopCommand::plan(&[
            MotionIntent::Steer {
                direction: turn,
                angle: config.steer_angle,
            },
            MotionIntent::Move {
                direction,
                speed: config.drive_speed,
                duration_ms: None,
            },
        ])
    };
    let spin = |direction| {
        TeleopCommand::plan(&[MotionIntent::Spin {
            direction,
            speed: config.spin_speed,
        }])
    };
    let stop = |mode| TeleopCommand::plan(&[MotionIntent::Stop { mode }]);

    match key {
        Key::Stop => stop(StopMode::Brake),
        Key::Pause => stop(StopMode::Coast),
        Key::Forward => straight(DriveDirection::Forward),
        Key::Reverse => straight(DriveDirection::Reverse),
        Key::ForwardLeft => arc(TurnDirection::Left, DriveDirection::Forward),
        Key::ForwardRight => arc(TurnDirection::Right, DriveDirection::Forward),
        Key::ReverseLeft => arc(TurnDirection::Left, DriveDirection::Reverse),
        Key::ReverseRight => arc(TurnDirection::Right, DriveDirection::Reverse),
        Key::SpinLeft => spin(TurnDirection::Left),
        Key::SpinRight => spin(TurnDirection::Right),
        Key::MastLeft => TeleopCommand::MastNudge(-config.mast_step),
        Key::MastRight => TeleopCommand::MastNudge(config.mast_step),
        Key::Tick => TeleopCommand::Home,
        Key::Cross => TeleopCommand::ClearOffsets,
        Key::Save => TeleopCommand::SaveOffsets,
        Key::Load => TeleopCommand::LoadOffsets,
    }
}

/// New mast angle after a nudge, held within the servo range
pub fn nudge_mast(current: i16, delta: i16) -> i16 {
    current.saturating_add(delta).clamp(MIN_ANGLE, MAX_ANGLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TeleopConfig {
        TeleopConfig::new()
    }

    fn intents(command: TeleopCommand) -> Vec<MotionIntent> {
        match command {
            TeleopCommand::Motion(plan) => plan.into_iter().collect(),
            other => panic!("expected motion, got {:?}", other),
        }
    }

    #[test]
    fn test_every_key_maps() {
        for key in Key::ALL {
            let _ = command_for(key, &config());
        }
    }

    #[test]
    fn test_forward_centres_then_drives() {
        let plan = intents(command_for(Key::Forward, &config()));
        assert_eq!(
            plan,
            vec![
                MotionIntent::Zero {
                    group: ServoGroup::Wheels
                },
                MotionIntent::Move {
                    direction: DriveDirection::Forward,
                    speed: 60,
                    duration_ms: None
                },
            ]
        );
        assert!(command_for(Key::Forward, &config()).moves_forward());
        assert!(!command_for(Key::Reverse, &config()).moves_forward());
    }

    #[test]
    fn test_diagonals_steer() {
        let plan = intents(command_for(Key::ReverseRight, &config()));
        assert_eq!(
            plan[0],
            MotionIntent::Steer {
                direction: TurnDirection::Right,
                angle: 30
            }
        );
        assert!(matches!(
            plan[1],
            MotionIntent::Move {
                direction: DriveDirection::Reverse,
                ..
            }
        ));
    }

    #[test]
    fn test_stop_keys() {
        assert_eq!(
            intents(command_for(Key::Stop, &config())),
            vec![MotionIntent::Stop {
                mode: StopMode::Brake
            }]
        );
        assert_eq!(
            intents(command_for(Key::Pause, &config())),
            vec![MotionIntent::Stop {
                mode: StopMode::Coast
            }]
        );
    }

    #[test]
    fn test_non_motion_keys() {
        assert_eq!(command_for(Key::MastLeft, &config()), TeleopCommand::MastNudge(-15));
        assert_eq!(command_for(Key::MastRight, &config()), TeleopCommand::MastNudge(15));
        assert_eq!(command_for(Key::Save, &config()), TeleopCommand::SaveOffsets);
        assert_eq!(command_for(Key::Load, &config()), TeleopCommand::LoadOffsets);
        assert_eq!(command_for(Key::Tick, &config()), TeleopCommand::Home);
        assert_eq!(command_for(Key::Cross, &config()), TeleopCommand::ClearOffsets);
    }

    #[test]
    fn test_nudge_mast_clamps() {
        assert_eq!(nudge_mast(0, 15), 15);
        assert_eq!(nudge_mast(80, 15), 90);
        assert_eq!(nudge_mast(-80, -15), -90);
        assert_eq!(nudge_mast(i16::MAX, 1), 90);
    }
}
