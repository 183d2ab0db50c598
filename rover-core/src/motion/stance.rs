//! Wheel steering stances
//!
//! Steering mirrors the front and rear pairs: the front wheels turn by the
//! steering angle and the rear wheels counter-steer by the same amount,
//! which tightens the turning circle without true Ackermann geometry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::intent::TurnDirection;
use crate::servo::NamedServo;

/// Maximum steering angle magnitude
pub const MAX_STEER_ANGLE: i16 = 90;

/// Wheel angle used for spinning in place
pub const SPIN_ANGLE: i16 = 45;

/// Angles for the four steering servos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WheelAngles {
    pub front_left: i16,
    pub front_right: i16,
    pub rear_left: i16,
    pub rear_right: i16,
}

impl WheelAngles {
    /// All wheels straight ahead
    pub const CENTRED: Self = Self {
        front_left: 0,
        front_right: 0,
        rear_left: 0,
        rear_right: 0,
    };

    /// Diagonal stance for rotating about the chassis centre
    pub const SPIN: Self = Self {
        front_left: SPIN_ANGLE,
        front_right: -SPIN_ANGLE,
        rear_left: -SPIN_ANGLE,
        rear_right: SPIN_ANGLE,
    };

    /// Mirrored steering stance
    ///
    /// `angle` is clamped to `0..=90` before the direction sign is applied;
    /// left steering is negative.
    pub fn steer(direction: TurnDirection, angle: i16) -> Self {
        let magnitude = angle.clamp(0, MAX_STEER_ANGLE);
        let front = match direction {
            TurnDirection::Left => -magnitude,
            TurnDirection::Right => magnitude,
        };
        Self {
            front_left: front,
            front_right: front,
            rear_left: -front,
            rear_right: -front,
        }
    }

    /// `(servo, angle)` pairs in the order they are written
    pub fn assignments(&self) -> [(NamedServo, i16); 4] {
        [
            (NamedServo::FrontLeft, self.front_left),
            (NamedServo::FrontRight, self.front_right),
            (NamedServo::RearLeft, self.rear_left),
            (NamedServo::RearRight, self.rear_right),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steer_left_and_right_mirror() {
        let left = WheelAngles::steer(TurnDirection::Left, 30);
        assert_eq!(left.front_left, -30);
        assert_eq!(left.front_right, -30);
        assert_eq!(left.rear_left, 30);
        assert_eq!(left.rear_right, 30);

        let right = WheelAngles::steer(TurnDirection::Right, 30);
        assert_eq!(right.front_left, 30);
        assert_eq!(right.front_right, 30);
        assert_eq!(right.rear_left, -30);
        assert_eq!(right.rear_right, -30);
    }

    #[test]
    fn test_steer_clamps_before_sign() {
        // A negative angle clamps to 0 rather than flipping direction
        assert_eq!(WheelAngles::steer(TurnDirection::Left, -40), WheelAngles::CENTRED);
        assert_eq!(
            WheelAngles::steer(TurnDirection::Right, 150),
            WheelAngles::steer(TurnDirection::Right, 90)
        );
    }

    #[test]
    fn test_spin_stance() {
        let spin = WheelAngles::SPIN;
        assert_eq!(spin.front_left, 45);
        assert_eq!(spin.front_right, -45);
        assert_eq!(spin.rear_left, -45);
        assert_eq!(spin.rear_right, 45);
    }

    #[test]
    fn test_assignments_cover_all_wheels() {
        let servos: Vec<NamedServo> = WheelAngles::CENTRED
            .assignments()
            .iter()
            .map(|(servo, _)| *servo)
            .collect();
        for wheel in NamedServo::WHEELS {
            assert!(servos.contains(&wheel));
        }
    }
}
