//! Servo channel identities

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of PWM channels on the servo controller
pub const CHANNEL_COUNT: usize = 16;

/// A servo controller channel, always in `0..=15`
///
/// Construction clamps rather than rejects: `from_index(-5)` is channel 0
/// and `from_index(99)` is channel 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServoChannel(u8);

impl ServoChannel {
    /// Clamp any integer into a valid channel
    pub const fn from_index(index: i32) -> Self {
        let clamped = if index < 0 {
            0
        } else if index > (CHANNEL_COUNT as i32 - 1) {
            CHANNEL_COUNT as i32 - 1
        } else {
            index
        };
        Self(clamped as u8)
    }

    /// Channel number (0-15)
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Channel number as a table index
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every channel in order
    pub fn all() -> impl Iterator<Item = ServoChannel> {
        (0..CHANNEL_COUNT as u8).map(ServoChannel)
    }
}

impl From<NamedServo> for ServoChannel {
    fn from(servo: NamedServo) -> Self {
        ServoChannel(servo as u8)
    }
}

/// Servos with a fixed place on the chassis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum NamedServo {
    /// Front left wheel steering
    FrontLeft = 9,
    /// Rear left wheel steering
    RearLeft = 11,
    /// Rear right wheel steering
    RearRight = 13,
    /// Front right wheel steering
    FrontRight = 15,
    /// Sensor mast pan
    Mast = 0,
}

impl NamedServo {
    /// The four steering servos, front pair first
    pub const WHEELS: [NamedServo; 4] = [
        NamedServo::FrontLeft,
        NamedServo::FrontRight,
        NamedServo::RearLeft,
        NamedServo::RearRight,
    ];

    /// Channel this servo is wired to
    pub const fn channel(self) -> ServoChannel {
        ServoChannel(self as u8)
    }
}

/// Groups of servos addressed together when homing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ServoGroup {
    /// The four steering servos
    #[default]
    Wheels,
    /// The mast servo only
    Mast,
    /// All 16 channels
    All,
}

impl ServoGroup {
    /// Channels that belong to this group
    pub fn channels(self) -> heapless::Vec<ServoChannel, CHANNEL_COUNT> {
        let mut out = heapless::Vec::new();
        match self {
            ServoGroup::Wheels => {
                for servo in NamedServo::WHEELS {
                    // Capacity is CHANNEL_COUNT, never exceeded
                    let _ = out.push(servo.channel());
                }
            }
            ServoGroup::Mast => {
                let _ = out.push(NamedServo::Mast.channel());
            }
            ServoGroup::All => {
                for channel in ServoChannel::all() {
                    let _ = out.push(channel);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_clamping() {
        assert_eq!(ServoChannel::from_index(-5).index(), 0);
        assert_eq!(ServoChannel::from_index(0).index(), 0);
        assert_eq!(ServoChannel::from_index(7).index(), 7);
        assert_eq!(ServoChannel::from_index(15).index(), 15);
        assert_eq!(ServoChannel::from_index(99).index(), 15);
    }

    #[test]
    fn test_named_channels() {
        assert_eq!(NamedServo::FrontLeft.channel().index(), 9);
        assert_eq!(NamedServo::RearLeft.channel().index(), 11);
        assert_eq!(NamedServo::RearRight.channel().index(), 13);
        assert_eq!(NamedServo::FrontRight.channel().index(), 15);
        assert_eq!(NamedServo::Mast.channel().index(), 0);
        assert_eq!(ServoChannel::from(NamedServo::Mast), ServoChannel::from_index(0));
    }

    #[test]
    fn test_group_channels() {
        let wheels = ServoGroup::Wheels.channels();
        assert_eq!(wheels.len(), 4);
        assert!(!wheels.contains(&NamedServo::Mast.channel()));

        let mast = ServoGroup::Mast.channels();
        assert_eq!(mast.as_slice(), &[ServoChannel::from_index(0)]);

        let all = ServoGroup::All.channels();
        assert_eq!(all.len(), CHANNEL_COUNT);
        assert_eq!(all[0].index(), 0);
        assert_eq!(all[15].index(), 15);
    }
}
