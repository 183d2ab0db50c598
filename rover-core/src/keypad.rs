//! Keypad key codes
//!
//! The keypad shifts out a 16-bit word with one active-low bit per key.
//! Inverting the raw word gives a code where each held key sets its bit.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of keys on the pad
pub const KEY_COUNT: usize = 16;

/// A key on the rover keypad, valued by its bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u16)]
pub enum Key {
    Stop = 0x0080,
    Forward = 0x0400,
    Reverse = 0x0010,
    ForwardLeft = 0x0200,
    ForwardRight = 0x0800,
    ReverseLeft = 0x0008,
    ReverseRight = 0x0020,
    SpinLeft = 0x0040,
    SpinRight = 0x0100,
    MastLeft = 0x8000,
    MastRight = 0x4000,
    Cross = 0x0004,
    Tick = 0x0002,
    Pause = 0x0001,
    Save = 0x2000,
    Load = 0x1000,
}

impl Key {
    /// Every key, in decode priority order
    pub const ALL: [Key; KEY_COUNT] = [
        Key::Stop,
        Key::Forward,
        Key::Reverse,
        Key::ForwardLeft,
        Key::ForwardRight,
        Key::ReverseLeft,
        Key::ReverseRight,
        Key::SpinLeft,
        Key::SpinRight,
        Key::MastLeft,
        Key::MastRight,
        Key::Cross,
        Key::Tick,
        Key::Pause,
        Key::Save,
        Key::Load,
    ];

    /// Bit mask for this key
    pub const fn mask(self) -> u16 {
        self as u16
    }
}

/// A decoded keypad word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyCode(pub u16);

impl KeyCode {
    /// No key held
    pub const NONE: Self = Self(0);

    /// Decode the word shifted out of the keypad (`65535 - raw`)
    pub const fn from_raw(raw: u16) -> Self {
        Self(u16::MAX - raw)
    }

    /// Whether no key is held
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether `key` is held
    pub const fn contains(self, key: Key) -> bool {
        self.0 & key.mask() != 0
    }

    /// Single key held, if the code is exactly one key
    pub fn exact(self) -> Option<Key> {
        Key::ALL.into_iter().find(|k| k.mask() == self.0)
    }

    /// Highest-priority held key
    ///
    /// With several keys held the one listed first in [`Key::ALL`] wins, so
    /// Stop always takes precedence.
    pub fn first_key(self) -> Option<Key> {
        Key::ALL.into_iter().find(|&k| self.contains(k))
    }

    /// Every held key, in priority order
    pub fn pressed(self) -> heapless::Vec<Key, KEY_COUNT> {
        Key::ALL.into_iter().filter(|&k| self.contains(k)).collect()
    }
}

impl From<Key> for KeyCode {
    fn from(key: Key) -> Self {
        KeyCode(key.mask())
    }
}
