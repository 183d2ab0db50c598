//! Per-channel trim offsets
//!
//! Each servo horn sits slightly off centre once assembled. The offset
//! table holds a signed trim in degrees for every channel, added to the
//! requested angle before pulse encoding.
//!
//! Trims are stored as one signed byte per channel, matching the EEPROM
//! layout. They are not range-checked: a trim of 100° is accepted and
//! will distort every pulse on that channel.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::channel::{ServoChannel, CHANNEL_COUNT};

/// In-memory trim table, index = channel number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OffsetTable {
    offsets: [i8; CHANNEL_COUNT],
}

impl OffsetTable {
    /// Table with every trim at zero
    pub const fn new() -> Self {
        Self {
            offsets: [0; CHANNEL_COUNT],
        }
    }

    /// Build a table from raw stored values
    pub const fn from_array(offsets: [i8; CHANNEL_COUNT]) -> Self {
        Self { offsets }
    }

    /// Raw values in channel order
    pub const fn as_array(&self) -> &[i8; CHANNEL_COUNT] {
        &self.offsets
    }

    /// Trim for a channel
    pub fn get(&self, channel: ServoChannel) -> i8 {
        self.offsets[channel.as_usize()]
    }

    /// Set the trim for a channel
    pub fn set(&mut self, channel: ServoChannel, offset: i8) {
        self.offsets[channel.as_usize()] = offset;
    }

    /// Reset every trim to zero
    pub fn clear(&mut self) {
        self.offsets = [0; CHANNEL_COUNT];
    }

    /// Iterate `(channel, offset)` pairs in channel order
    pub fn iter(&self) -> impl Iterator<Item = (ServoChannel, i8)> + '_ {
        ServoChannel::all().zip(self.offsets.iter().copied())
    }

    /// Check whether every trim is zero
    pub fn is_zero(&self) -> bool {
        self.offsets.iter().all(|&o| o == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_zero() {
        let table = OffsetTable::default();
        assert!(table.is_zero());
        assert_eq!(table.as_array(), &[0; CHANNEL_COUNT]);
    }

    #[test]
    fn test_set_and_get() {
        let mut table = OffsetTable::new();
        table.set(ServoChannel::from_index(5), 12);
        assert_eq!(table.get(ServoChannel::from_index(5)), 12);
        assert_eq!(table.get(ServoChannel::from_index(4)), 0);
        assert!(!table.is_zero());
    }

    #[test]
    fn test_clear() {
        let mut table = OffsetTable::from_array([7; CHANNEL_COUNT]);
        table.clear();
        assert!(table.is_zero());
    }

    #[test]
    fn test_iter_order() {
        let mut raw = [0i8; CHANNEL_COUNT];
        raw[3] = -4;
        let table = OffsetTable::from_array(raw);
        let (channel, offset) = table.iter().nth(3).unwrap();
        assert_eq!(channel.index(), 3);
        assert_eq!(offset, -4);
        assert_eq!(table.iter().count(), CHANNEL_COUNT);
    }

    proptest! {
        #[test]
        fn prop_out_of_range_channel_hits_edge(index in -1000i32..1000, value in any::<i8>()) {
            let mut clamped = OffsetTable::new();
            clamped.set(ServoChannel::from_index(index), value);

            let edge = index.clamp(0, 15);
            let mut direct = OffsetTable::new();
            direct.set(ServoChannel::from_index(edge), value);

            prop_assert_eq!(clamped, direct);
        }
    }
}
