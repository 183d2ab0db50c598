//! Servo trim persistence
//!
//! Keeps the in-memory [`OffsetTable`] and mirrors it to a byte store on
//! request. Edits never touch the store by themselves; `save` has to be
//! called to make them survive a restart.

use rover_core::servo::{OffsetTable, ServoChannel, CHANNEL_COUNT};
use rover_core::traits::ByteStore;

/// Trim table backed by a byte store (addresses 0-15)
pub struct OffsetStore<S> {
    store: S,
    table: OffsetTable,
}

impl<S: ByteStore> OffsetStore<S> {
    /// Wrap a store; the table starts zeroed until [`load`](Self::load)
    pub fn new(store: S) -> Self {
        Self {
            store,
            table: OffsetTable::new(),
        }
    }

    /// Replace the table with the 16 stored trims
    ///
    /// On error the in-memory table is left unchanged.
    pub fn load(&mut self) -> Result<OffsetTable, S::Error> {
        let mut raw = [0i8; CHANNEL_COUNT];
        for (address, slot) in raw.iter_mut().enumerate() {
            *slot = self.store.read_byte(address as u16)?;
        }
        self.table = OffsetTable::from_array(raw);
        log_debug!("Loaded servo offsets");
        Ok(self.table)
    }

    /// Write all 16 trims to the store
    pub fn save(&mut self) -> Result<(), S::Error> {
        for (channel, offset) in self.table.iter() {
            self.store.write_byte(channel.index() as u16, offset)?;
        }
        log_debug!("Saved servo offsets");
        Ok(())
    }

    /// Trim for a channel
    pub fn get(&self, channel: ServoChannel) -> i8 {
        self.table.get(channel)
    }

    /// Set a trim in memory
    ///
    /// The value is stored as given; the `i8` width is the stored record
    /// size, not a validated range.
    pub fn set(&mut self, channel: ServoChannel, offset: i8) {
        self.table.set(channel, offset);
    }

    /// Zero every trim in memory
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Current in-memory table
    pub fn table(&self) -> &OffsetTable {
        &self.table
    }

    /// Backing store, for user data outside the trim area
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give back the store
    pub fn release(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MemoryStore;

    fn ch(index: i32) -> ServoChannel {
        ServoChannel::from_index(index)
    }

    #[test]
    fn test_set_does_not_persist() {
        let mut offsets = OffsetStore::new(MemoryStore::default());
        offsets.set(ch(5), 12);
        assert_eq!(offsets.get(ch(5)), 12);
        assert_eq!(offsets.store_mut().writes, 0);

        // A reload without saving discards the edit
        offsets.load().unwrap();
        assert_eq!(offsets.get(ch(5)), 0);
    }

    #[test]
    fn test_save_and_reload_after_restart() {
        let mut offsets = OffsetStore::new(MemoryStore::default());
        for i in 0..CHANNEL_COUNT as i32 {
            offsets.set(ch(i), (i as i8) * 3 - 20);
        }
        offsets.save().unwrap();
        let saved = *offsets.table();

        let store = offsets.release();
        assert_eq!(store.writes, CHANNEL_COUNT);

        let mut restarted = OffsetStore::new(store);
        assert!(restarted.table().is_zero());
        assert_eq!(restarted.load().unwrap(), saved);
        assert_eq!(restarted.store_mut().reads, CHANNEL_COUNT);
    }

    #[test]
    fn test_channel_clamping() {
        let mut low = OffsetStore::new(MemoryStore::default());
        low.set(ch(-5), 10);
        let mut zero = OffsetStore::new(MemoryStore::default());
        zero.set(ch(0), 10);
        assert_eq!(low.table(), zero.table());

        let mut high = OffsetStore::new(MemoryStore::default());
        high.set(ch(99), 10);
        let mut fifteen = OffsetStore::new(MemoryStore::default());
        fifteen.set(ch(15), 10);
        assert_eq!(high.table(), fifteen.table());
    }

    #[test]
    fn test_clear_is_memory_only() {
        let mut store = MemoryStore::default();
        store.bytes[3] = 9;
        let mut offsets = OffsetStore::new(store);
        offsets.load().unwrap();
        assert_eq!(offsets.get(ch(3)), 9);

        offsets.clear();
        assert!(offsets.table().is_zero());
        assert_eq!(offsets.store_mut().bytes[3], 9);
    }
}
