//! PCA9685 servo controller
//!
//! The PCA9685 is a 16-channel, 12-bit PWM generator on I2C. Each channel
//! has four registers (ON_L, ON_H, OFF_L, OFF_H) starting at 0x06; the
//! output goes high at the ON tick and low at the OFF tick of a 4096-tick
//! frame. All pulses here start at tick 0, so only OFF moves.
//!
//! # Bring-up
//!
//! The chip is configured on the first servo write rather than at
//! construction, so the I2C bus may still be settling when the driver is
//! created:
//!
//! 1. MODE1 ← sleep (oscillator off, PRESCALE writable)
//! 2. PRESCALE ← 101 (~60 Hz frame)
//! 3. MODE1 ← restart | all-call
//! 4. ON_L/ON_H ← 0 on all 16 channels
//! 5. Trim table loaded from the EEPROM
//!
//! A failure part way through drops back to `Uninitialized`, and the next
//! servo write starts over from step 1.

use rover_core::config::ServoConfig;
use rover_core::servo::{clamp_angle, encode, OffsetTable, ServoChannel};
use rover_core::traits::{ByteStore, ServoDriver};
use rover_hal::I2cBus;

use crate::error::PeripheralIoError;
use crate::offsets::OffsetStore;

/// PCA9685 register addresses
pub mod reg {
    /// Mode register 1
    pub const MODE1: u8 = 0x00;
    /// Channel 0 ON_L; each channel adds 4
    pub const LED0_ON_L: u8 = 0x06;
    /// PWM frequency prescaler
    pub const PRESCALE: u8 = 0xFE;
}

/// MODE1: low-power sleep
pub const MODE1_SLEEP: u8 = 0x10;

/// MODE1: restart, respond to all-call
pub const MODE1_RESTART_ALLCALL: u8 = 0x81;

/// ON_L register for a channel
pub const fn channel_base(channel: ServoChannel) -> u8 {
    reg::LED0_ON_L + channel.index() * 4
}

/// Hardware initialization progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitState {
    Uninitialized,
    Initializing,
    Ready,
}

/// PCA9685 driving positional servos, with per-channel trims
///
/// Owns the initialization state and the trim table together, so there is
/// exactly one of each per physical controller.
pub struct ServoController<B, S> {
    bus: B,
    address: u8,
    prescale: u8,
    offsets: OffsetStore<S>,
    state: InitState,
}

impl<B, S> ServoController<B, S>
where
    B: I2cBus,
    S: ByteStore<Error = PeripheralIoError>,
{
    /// Create a controller; no bus traffic until the first servo write
    pub fn new(bus: B, store: S, config: ServoConfig) -> Self {
        Self {
            bus,
            address: config.address,
            prescale: config.prescale,
            offsets: OffsetStore::new(store),
            state: InitState::Uninitialized,
        }
    }

    /// Current initialization state
    pub fn state(&self) -> InitState {
        self.state
    }

    /// Whether bring-up has completed
    pub fn is_ready(&self) -> bool {
        self.state == InitState::Ready
    }

    /// Run bring-up if it has not completed yet
    pub fn ensure_ready(&mut self) -> Result<(), PeripheralIoError> {
        if self.state == InitState::Ready {
            return Ok(());
        }

        self.state = InitState::Initializing;
        match self.bring_up() {
            Ok(()) => {
                self.state = InitState::Ready;
                log_info!("Servo controller ready at 0x{:x}", self.address);
                Ok(())
            }
            Err(e) => {
                self.state = InitState::Uninitialized;
                log_warn!("Servo controller bring-up failed");
                Err(e)
            }
        }
    }

    fn bring_up(&mut self) -> Result<(), PeripheralIoError> {
        self.write_register(reg::MODE1, MODE1_SLEEP)?;
        self.write_register(reg::PRESCALE, self.prescale)?;
        self.write_register(reg::MODE1, MODE1_RESTART_ALLCALL)?;

        for channel in ServoChannel::all() {
            let base = channel_base(channel);
            self.write_register(base, 0)?;
            self.write_register(base + 1, 0)?;
        }

        self.offsets.load()?;
        Ok(())
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), PeripheralIoError> {
        self.bus.write(self.address, &[register, value])?;
        Ok(())
    }

    /// Move a channel to `angle` degrees, clamped to -90..=90, plus its trim
    pub fn set_angle(
        &mut self,
        channel: ServoChannel,
        angle: i16,
    ) -> Result<(), PeripheralIoError> {
        self.ensure_ready()?;

        let stop = encode(clamp_angle(angle), self.offsets.get(channel));
        let base = channel_base(channel);
        self.write_register(base + 2, stop.low_byte())?;
        self.write_register(base + 3, stop.high_byte())?;
        Ok(())
    }

    /// Set a channel trim in memory
    ///
    /// Trims are one signed byte because that is how the EEPROM stores
    /// them; within that range any value is accepted without clamping, and
    /// a large trim shifts every pulse on the channel accordingly. Nothing
    /// is persisted until [`persist_offsets`](Self::persist_offsets).
    pub fn set_offset(&mut self, channel: ServoChannel, offset: i8) {
        self.offsets.set(channel, offset);
    }

    /// Trim for a channel
    pub fn get_offset(&self, channel: ServoChannel) -> i8 {
        self.offsets.get(channel)
    }

    /// Zero every trim in memory
    pub fn clear_offsets(&mut self) {
        self.offsets.clear();
    }

    /// Current trim table
    pub fn offsets(&self) -> &OffsetTable {
        self.offsets.table()
    }

    /// Write the trim table to the EEPROM
    pub fn persist_offsets(&mut self) -> Result<(), PeripheralIoError> {
        self.offsets.save()
    }

    /// Reload the trim table from the EEPROM
    pub fn restore_offsets(&mut self) -> Result<OffsetTable, PeripheralIoError> {
        self.offsets.load()
    }

    /// Backing store, for user data outside the trim area
    pub fn storage_mut(&mut self) -> &mut S {
        self.offsets.store_mut()
    }

    /// Give back the bus and store
    pub fn release(self) -> (B, S) {
        (self.bus, self.offsets.release())
    }
}

impl<B, S> ServoDriver for ServoController<B, S>
where
    B: I2cBus,
    S: ByteStore<Error = PeripheralIoError>,
{
    type Error = PeripheralIoError;

    fn set_angle(&mut self, channel: ServoChannel, angle: i16) -> Result<(), PeripheralIoError> {
        ServoController::set_angle(self, channel, angle)
    }
}
