//! AT24-style I2C EEPROM
//!
//! Memory addresses are 16 bits, sent MSB first ahead of the data byte.
//! The chip needs time to commit a write, so every access is followed by a
//! settle delay before the next transfer or before a read value is used.
//!
//! The first 16 bytes hold the servo trim table. User data is addressed
//! from 0 and lands after that reservation; user addresses past the top of
//! the chip's address space are clamped to the last byte.

use embedded_hal::delay::DelayNs;
use rover_core::config::EepromConfig;
use rover_core::servo::CHANNEL_COUNT;
use rover_core::traits::ByteStore;
use rover_hal::I2cBus;

use crate::error::PeripheralIoError;

/// Bytes at the start of the EEPROM reserved for servo trims
pub const RESERVED_BYTES: u16 = CHANNEL_COUNT as u16;

/// Highest user address; anything above lands here
pub const MAX_USER_ADDRESS: u16 = u16::MAX - RESERVED_BYTES;

/// Memory address for a user address, clamped so it never reaches the trims
pub const fn user_address(address: u16) -> u16 {
    let clamped = if address > MAX_USER_ADDRESS {
        MAX_USER_ADDRESS
    } else {
        address
    };
    clamped + RESERVED_BYTES
}

/// I2C EEPROM with byte-granular access
pub struct Eeprom<B, D> {
    bus: B,
    delay: D,
    address: u8,
    settle_ms: u32,
}

impl<B: I2cBus, D: DelayNs> Eeprom<B, D> {
    /// Create a driver for the EEPROM described by `config`
    pub fn new(bus: B, delay: D, config: EepromConfig) -> Self {
        Self {
            bus,
            delay,
            address: config.address,
            settle_ms: config.settle_ms,
        }
    }

    /// Device I2C address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Read a user byte (address relative to the end of the trim table)
    pub fn read_user(&mut self, address: u16) -> Result<i8, PeripheralIoError> {
        self.read_byte(user_address(address))
    }

    /// Write a user byte (address relative to the end of the trim table)
    pub fn write_user(&mut self, address: u16, value: i8) -> Result<(), PeripheralIoError> {
        self.write_byte(user_address(address), value)
    }

    /// Give back the bus and delay
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }
}

impl<B: I2cBus, D: DelayNs> ByteStore for Eeprom<B, D> {
    type Error = PeripheralIoError;

    fn write_byte(&mut self, address: u16, value: i8) -> Result<(), PeripheralIoError> {
        let [hi, lo] = address.to_be_bytes();
        self.bus.write(self.address, &[hi, lo, value as u8])?;
        self.delay.delay_ms(self.settle_ms);
        Ok(())
    }

    fn read_byte(&mut self, address: u16) -> Result<i8, PeripheralIoError> {
        let [hi, lo] = address.to_be_bytes();
        self.bus.write(self.address, &[hi, lo])?;
        self.delay.delay_ms(self.settle_ms);

        let mut buf = [0u8; 1];
        self.bus.read(self.address, &mut buf)?;
        Ok(buf[0] as i8)
    }
}
