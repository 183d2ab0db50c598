//! I2C adapter
//!
//! Wraps any blocking `embedded-hal` I2C implementation, which covers both
//! the bare `embassy_rp::i2c::I2c` and the `embedded-hal-bus` shared-bus
//! devices the firmware hands to each driver.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use rover_hal::{I2cBus, I2cError};

/// `rover_hal::I2cBus` over an `embedded_hal::i2c::I2c`
pub struct HalI2c<T> {
    inner: T,
}

impl<T: I2c> HalI2c<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

fn map_error(kind: ErrorKind) -> I2cError {
    match kind {
        ErrorKind::Bus => I2cError::Bus,
        ErrorKind::ArbitrationLoss => I2cError::ArbitrationLost,
        ErrorKind::NoAcknowledge(_) => I2cError::Nack,
        ErrorKind::Overrun => I2cError::Overrun,
        _ => I2cError::Other,
    }
}

impl<T: I2c> I2cBus for HalI2c<T> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cError> {
        self.inner
            .write(address, data)
            .map_err(|e| map_error(e.kind()))
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cError> {
        self.inner
            .read(address, buf)
            .map_err(|e| map_error(e.kind()))
    }
}
