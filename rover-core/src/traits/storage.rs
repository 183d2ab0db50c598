//! Byte-addressed persistent storage

/// Non-volatile memory addressed one byte at a time
///
/// Values are signed to match how trim offsets are stored.
pub trait ByteStore {
    /// Error raised by the underlying bus
    type Error;

    /// Write one byte at `address`
    fn write_byte(&mut self, address: u16, value: i8) -> Result<(), Self::Error>;

    /// Read one byte from `address`
    fn read_byte(&mut self, address: u16) -> Result<i8, Self::Error>;
}

impl<T: ByteStore + ?Sized> ByteStore for &mut T {
    type Error = T::Error;

    fn write_byte(&mut self, address: u16, value: i8) -> Result<(), Self::Error> {
        (**self).write_byte(address, value)
    }

    fn read_byte(&mut self, address: u16) -> Result<i8, Self::Error> {
        (**self).read_byte(address)
    }
}
