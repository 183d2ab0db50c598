//! Addressable LED strip abstraction
//!
//! The wire protocol (WS2812 timing, colour order) belongs to the
//! implementation. Callers hand over a frame of RGB triples that already
//! has brightness applied.

/// Errors from LED strip output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Frame longer than the strip
    FrameTooLong,
    /// Transfer to the strip failed
    Transfer,
}

/// Addressable LED strip
pub trait LedStrip {
    /// Push one frame of `[r, g, b]` values, first pixel first
    fn write(&mut self, frame: &[[u8; 3]]) -> Result<(), LedError>;
}
