//! Time source abstraction
//!
//! Blocking delays use `embedded_hal::delay::DelayNs`; this trait only
//! covers reading a free-running timestamp, which pulse-width measurement
//! needs.

/// Monotonic microsecond clock
pub trait Clock {
    /// Microseconds since an arbitrary fixed point
    fn now_micros(&self) -> u64;

    /// Microseconds elapsed since `start`
    fn elapsed_micros(&self, start: u64) -> u64 {
        self.now_micros().saturating_sub(start)
    }
}
