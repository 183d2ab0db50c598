//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Pin that switches direction at runtime
///
/// The ultrasonic ranger uses one line for both trigger and echo: the pin
/// drives the trigger pulse, then turns around to listen for the echo.
pub trait FlexPin: OutputPin + InputPin {
    /// Drive the pin as an output
    fn set_as_output(&mut self);

    /// Release the pin as a floating input
    fn set_as_input(&mut self);
}
