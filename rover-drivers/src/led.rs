//! Status LED band
//!
//! Holds the pixel colours at full intensity and applies brightness when
//! the frame is flushed, so changing brightness never loses colour
//! resolution. In `Auto` mode every change is flushed at once; in `Manual`
//! mode nothing reaches the strip until [`LedBand::show`].

use rover_core::config::LedConfig;
use rover_core::led::{hue_to_rgb, rainbow_hue, Rgb, UpdateMode};
use rover_hal::LedStrip;

use crate::error::PeripheralIoError;

/// A fixed-length band of RGB pixels
pub struct LedBand<L, const N: usize> {
    strip: L,
    pixels: [Rgb; N],
    brightness: u8,
    mode: UpdateMode,
}

impl<L: LedStrip, const N: usize> LedBand<L, N> {
    /// Create a band with every pixel off; nothing is sent yet
    pub fn new(strip: L, config: LedConfig) -> Self {
        Self {
            strip,
            pixels: [Rgb::BLACK; N],
            brightness: config.brightness,
            mode: config.mode,
        }
    }

    /// Number of pixels
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the band has no pixels
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Colour held for a pixel (index clamped to the band)
    pub fn pixel(&self, index: usize) -> Rgb {
        match N {
            0 => Rgb::BLACK,
            _ => self.pixels[index.min(N - 1)],
        }
    }

    /// Current brightness
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Current update mode
    pub fn mode(&self) -> UpdateMode {
        self.mode
    }

    /// Switch update mode
    pub fn set_mode(&mut self, mode: UpdateMode) {
        self.mode = mode;
    }

    /// Set every pixel to one colour
    pub fn set_all(&mut self, color: Rgb) -> Result<(), PeripheralIoError> {
        self.pixels = [color; N];
        self.changed()
    }

    /// Set one pixel; out-of-range indices land on the last pixel
    pub fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), PeripheralIoError> {
        if N == 0 {
            return Ok(());
        }
        self.pixels[index.min(N - 1)] = color;
        self.changed()
    }

    /// Turn every pixel off
    pub fn clear(&mut self) -> Result<(), PeripheralIoError> {
        self.set_all(Rgb::BLACK)
    }

    /// Set flush brightness (0-255)
    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), PeripheralIoError> {
        self.brightness = brightness;
        self.changed()
    }

    /// Spread the hue wheel across the band
    pub fn rainbow(&mut self) -> Result<(), PeripheralIoError> {
        for (i, pixel) in self.pixels.iter_mut().enumerate() {
            *pixel = hue_to_rgb(rainbow_hue(i, N));
        }
        self.changed()
    }

    /// Send the current pixels to the strip
    pub fn show(&mut self) -> Result<(), PeripheralIoError> {
        let mut frame = [[0u8; 3]; N];
        for (out, pixel) in frame.iter_mut().zip(self.pixels.iter()) {
            *out = pixel.scaled(self.brightness);
        }
        self.strip.write(&frame)?;
        Ok(())
    }

    fn changed(&mut self) -> Result<(), PeripheralIoError> {
        match self.mode {
            UpdateMode::Auto => self.show(),
            UpdateMode::Manual => Ok(()),
        }
    }

    /// Give back the strip
    pub fn release(self) -> L {
        self.strip
    }
}
