//! LED colours and pixel arithmetic
//!
//! Colours are packed `0xRRGGBB` words. The wire colour order (GRB for
//! WS2812-style pixels) is the concern of the strip implementation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of pixels on the status band
pub const DEFAULT_PIXELS: usize = 4;

/// Default brightness (0-255)
pub const DEFAULT_BRIGHTNESS: u8 = 40;

/// A packed 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb(pub u32);

impl Rgb {
    pub const RED: Rgb = Rgb(0xff1493);
    pub const ORANGE: Rgb = Rgb(0xffa500);
    pub const YELLOW: Rgb = Rgb(0xffff00);
    pub const GREEN: Rgb = Rgb(0x00ff00);
    pub const BLUE: Rgb = Rgb(0x0000ff);
    pub const INDIGO: Rgb = Rgb(0x4b0082);
    pub const VIOLET: Rgb = Rgb(0x8a2be2);
    pub const PURPLE: Rgb = Rgb(0xff00ff);
    pub const WHITE: Rgb = Rgb(0xffffff);
    pub const BLACK: Rgb = Rgb(0x000000);

    /// Red channel
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// `[r, g, b]` after brightness scaling
    pub const fn scaled(self, brightness: u8) -> [u8; 3] {
        [
            scale(self.red(), brightness),
            scale(self.green(), brightness),
            scale(self.blue(), brightness),
        ]
    }
}

/// Pack red, green and blue into one colour word
pub const fn convert_rgb(red: u8, green: u8, blue: u8) -> Rgb {
    Rgb(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
}

const fn scale(channel: u8, brightness: u8) -> u8 {
    ((channel as u16 * brightness as u16) / 255) as u8
}

/// Fully saturated colour for a hue in degrees
///
/// Hues wrap at 360.
pub fn hue_to_rgb(hue: u16) -> Rgb {
    let hue = hue % 360;
    let sector = hue / 60;
    let rising = ((hue % 60) as u32 * 255 / 60) as u8;
    let falling = 255 - rising;
    match sector {
        0 => convert_rgb(255, rising, 0),
        1 => convert_rgb(falling, 255, 0),
        2 => convert_rgb(0, 255, rising),
        3 => convert_rgb(0, falling, 255),
        4 => convert_rgb(rising, 0, 255),
        _ => convert_rgb(255, 0, falling),
    }
}

/// Hue for pixel `index` when spreading 0-360° across `count` pixels
pub fn rainbow_hue(index: usize, count: usize) -> u16 {
    if count == 0 {
        return 0;
    }
    ((index % count) * 360 / count) as u16
}

/// When pixel changes reach the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UpdateMode {
    /// Changes are buffered until `show`
    Manual,
    /// Every change is flushed immediately
    #[default]
    Auto,
}
