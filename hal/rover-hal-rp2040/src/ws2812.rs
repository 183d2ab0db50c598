//! WS2812 LED strip on embassy-rp's PIO program
//!
//! The wire protocol lives in `embassy_rp::pio_programs::ws2812`; this
//! module only adapts it to [`LedStrip`]. The embassy driver writes a fixed
//! array of `N` pixels over DMA, so shorter frames are padded with dark
//! pixels and the write is driven to completion before returning.

use embassy_futures::block_on;
use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use rover_hal::{LedError, LedStrip};
use smart_leds::RGB8;

/// Fixed-length pixel array for a frame, dark past its end
pub fn frame_colors<const N: usize>(frame: &[[u8; 3]]) -> Result<[RGB8; N], LedError> {
    if frame.len() > N {
        return Err(LedError::FrameTooLong);
    }
    let mut colors = [RGB8::default(); N];
    for (color, &[r, g, b]) in colors.iter_mut().zip(frame) {
        *color = RGB8::new(r, g, b);
    }
    Ok(colors)
}

/// `N`-pixel strip driven by one PIO state machine
pub struct Ws2812Strip<'d, P: Instance, const S: usize, const N: usize> {
    inner: PioWs2812<'d, P, S, N>,
}

impl<'d, P: Instance, const S: usize, const N: usize> Ws2812Strip<'d, P, S, N> {
    pub fn new(inner: PioWs2812<'d, P, S, N>) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> PioWs2812<'d, P, S, N> {
        self.inner
    }
}

impl<P: Instance, const S: usize, const N: usize> LedStrip for Ws2812Strip<'_, P, S, N> {
    fn write(&mut self, frame: &[[u8; 3]]) -> Result<(), LedError> {
        let colors = frame_colors::<N>(frame)?;
        block_on(self.inner.write(&colors));
        Ok(())
    }
}
