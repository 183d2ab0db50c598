//! Bit-banged 16-key keypad
//!
//! The keypad controller pulls its data line low when a word is ready and
//! then shifts 16 bits out MSB first, one per falling clock edge. Held keys
//! read as 0 bits, so the word is inverted before decoding.
//!
//! Waiting for the ready signal is a polling loop. It sleeps 1 ms every
//! `yield_interval` polls so it does not monopolise the core, and it can be
//! bounded with `max_polls`.

use embedded_hal::delay::DelayNs;
use rover_core::config::KeypadConfig;
use rover_core::keypad::{Key, KeyCode};
use rover_hal::{InputPin, OutputPin};

/// Clock half-period while shifting (µs)
const CLOCK_HALF_PERIOD_US: u32 = 2;

/// Bits per keypad word
const WORD_BITS: u32 = 16;

/// Keypad on a clock output and a data input
pub struct Keypad<C, S, D> {
    clock: C,
    data: S,
    delay: D,
    config: KeypadConfig,
    polls: u32,
}

impl<C, S, D> Keypad<C, S, D>
where
    C: OutputPin,
    S: InputPin,
    D: DelayNs,
{
    pub fn new(clock: C, data: S, delay: D, config: KeypadConfig) -> Self {
        Self {
            clock,
            data,
            delay,
            config,
            polls: 0,
        }
    }

    /// Block until a key is held and return its code
    ///
    /// Returns `None` only when `max_polls` is set and runs out. All-zero
    /// words (nothing held) are discarded and the wait starts again.
    pub fn wait_for_key(&mut self) -> Option<KeyCode> {
        self.polls = 0;
        loop {
            if !self.wait_ready() {
                log_debug!("Keypad wait gave up after {} polls", self.polls);
                return None;
            }
            let code = KeyCode::from_raw(self.read_word());
            if !code.is_empty() {
                return Some(code);
            }
        }
    }

    /// Block until a key is held and decode it
    pub fn read_key(&mut self) -> Option<Key> {
        self.wait_for_key().and_then(KeyCode::first_key)
    }

    /// Wait for the data line to drop, yielding periodically
    fn wait_ready(&mut self) -> bool {
        self.clock.set_high();
        let mut since_yield = 0u32;
        while self.data.is_high() {
            self.polls = self.polls.saturating_add(1);
            if let Some(max) = self.config.max_polls {
                if self.polls >= max {
                    return false;
                }
            }
            since_yield += 1;
            if since_yield > self.config.yield_interval {
                since_yield = 0;
                self.delay.delay_ms(1);
            }
        }
        true
    }

    /// Shift in one 16-bit word, MSB first
    fn read_word(&mut self) -> u16 {
        let mut word = 0u16;
        for _ in 0..WORD_BITS {
            self.clock.set_low();
            self.delay.delay_us(CLOCK_HALF_PERIOD_US);
            word = (word << 1) | self.data.is_high() as u16;
            self.clock.set_high();
            self.delay.delay_us(CLOCK_HALF_PERIOD_US);
        }
        word
    }

    /// Give back the pins and delay
    pub fn release(self) -> (C, S, D) {
        (self.clock, self.data, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{QueuedInput, RecordingPin, TallyDelay};

    /// Data line levels for `busy` ready polls followed by a raw word
    fn frame(busy: usize, raw: u16) -> Vec<bool> {
        let mut levels = vec![true; busy];
        levels.push(false);
        for bit in (0..16).rev() {
            levels.push(raw & (1 << bit) != 0);
        }
        levels
    }

    fn keypad(
        levels: Vec<bool>,
        config: KeypadConfig,
    ) -> Keypad<RecordingPin, QueuedInput, TallyDelay> {
        Keypad::new(
            RecordingPin::default(),
            QueuedInput::new(levels, true),
            TallyDelay::default(),
            config,
        )
    }

    #[test]
    fn test_reads_inverted_word() {
        let mut pad = keypad(frame(3, !Key::Forward.mask()), KeypadConfig::new());
        assert_eq!(pad.wait_for_key(), Some(KeyCode(0x0400)));

        let (clock, _, _) = pad.release();
        // One high to arm, then low/high per bit
        assert_eq!(clock.history.len(), 1 + 2 * 16);
        assert!(clock.level);
    }

    #[test]
    fn test_empty_word_is_retried() {
        let mut levels = frame(0, u16::MAX);
        levels.extend(frame(2, !Key::SpinLeft.mask()));
        let mut pad = keypad(levels, KeypadConfig::new());
        assert_eq!(pad.read_key(), Some(Key::SpinLeft));
    }

    #[test]
    fn test_yields_while_waiting() {
        let config = KeypadConfig {
            yield_interval: 10,
            max_polls: None,
        };
        let mut pad = keypad(frame(35, !Key::Stop.mask()), config);
        assert_eq!(pad.read_key(), Some(Key::Stop));

        let (_, _, delay) = pad.release();
        // 35 busy polls with a yield after every 11th; 32 half-periods of 2 µs
        assert_eq!(delay.total_us(), 3 * 1_000 + 64);
    }

    #[test]
    fn test_bounded_wait_gives_up() {
        let config = KeypadConfig {
            yield_interval: 1000,
            max_polls: Some(50),
        };
        let mut pad = keypad(Vec::new(), config);
        assert_eq!(pad.wait_for_key(), None);
        assert_eq!(pad.read_key(), None);
    }
}
