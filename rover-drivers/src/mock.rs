//! Test doubles for the HAL traits

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use rover_core::traits::ByteStore;
use rover_hal::{
    Clock, FlexPin, I2cBus, I2cError, InputPin, LedError, LedStrip, OutputPin, PwmBank, PwmError,
};

use crate::error::PeripheralIoError;

/// I2C bus that records every write and serves reads from a queue
#[derive(Default)]
pub struct RecordingBus {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub reads: VecDeque<u8>,
    /// Fail the nth write (0-based) with a NACK
    pub fail_on_write: Option<usize>,
}

impl RecordingBus {
    /// Register writes `(register, value)` sent to `address`
    pub fn register_writes(&self, address: u8) -> Vec<(u8, u8)> {
        self.writes
            .iter()
            .filter(|(a, data)| *a == address && data.len() == 2)
            .map(|(_, data)| (data[0], data[1]))
            .collect()
    }
}

impl I2cBus for RecordingBus {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cError> {
        if self.fail_on_write == Some(self.writes.len()) {
            self.fail_on_write = None;
            return Err(I2cError::Nack);
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, _address: u8, buf: &mut [u8]) -> Result<(), I2cError> {
        for byte in buf.iter_mut() {
            *byte = self.reads.pop_front().unwrap_or(0);
        }
        Ok(())
    }
}

/// In-memory byte store with an access counter
pub struct MemoryStore {
    pub bytes: [i8; 64],
    pub reads: usize,
    pub writes: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            bytes: [0; 64],
            reads: 0,
            writes: 0,
        }
    }
}

impl ByteStore for MemoryStore {
    type Error = PeripheralIoError;

    fn write_byte(&mut self, address: u16, value: i8) -> Result<(), PeripheralIoError> {
        self.writes += 1;
        self.bytes[address as usize] = value;
        Ok(())
    }

    fn read_byte(&mut self, address: u16) -> Result<i8, PeripheralIoError> {
        self.reads += 1;
        Ok(self.bytes[address as usize])
    }
}

/// Delay that only adds up the requested time
#[derive(Default, Clone)]
pub struct TallyDelay {
    pub total_ns: Rc<Cell<u64>>,
    pub calls: Rc<Cell<usize>>,
}

impl TallyDelay {
    pub fn total_us(&self) -> u64 {
        self.total_ns.get() / 1_000
    }
}

impl DelayNs for TallyDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns.set(self.total_ns.get() + ns as u64);
        self.calls.set(self.calls.get() + 1);
    }
}

/// Four-channel PWM bank that keeps its last settings
#[derive(Default)]
pub struct MockPwm {
    pub duties: [u16; 4],
    pub levels: [Option<bool>; 4],
    pub period_us: Option<u32>,
    pub period_changes: usize,
}

impl PwmBank for MockPwm {
    fn channel_count(&self) -> usize {
        4
    }

    fn set_duty(&mut self, channel: usize, duty: u16) -> Result<(), PwmError> {
        let slot = self.duties.get_mut(channel).ok_or(PwmError::InvalidChannel)?;
        *slot = duty;
        self.levels[channel] = None;
        Ok(())
    }

    fn set_level(&mut self, channel: usize, high: bool) -> Result<(), PwmError> {
        let slot = self.levels.get_mut(channel).ok_or(PwmError::InvalidChannel)?;
        *slot = Some(high);
        self.duties[channel] = 0;
        Ok(())
    }

    fn set_period_us(&mut self, period_us: u32) -> Result<(), PwmError> {
        self.period_us = Some(period_us);
        self.period_changes += 1;
        Ok(())
    }
}

/// Clock advanced by hand, shared with the pins that consume time
#[derive(Default, Clone)]
pub struct FakeClock {
    pub now: Rc<Cell<u64>>,
}

impl FakeClock {
    pub fn advance(&self, us: u64) {
        self.now.set(self.now.get() + us);
    }
}

impl Clock for FakeClock {
    fn now_micros(&self) -> u64 {
        // Every query costs a microsecond so polling loops make progress
        let t = self.now.get();
        self.now.set(t + 1);
        t
    }
}

/// One phase of a scripted input line
#[derive(Debug, Clone, Copy)]
pub struct Phase {
    pub high: bool,
    pub duration_us: u64,
}

/// Pin whose input level follows a script against a fake clock
///
/// The script starts when the pin is switched to input. Output writes are
/// recorded.
pub struct ScriptedPin {
    pub clock: FakeClock,
    pub scripts: VecDeque<Vec<Phase>>,
    current: Vec<Phase>,
    started_at: u64,
    output: bool,
    pub outputs: Vec<bool>,
}

impl ScriptedPin {
    pub fn new(clock: FakeClock, scripts: Vec<Vec<Phase>>) -> Self {
        Self {
            clock,
            scripts: scripts.into(),
            current: Vec::new(),
            started_at: 0,
            output: false,
            outputs: Vec::new(),
        }
    }
}

impl OutputPin for ScriptedPin {
    fn set_high(&mut self) {
        self.output = true;
        self.outputs.push(true);
    }

    fn set_low(&mut self) {
        self.output = false;
        self.outputs.push(false);
    }

    fn is_set_high(&self) -> bool {
        self.output
    }
}

impl InputPin for ScriptedPin {
    fn is_high(&self) -> bool {
        let elapsed = self.clock.now.get().saturating_sub(self.started_at);
        let mut edge = 0;
        for phase in &self.current {
            edge += phase.duration_us;
            if elapsed < edge {
                return phase.high;
            }
        }
        false
    }
}

impl FlexPin for ScriptedPin {
    fn set_as_output(&mut self) {}

    fn set_as_input(&mut self) {
        self.current = self.scripts.pop_front().unwrap_or_default();
        self.started_at = self.clock.now.get();
    }
}

/// Output pin that records its level history
#[derive(Default)]
pub struct RecordingPin {
    pub level: bool,
    pub history: Vec<bool>,
}

impl OutputPin for RecordingPin {
    fn set_high(&mut self) {
        self.level = true;
        self.history.push(true);
    }

    fn set_low(&mut self) {
        self.level = false;
        self.history.push(false);
    }

    fn is_set_high(&self) -> bool {
        self.level
    }
}

/// Input pin fed from a queue of levels, one per read
pub struct QueuedInput {
    pub levels: std::cell::RefCell<VecDeque<bool>>,
    pub idle: bool,
}

impl QueuedInput {
    pub fn new(levels: Vec<bool>, idle: bool) -> Self {
        Self {
            levels: std::cell::RefCell::new(levels.into()),
            idle,
        }
    }
}

impl InputPin for QueuedInput {
    fn is_high(&self) -> bool {
        self.levels.borrow_mut().pop_front().unwrap_or(self.idle)
    }
}

/// LED strip that keeps every frame written
#[derive(Default)]
pub struct CaptureStrip {
    pub frames: Vec<Vec<[u8; 3]>>,
}

impl LedStrip for CaptureStrip {
    fn write(&mut self, frame: &[[u8; 3]]) -> Result<(), LedError> {
        self.frames.push(frame.to_vec());
        Ok(())
    }
}
