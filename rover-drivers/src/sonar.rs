//! Single-pin ultrasonic sonar
//!
//! Trigger and echo share one line: the pin is driven for the trigger
//! pulse and then released to read the echo. The echo width is measured
//! by busy-polling against a microsecond clock.
//!
//! A missed echo reads as 0. Up to `attempts` pings are sent and the first
//! non-zero echo wins; if all miss, the reading is 0 in every unit.

use embedded_hal::delay::DelayNs;
use rover_core::config::SonarConfig;
use rover_core::sonar::{convert, echo_timeout_us, PingUnit};
use rover_hal::{Clock, FlexPin};

/// Trigger line settle time before the pulse (µs)
const TRIGGER_SETTLE_US: u32 = 2;

/// Trigger pulse width (µs)
const TRIGGER_PULSE_US: u32 = 10;

/// Sonar on a shared trigger/echo pin
pub struct Sonar<P, C, D> {
    pin: P,
    clock: C,
    delay: D,
    config: SonarConfig,
}

impl<P, C, D> Sonar<P, C, D>
where
    P: FlexPin,
    C: Clock,
    D: DelayNs,
{
    pub fn new(pin: P, clock: C, delay: D, config: SonarConfig) -> Self {
        Self {
            pin,
            clock,
            delay,
            config,
        }
    }

    /// Range in the requested unit, 0 if nothing was heard
    pub fn ping(&mut self, unit: PingUnit) -> u32 {
        convert(self.echo_us(), unit)
    }

    /// Raw echo width of the first successful attempt
    pub fn echo_us(&mut self) -> u32 {
        let timeout = echo_timeout_us(self.config.max_range_cm) as u64;
        for attempt in 0..self.config.attempts {
            self.trigger();
            let echo = self.pulse_in(timeout);
            if echo > 0 {
                return echo;
            }
            log_debug!("Sonar attempt {} heard nothing", attempt);
        }
        0
    }

    fn trigger(&mut self) {
        self.pin.set_as_output();
        self.pin.set_low();
        self.delay.delay_us(TRIGGER_SETTLE_US);
        self.pin.set_high();
        self.delay.delay_us(TRIGGER_PULSE_US);
        self.pin.set_low();
        self.pin.set_as_input();
    }

    /// Width of the next high pulse, or 0 on timeout
    fn pulse_in(&mut self, timeout_us: u64) -> u32 {
        let start = self.clock.now_micros();
        while self.pin.is_low() {
            if self.clock.elapsed_micros(start) > timeout_us {
                return 0;
            }
        }

        let rise = self.clock.now_micros();
        while self.pin.is_high() {
            if self.clock.elapsed_micros(rise) > timeout_us {
                return 0;
            }
        }
        self.clock.elapsed_micros(rise) as u32
    }

    /// Give back the pin, clock and delay
    pub fn release(self) -> (P, C, D) {
        (self.pin, self.clock, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FakeClock, Phase, ScriptedPin, TallyDelay};

    fn echo(after_us: u64, width_us: u64) -> Vec<Phase> {
        vec![
            Phase {
                high: false,
                duration_us: after_us,
            },
            Phase {
                high: true,
                duration_us: width_us,
            },
        ]
    }

    fn sonar(scripts: Vec<Vec<Phase>>) -> Sonar<ScriptedPin, FakeClock, TallyDelay> {
        let clock = FakeClock::default();
        let pin = ScriptedPin::new(clock.clone(), scripts);
        Sonar::new(pin, clock, TallyDelay::default(), SonarConfig::new())
    }

    #[test]
    fn test_580us_echo() {
        let mut sonar = sonar(vec![echo(100, 580), echo(100, 580), echo(100, 580)]);
        let raw = sonar.ping(PingUnit::Microseconds);
        assert!((578..=582).contains(&raw), "raw echo {}", raw);
        assert_eq!(sonar.ping(PingUnit::Centimeters), 10);
        assert_eq!(sonar.ping(PingUnit::Inches), 4);
    }

    #[test]
    fn test_trigger_waveform() {
        let mut sonar = sonar(vec![echo(10, 300)]);
        sonar.ping(PingUnit::Centimeters);

        let (pin, _, delay) = sonar.release();
        assert_eq!(pin.outputs, vec![false, true, false]);
        assert_eq!(delay.total_us(), 12);
    }

    #[test]
    fn test_retries_until_echo() {
        let mut sonar = sonar(vec![Vec::new(), Vec::new(), echo(50, 1160)]);
        assert_eq!(sonar.ping(PingUnit::Centimeters), 20);

        let (pin, _, _) = sonar.release();
        assert_eq!(pin.outputs.len(), 9);
    }

    #[test]
    fn test_silence_reads_zero_in_every_unit() {
        let mut sonar = sonar(Vec::new());
        assert_eq!(sonar.ping(PingUnit::Centimeters), 0);
        assert_eq!(sonar.ping(PingUnit::Inches), 0);
        assert_eq!(sonar.ping(PingUnit::Microseconds), 0);

        let (pin, _, _) = sonar.release();
        // Ten triggers per reading
        assert_eq!(pin.outputs.len(), 3 * 10 * 3);
    }
}
