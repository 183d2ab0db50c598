//! Motor PWM on two RP2040 PWM slices
//!
//! Each drive side uses one slice, with its forward line on output A and
//! its reverse line on output B. Both slices share one period.
//!
//! # Period math
//!
//! A slice counts from 0 to TOP at `clk_sys / divider`, where the divider
//! is an 8.4 fixed-point value (1.0 to 255.9375). For a period `T` the
//! slice needs `clk_sys * T` cycles. The smallest divider that keeps TOP
//! within 16 bits gives the finest duty resolution:
//!
//! ```text
//! divider_x16 = ceil(cycles * 16 / 65536)
//! top         = cycles * 16 / divider_x16 - 1
//! ```
//!
//! At 125 MHz this covers periods up to about 134 ms.

use embassy_rp::pwm::{Config, Pwm};
use fixed::types::extra::U4;
use fixed::FixedU16;
use rover_hal::pwm::MAX_DUTY;
use rover_hal::{PwmBank, PwmError};

/// Smallest divider (1.0) in 1/16 units
const MIN_DIVIDER_X16: u64 = 16;

/// Largest divider (255.9375) in 1/16 units
const MAX_DIVIDER_X16: u64 = 0xFFF;

/// Divider and TOP for one PWM period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeriodSetting {
    /// Clock divider in 1/16 units
    pub divider_x16: u16,
    /// Counter wrap value
    pub top: u16,
}

/// Work out divider and TOP for a period
pub fn period_setting(sys_clk_hz: u32, period_us: u32) -> Result<PeriodSetting, PwmError> {
    let cycles = sys_clk_hz as u64 * period_us as u64 / 1_000_000;
    if cycles < 2 {
        return Err(PwmError::PeriodOutOfRange);
    }

    let divider_x16 = (cycles * 16).div_ceil(1 << 16).max(MIN_DIVIDER_X16);
    if divider_x16 > MAX_DIVIDER_X16 {
        return Err(PwmError::PeriodOutOfRange);
    }

    let top = cycles * 16 / divider_x16 - 1;
    Ok(PeriodSetting {
        divider_x16: divider_x16 as u16,
        top: top.min(u16::MAX as u64) as u16,
    })
}

/// Compare value for a 10-bit duty at a given TOP
///
/// Full duty maps past TOP so the output never drops.
pub fn compare_for_duty(duty: u16, top: u16) -> u16 {
    let duty = duty.min(MAX_DUTY) as u32;
    let span = top as u32 + 1;
    (duty * span / MAX_DUTY as u32).min(u16::MAX as u32) as u16
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineOutput {
    Duty(u16),
    Level(bool),
}

impl LineOutput {
    fn compare(self, top: u16) -> u16 {
        match self {
            LineOutput::Duty(duty) => compare_for_duty(duty, top),
            LineOutput::Level(true) => top.saturating_add(1),
            LineOutput::Level(false) => 0,
        }
    }
}

/// Four motor lines on two PWM slices
///
/// Channels 0/1 are the left slice A/B, channels 2/3 the right slice A/B.
pub struct MotorPwm<'d> {
    slices: [Pwm<'d>; 2],
    config: Config,
    outputs: [LineOutput; 4],
    sys_clk_hz: u32,
}

impl<'d> MotorPwm<'d> {
    /// Take two slices already bound to their A/B pins
    ///
    /// All lines start low at the given period.
    pub fn new(
        left: Pwm<'d>,
        right: Pwm<'d>,
        sys_clk_hz: u32,
        period_us: u32,
    ) -> Result<Self, PwmError> {
        let mut pwm = Self {
            slices: [left, right],
            config: Config::default(),
            outputs: [LineOutput::Level(false); 4],
            sys_clk_hz,
        };
        pwm.set_period_us(period_us)?;
        Ok(pwm)
    }

    fn apply(&mut self, slice: usize) {
        let top = self.config.top;
        let mut config = self.config.clone();
        config.compare_a = self.outputs[slice * 2].compare(top);
        config.compare_b = self.outputs[slice * 2 + 1].compare(top);
        self.slices[slice].set_config(&config);
    }

    fn set_output(&mut self, channel: usize, output: LineOutput) -> Result<(), PwmError> {
        let slot = self
            .outputs
            .get_mut(channel)
            .ok_or(PwmError::InvalidChannel)?;
        *slot = output;
        self.apply(channel / 2);
        Ok(())
    }
}

impl PwmBank for MotorPwm<'_> {
    fn channel_count(&self) -> usize {
        4
    }

    fn set_duty(&mut self, channel: usize, duty: u16) -> Result<(), PwmError> {
        self.set_output(channel, LineOutput::Duty(duty))
    }

    fn set_level(&mut self, channel: usize, high: bool) -> Result<(), PwmError> {
        self.set_output(channel, LineOutput::Level(high))
    }

    fn set_period_us(&mut self, period_us: u32) -> Result<(), PwmError> {
        let setting = period_setting(self.sys_clk_hz, period_us)?;
        self.config.divider = FixedU16::<U4>::from_bits(setting.divider_x16);
        self.config.top = setting.top;
        self.apply(0);
        self.apply(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYS: u32 = 125_000_000;

    #[test]
    fn test_period_settings_fit_sixteen_bits() {
        for period in [30_000, 40_000, 60_000] {
            let s = period_setting(SYS, period).unwrap();
            assert!(s.divider_x16 >= 16 && s.divider_x16 <= 0xFFF);

            // Actual period within 0.1% of the request
            let actual_us = (s.top as u64 + 1) * s.divider_x16 as u64 * 1_000_000 / 16 / SYS as u64;
            let err = (actual_us as i64 - period as i64).abs();
            assert!(err * 1000 <= period as i64, "period {} got {}", period, actual_us);
        }
    }

    #[test]
    fn test_sixty_ms_divider() {
        let s = period_setting(SYS, 60_000).unwrap();
        assert_eq!(s.divider_x16, 1832);
        assert_eq!(s.top, 65501);
    }

    #[test]
    fn test_short_period_uses_unit_divider() {
        let s = period_setting(SYS, 100).unwrap();
        assert_eq!(s.divider_x16, 16);
        assert_eq!(s.top, 12_499);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(period_setting(SYS, 0), Err(PwmError::PeriodOutOfRange));
        assert_eq!(period_setting(SYS, 200_000), Err(PwmError::PeriodOutOfRange));
    }

    #[test]
    fn test_compare_scaling() {
        assert_eq!(compare_for_duty(0, 999), 0);
        assert_eq!(compare_for_duty(1023, 999), 1000);
        assert_eq!(compare_for_duty(511, 1022), 511);
        assert_eq!(compare_for_duty(2000, 999), 1000);
    }
}
