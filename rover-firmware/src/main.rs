//! Rover firmware
//!
//! Main firmware binary for the RP2040 rover board: four-wheel steering on
//! a PCA9685 servo controller, two H-bridge drive motors, a sonar on the
//! mast and a 16-key keypad for teleoperation.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::gpio::{Flex, Input, Level, Output, Pull};
use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::{I2C0, PIO0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Delay, Timer};
use embedded_hal_bus::i2c::RefCellDevice;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use rover_core::keypad::KeyCode;
use rover_core::led::Rgb;
use rover_core::teleop::command_for;
use rover_drivers::{Eeprom, Keypad, LedBand, MotorBridge, ServoController, Sonar};
use rover_hal_rp2040::{EmbassyClock, HalI2c, MotorPwm, RpFlex, RpInput, RpOutput, Ws2812Strip};

use crate::board::{
    I2C_FREQUENCY_HZ, INITIAL_MOTOR_PERIOD_US, KEY_DEBOUNCE_MS, LED_PIXELS, ROVER_CONFIG,
};
use crate::control::Rover;

mod board;
mod control;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Shared I2C bus for the servo controller and the EEPROM (must live forever)
static I2C_BUS: StaticCell<RefCell<I2c<'static, I2C0, Blocking>>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Rover firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // I2C0 on GPIO4 (SDA) / GPIO5 (SCL)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let bus = I2C_BUS.init(RefCell::new(I2c::new_blocking(
        p.I2C0, p.PIN_5, p.PIN_4, i2c_config,
    )));

    let eeprom = Eeprom::new(
        HalI2c::new(RefCellDevice::new(bus)),
        Delay,
        ROVER_CONFIG.eeprom,
    );
    let servos = ServoController::new(
        HalI2c::new(RefCellDevice::new(bus)),
        eeprom,
        ROVER_CONFIG.servo,
    );
    info!(
        "Servo controller at {=u8:#x}, EEPROM at {=u8:#x}",
        ROVER_CONFIG.servo.address, ROVER_CONFIG.eeprom.address
    );

    // Drive motors: left on slice 1 (GPIO2/3), right on slice 3 (GPIO6/7)
    let left = Pwm::new_output_ab(p.PWM_SLICE1, p.PIN_2, p.PIN_3, PwmConfig::default());
    let right = Pwm::new_output_ab(p.PWM_SLICE3, p.PIN_6, p.PIN_7, PwmConfig::default());
    let motor_pwm = unwrap!(MotorPwm::new(
        left,
        right,
        clk_sys_freq(),
        INITIAL_MOTOR_PERIOD_US
    ));
    let motors = MotorBridge::new(motor_pwm);
    info!("Motor PWM initialized");

    // Sonar shares one pin for trigger and echo
    let sonar = Sonar::new(
        RpFlex(Flex::new(p.PIN_13)),
        EmbassyClock,
        Delay,
        ROVER_CONFIG.sonar,
    );

    // Keypad clock idles high
    let mut keypad = Keypad::new(
        RpOutput(Output::new(p.PIN_16, Level::High)),
        RpInput(Input::new(p.PIN_15, Pull::Up)),
        Delay,
        ROVER_CONFIG.keypad,
    );

    // Status LEDs on PIO0 state machine 0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let strip: Ws2812Strip<'_, PIO0, 0, LED_PIXELS> = Ws2812Strip::new(PioWs2812::new(
        &mut common,
        sm0,
        p.DMA_CH0,
        p.PIN_22,
        &program,
    ));
    let leds = LedBand::<_, LED_PIXELS>::new(strip, ROVER_CONFIG.led);
    info!("LED band initialized ({} pixels)", LED_PIXELS);

    let mut rover = Rover::new(servos, motors, leds, sonar, ROVER_CONFIG.teleop);

    if let Err(e) = rover.home() {
        warn!("Homing failed: {:?}", e);
    }
    if let Err(e) = rover.leds().rainbow() {
        warn!("LED update failed: {:?}", e);
    }

    info!("Ready, waiting for keys");

    let mut delay = Delay;
    loop {
        let Some(code) = keypad.wait_for_key() else {
            continue;
        };
        let Some(key) = code.first_key() else {
            debug!("Unmapped key code {=u16:#x}", code.0);
            continue;
        };
        if code != KeyCode::from(key) {
            debug!("Chord {=u16:#x}, acting on {:?}", code.0, key);
        }

        let command = command_for(key, &ROVER_CONFIG.teleop);
        info!("Key {:?} -> {:?}", key, command);

        if let Err(e) = rover.handle(&command, &mut delay) {
            error!("Command failed: {:?}", e);
            if let Err(e) = rover.leds().set_all(Rgb::RED) {
                warn!("LED update failed: {:?}", e);
            }
        }

        Timer::after_millis(KEY_DEBOUNCE_MS).await;
    }
}
