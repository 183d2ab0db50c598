//! Keypad control loop state
//!
//! Owns the motion coordinator and the peripherals a teleop command may
//! touch, and executes one command at a time to completion.

use defmt::{info, warn};
use embedded_hal::delay::DelayNs;
use rover_core::config::TeleopConfig;
use rover_core::led::Rgb;
use rover_core::motion::{MotionCoordinator, MotionIntent, StopMode};
use rover_core::servo::{NamedServo, ServoGroup};
use rover_core::sonar::PingUnit;
use rover_core::teleop::{nudge_mast, TeleopCommand};
use rover_core::traits::ByteStore;
use rover_drivers::{LedBand, MotorBridge, PeripheralIoError, ServoController, Sonar};
use rover_hal::{Clock, FlexPin, I2cBus, LedStrip, PwmBank};

/// Everything the control loop drives
pub struct Rover<B, S, P, L, F, C, D, const N: usize> {
    motion: MotionCoordinator<ServoController<B, S>, MotorBridge<P>>,
    leds: LedBand<L, N>,
    sonar: Sonar<F, C, D>,
    teleop: TeleopConfig,
    mast_angle: i16,
}

impl<B, S, P, L, F, C, D, const N: usize> Rover<B, S, P, L, F, C, D, N>
where
    B: I2cBus,
    S: ByteStore<Error = PeripheralIoError>,
    P: PwmBank,
    L: LedStrip,
    F: FlexPin,
    C: Clock,
    D: DelayNs,
{
    pub fn new(
        servos: ServoController<B, S>,
        motors: MotorBridge<P>,
        leds: LedBand<L, N>,
        sonar: Sonar<F, C, D>,
        teleop: TeleopConfig,
    ) -> Self {
        Self {
            motion: MotionCoordinator::new(servos, motors),
            leds,
            sonar,
            teleop,
            mast_angle: 0,
        }
    }

    /// Stop the motors and centre the wheels and mast
    pub fn home(&mut self) -> Result<(), PeripheralIoError> {
        self.motion.stop(StopMode::Coast)?;
        self.motion.zero(ServoGroup::Wheels)?;
        self.motion.zero(ServoGroup::Mast)?;
        self.mast_angle = 0;
        Ok(())
    }

    /// Execute one teleop command
    pub fn handle<T: DelayNs>(
        &mut self,
        command: &TeleopCommand,
        delay: &mut T,
    ) -> Result<(), PeripheralIoError> {
        if command.moves_forward() {
            let cm = self.sonar.ping(PingUnit::Centimeters);
            info!("Sonar: {} cm ahead", cm);
        }

        match command {
            TeleopCommand::Motion(plan) => {
                for intent in plan {
                    self.motion.execute(*intent, delay)?;
                }
                self.leds.set_all(status_colour(plan.last()))?;
            }
            TeleopCommand::MastNudge(delta) => {
                self.mast_angle = nudge_mast(self.mast_angle, *delta);
                self.motion
                    .servos()
                    .set_angle(NamedServo::Mast.channel(), self.mast_angle)?;
                info!("Mast at {} deg", self.mast_angle);
            }
            TeleopCommand::Home => {
                self.home()?;
                self.leds.set_all(Rgb::WHITE)?;
            }
            TeleopCommand::SaveOffsets => {
                self.motion.servos().persist_offsets()?;
                info!("Servo offsets saved");
                self.leds.rainbow()?;
            }
            TeleopCommand::LoadOffsets => {
                let table = self.motion.servos().restore_offsets()?;
                info!("Servo offsets loaded: {}", table.as_array());
                self.leds.set_all(Rgb::BLUE)?;
            }
            TeleopCommand::ClearOffsets => {
                self.motion.servos().clear_offsets();
                warn!("Servo offsets cleared (not saved)");
                self.leds.set_all(Rgb::ORANGE)?;
            }
        }
        Ok(())
    }

    /// Status band, for start-up indication
    pub fn leds(&mut self) -> &mut LedBand<L, N> {
        &mut self.leds
    }
}

/// Band colour after a motion
fn status_colour(last: Option<&MotionIntent>) -> Rgb {
    match last {
        Some(MotionIntent::Stop { .. }) => Rgb::RED,
        Some(MotionIntent::Spin { .. }) => Rgb::PURPLE,
        Some(MotionIntent::Move { .. }) => Rgb::GREEN,
        Some(MotionIntent::Steer { .. }) => Rgb::YELLOW,
        Some(MotionIntent::Zero { .. }) | None => Rgb::BLACK,
    }
}
