//! RP2350 GPIO output
//!
//! Wraps an `embassy_rp` output pin to implement `GpioInterface`.

use crate::platform::{
    traits::{GpioInterface, GpioMode},
    Result,
};
use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::Peri;

/// Push-pull output pin
pub struct Rp2350Output<'d> {
    pin: Output<'d>,
}

impl<'d> Rp2350Output<'d> {
    /// Configure `pin` as an output driven to `initial`
    pub fn new(pin: Peri<'d, impl Pin>, initial: Level) -> Self {
        Self {
            pin: Output::new(pin, initial),
        }
    }
}

impl GpioInterface for Rp2350Output<'_> {
    fn set_high(&mut self) -> Result<()> {
        self.pin.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.pin.set_low();
        Ok(())
    }

    fn toggle(&mut self) -> Result<()> {
        self.pin.toggle();
        Ok(())
    }

    fn read(&self) -> bool {
        self.pin.is_set_high()
    }

    fn mode(&self) -> GpioMode {
        GpioMode::OutputPushPull
    }
}
