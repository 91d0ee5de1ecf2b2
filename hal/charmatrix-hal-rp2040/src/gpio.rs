//! Status LED outputs

use charmatrix_hal::OutputPin;
use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;

/// Push-pull LED output, active high
pub struct LedPin<'d> {
    output: Output<'d>,
}

impl<'d> LedPin<'d> {
    /// Configure `pin` as an output, driven low
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            output: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for LedPin<'_> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
