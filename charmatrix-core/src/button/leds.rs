//! The three status LEDs
//!
//! Green and blue belong to the button handler. Red is driven low once at
//! start-up and then held without any way to write it.

use charmatrix_hal::OutputPin;

/// Red, green and blue LED outputs, all driven low on creation
pub struct StatusLeds<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> StatusLeds<R, G, B> {
    pub fn new(mut red: R, mut green: G, mut blue: B) -> Self {
        red.set_low();
        green.set_low();
        blue.set_low();
        Self { red, green, blue }
    }

    /// Hand out the green and blue pins; red stays parked
    pub fn into_parts(self) -> (ParkedLed<R>, G, B) {
        (ParkedLed { pin: self.red }, self.green, self.blue)
    }
}

/// Output that keeps its last level for the rest of the program
///
/// Owning the pin keeps the output driver configured; nothing can write it.
pub struct ParkedLed<P> {
    pin: P,
}

impl<P: OutputPin> ParkedLed<P> {
    pub fn is_lit(&self) -> bool {
        self.pin.is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingLed {
        high: bool,
        writes: u32,
    }

    impl OutputPin for CountingLed {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_all_start_low() {
        let leds = StatusLeds::new(
            CountingLed { high: true, writes: 0 },
            CountingLed { high: true, writes: 0 },
            CountingLed::default(),
        );

        let (red, green, blue) = leds.into_parts();
        assert!(!red.is_lit());
        assert!(green.is_set_low());
        assert!(blue.is_set_low());
        assert_eq!((green.writes, blue.writes), (1, 1));
    }
}
