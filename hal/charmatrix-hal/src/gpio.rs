//! GPIO pin abstractions
//!
//! Status LEDs are written from interrupt context, so implementations
//! must be non-blocking register writes.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip. None of the methods may block or allocate.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }

    fn is_set_high(&self) -> bool {
        (**self).is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
        writes: u32,
    }

    impl OutputPin for MockPin {
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
    fn test_set_state() {
        let mut pin = MockPin {
            high: false,
            writes: 0,
        };

        pin.set_state(true);
        assert!(pin.is_set_high());

        pin.set_state(false);
        assert!(pin.is_set_low());
        assert_eq!(pin.writes, 2);
    }

    #[test]
    fn test_forward_through_reference() {
        let mut pin = MockPin {
            high: false,
            writes: 0,
        };

        fn drive<P: OutputPin>(mut pin: P) {
            pin.set_state(true);
        }

        drive(&mut pin);
        assert!(pin.high);
    }
}
