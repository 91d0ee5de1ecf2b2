//! Debounce gate and the two-button toggle handler

use charmatrix_hal::OutputPin;

use super::edge::EdgeEvents;
use crate::state::{Indicator, IndicatorToggler};

/// The two physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Toggles the green LED
    A,
    /// Toggles the blue LED
    B,
}

impl Button {
    /// Indicator flipped by this button
    pub fn indicator(self) -> Indicator {
        match self {
            Button::A => Indicator::Green,
            Button::B => Indicator::Blue,
        }
    }
}

/// GPIO numbers of the two buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPins {
    pub button_a: u8,
    pub button_b: u8,
}

impl ButtonPins {
    /// Which button, if any, sits on `gpio`
    pub fn lookup(&self, gpio: u8) -> Option<Button> {
        if gpio == self.button_a {
            Some(Button::A)
        } else if gpio == self.button_b {
            Some(Button::B)
        } else {
            None
        }
    }
}

/// Accepted press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Toggle {
    pub button: Button,
    /// New state of the button's LED
    pub led_on: bool,
}

/// "Reject if too soon" gate for one button
///
/// The last accepted press starts at 0 µs, so presses during the first
/// window after boot are rejected too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window_us: u64,
    last_accept_us: u64,
}

impl Debouncer {
    pub const fn new(window_us: u64) -> Self {
        Self {
            window_us,
            last_accept_us: 0,
        }
    }

    /// Accept the press at `now_us` if the window has elapsed
    ///
    /// Rejected presses do not restart the window.
    pub fn accept(&mut self, now_us: u64) -> bool {
        if now_us.saturating_sub(self.last_accept_us) >= self.window_us {
            self.last_accept_us = now_us;
            true
        } else {
            false
        }
    }

    /// Timestamp of the last accepted press (µs since boot)
    pub fn last_accept_us(&self) -> u64 {
        self.last_accept_us
    }
}

/// Interrupt-side handler for both buttons
///
/// Owns the debounce timestamps and the green/blue LED pins. Each call
/// touches only those, plus one atomic in the shared state, so it is safe
/// to run at interrupt priority.
pub struct DebouncedButtons<'a, G, B> {
    pins: ButtonPins,
    toggler: IndicatorToggler<'a>,
    green_led: G,
    blue_led: B,
    debounce_a: Debouncer,
    debounce_b: Debouncer,
}

impl<'a, G: OutputPin, B: OutputPin> DebouncedButtons<'a, G, B> {
    /// Create the handler; `window_us` is the debounce window
    pub fn new(
        pins: ButtonPins,
        toggler: IndicatorToggler<'a>,
        green_led: G,
        blue_led: B,
        window_us: u64,
    ) -> Self {
        Self {
            pins,
            toggler,
            green_led,
            blue_led,
            debounce_a: Debouncer::new(window_us),
            debounce_b: Debouncer::new(window_us),
        }
    }

    /// Handle one edge interrupt
    ///
    /// - `gpio`: pin that fired
    /// - `events`: event bits reported for that pin
    /// - `now_us`: monotonic time since boot
    ///
    /// Returns the toggle performed, or `None` if the edge was not a
    /// falling edge on a button pin or arrived inside the debounce window.
    pub fn on_edge(&mut self, gpio: u8, events: EdgeEvents, now_us: u64) -> Option<Toggle> {
        if !events.is_falling() {
            return None;
        }

        let button = self.pins.lookup(gpio)?;
        let accepted = match button {
            Button::A => self.debounce_a.accept(now_us),
            Button::B => self.debounce_b.accept(now_us),
        };
        if !accepted {
            return None;
        }

        let led_on = self.toggler.toggle(button.indicator());
        match button {
            Button::A => self.green_led.set_state(led_on),
            Button::B => self.blue_led.set_state(led_on),
        }

        Some(Toggle { button, led_on })
    }

    /// Green LED pin
    pub fn green_led(&self) -> &G {
        &self.green_led
    }

    /// Blue LED pin
    pub fn blue_led(&self) -> &B {
        &self.blue_led
    }

    /// Debounce gate for one button
    pub fn debouncer(&self, button: Button) -> &Debouncer {
        match button {
            Button::A => &self.debounce_a,
            Button::B => &self.debounce_b,
        }
    }
}
