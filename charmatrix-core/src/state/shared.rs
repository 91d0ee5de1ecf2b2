//! State shared between the button interrupt, the input poller and the
//! render loop
//!
//! Each field has exactly one writer context:
//!
//! | field          | writer                     | readers                   |
//! |----------------|----------------------------|---------------------------|
//! | selected char  | input poller (core 1)      | renderer, matrix (core 0) |
//! | green / blue   | button handler (interrupt) | renderer (core 0)         |
//!
//! The rule is enforced by the type system: [`SharedState::split`] takes
//! `&mut self` and hands out one [`CharPublisher`], one
//! [`IndicatorToggler`] and a copyable [`StateReader`]. Only the publisher
//! can store a character and only the toggler can flip a flag.
//!
//! Every field is its own atomic. A reader sees each field eventually,
//! but two fields read back to back may come from different instants;
//! the renderer tolerates that.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

/// One of the two status LEDs driven by the buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    Green,
    Blue,
}

/// Per-field atomic state, zero at startup
pub struct SharedState {
    selected_char: AtomicU8,
    green_led_on: AtomicBool,
    blue_led_on: AtomicBool,
}

impl SharedState {
    /// Create the zeroed state (no character, both LEDs off)
    pub const fn new() -> Self {
        Self {
            selected_char: AtomicU8::new(0),
            green_led_on: AtomicBool::new(false),
            blue_led_on: AtomicBool::new(false),
        }
    }

    /// Split into the writer and reader handles
    ///
    /// Borrowing `self` mutably for `'a` guarantees this happens once per
    /// lifetime, so each writer handle is unique.
    pub fn split(&mut self) -> (CharPublisher<'_>, IndicatorToggler<'_>, StateReader<'_>) {
        let state: &SharedState = self;
        (
            CharPublisher { state },
            IndicatorToggler { state },
            StateReader { state },
        )
    }

    fn flag(&self, indicator: Indicator) -> &AtomicBool {
        match indicator {
            Indicator::Green => &self.green_led_on,
            Indicator::Blue => &self.blue_led_on,
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

/// Sole writer of the selected character
pub struct CharPublisher<'a> {
    state: &'a SharedState,
}

impl CharPublisher<'_> {
    /// Store a received byte verbatim
    pub fn publish(&self, byte: u8) {
        self.state.selected_char.store(byte, Ordering::Release);
    }
}

/// Sole writer of the two indicator flags
///
/// Safe to use from interrupt context: every method is a single atomic
/// operation and never blocks.
pub struct IndicatorToggler<'a> {
    state: &'a SharedState,
}

impl IndicatorToggler<'_> {
    /// Flip a flag and return its new value
    pub fn toggle(&self, indicator: Indicator) -> bool {
        !self.state.flag(indicator).fetch_xor(true, Ordering::Relaxed)
    }

    /// Current value of a flag
    pub fn is_on(&self, indicator: Indicator) -> bool {
        self.state.flag(indicator).load(Ordering::Relaxed)
    }
}

/// Read-only view of the shared state
#[derive(Clone, Copy)]
pub struct StateReader<'a> {
    state: &'a SharedState,
}

impl StateReader<'_> {
    /// Most recently received byte, 0 if none yet
    pub fn selected_char(&self) -> u8 {
        self.state.selected_char.load(Ordering::Acquire)
    }

    /// Current value of an indicator flag
    pub fn is_on(&self, indicator: Indicator) -> bool {
        self.state.flag(indicator).load(Ordering::Relaxed)
    }

    /// Read every field exactly once
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            selected_char: self.selected_char(),
            green_led_on: self.is_on(Indicator::Green),
            blue_led_on: self.is_on(Indicator::Blue),
        }
    }
}

/// Plain copy of the shared fields taken for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateSnapshot {
    pub selected_char: u8,
    pub green_led_on: bool,
    pub blue_led_on: bool,
}

impl StateSnapshot {
    /// Flag value for one indicator
    pub fn indicator(&self, indicator: Indicator) -> bool {
        match indicator {
            Indicator::Green => self.green_led_on,
            Indicator::Blue => self.blue_led_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_initialised() {
        let mut state = SharedState::new();
        let (_, _, reader) = state.split();

        assert_eq!(reader.snapshot(), StateSnapshot::default());
    }

    #[test]
    fn test_publish_is_visible() {
        let mut state = SharedState::new();
        let (publisher, _, reader) = state.split();

        publisher.publish(b'A');
        assert_eq!(reader.selected_char(), b'A');

        // Latest byte wins, any value accepted
        publisher.publish(0xFF);
        assert_eq!(reader.selected_char(), 0xFF);
    }

    #[test]
    fn test_toggle_returns_new_value() {
        let mut state = SharedState::new();
        let (_, toggler, reader) = state.split();

        assert!(toggler.toggle(Indicator::Green));
        assert!(reader.is_on(Indicator::Green));

        assert!(!toggler.toggle(Indicator::Green));
        assert!(!reader.is_on(Indicator::Green));
    }

    #[test]
    fn test_indicators_independent() {
        let mut state = SharedState::new();
        let (_, toggler, reader) = state.split();

        toggler.toggle(Indicator::Blue);
        let snap = reader.snapshot();
        assert!(snap.blue_led_on);
        assert!(!snap.green_led_on);
        assert!(snap.indicator(Indicator::Blue));
        assert!(!snap.indicator(Indicator::Green));
    }

    #[test]
    fn test_writers_on_other_threads() {
        let mut state = SharedState::new();
        let (publisher, toggler, reader) = state.split();

        std::thread::scope(|s| {
            s.spawn(move || {
                for byte in b'a'..=b'z' {
                    publisher.publish(byte);
                }
            });
            s.spawn(move || {
                for _ in 0..100 {
                    toggler.toggle(Indicator::Green);
                }
                toggler.toggle(Indicator::Blue);
            });
            s.spawn(move || {
                // Readers only ever observe values some writer stored
                for _ in 0..1000 {
                    let ch = reader.selected_char();
                    assert!(ch == 0 || ch.is_ascii_lowercase());
                }
            });
        });

        let snap = reader.snapshot();
        assert_eq!(snap.selected_char, b'z');
        assert!(!snap.green_led_on);
        assert!(snap.blue_led_on);
    }
}
