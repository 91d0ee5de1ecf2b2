//! Debounced button handling
//!
//! Raw falling edges arrive from interrupt context. A press is accepted
//! when the debounce window has elapsed since the previous accepted press
//! of the same button; it flips the matching indicator and drives its LED
//! immediately.

pub mod debounce;
pub mod edge;
pub mod leds;

pub use debounce::{Button, ButtonPins, DebouncedButtons, Debouncer, Toggle};
pub use edge::EdgeEvents;
pub use leds::{ParkedLed, StatusLeds};
