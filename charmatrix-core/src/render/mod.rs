//! Output rendering
//!
//! - [`frame`]: OLED frame composition from a state snapshot
//! - [`matrix`]: LED grid refresh from the selected character

pub mod frame;
pub mod matrix;

pub use frame::{compose_frame, status_word, DisplayRenderer, Frame, TextItem};
pub use matrix::MatrixDriver;
