//! Driver implementations for the charmatrix board
//!
//! Concrete implementations of the traits defined in charmatrix-core:
//!
//! - 5x5 glyph font for the LED grid
//! - WS2812 frame encoding for the serpentine-wired grid
//! - OLED surface on top of any `embedded-graphics` binary draw target

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod glyph;
pub mod oled;
pub mod ws2812;

pub use glyph::Font5x5;
pub use oled::{Flush, GraphicsSurface};
pub use ws2812::{encode_frame, physical_index, Frame};
