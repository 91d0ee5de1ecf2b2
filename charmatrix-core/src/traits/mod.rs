//! Collaborator traits
//!
//! These traits define the interface between the application logic
//! and the display, glyph table and LED grid implementations.

pub mod display;
pub mod matrix;

pub use display::{DisplayError, DisplaySurface, Position};
pub use matrix::{GlyphSource, GridError, LedGrid, PixelMask, GRID_SIZE, PIXEL_COUNT};
