//! Steady-state render loop
//!
//! Each cycle renders the display with the current invert flag, flips
//! the flag, then refreshes the LED grid. The caller sleeps for the frame
//! interval between cycles.

pub mod render_loop;

pub use render_loop::{CycleReport, RenderLoop};
