//! RP2040-specific HAL for the charmatrix firmware
//!
//! This crate provides RP2040 implementations of the `charmatrix-hal`
//! and `charmatrix-core` traits:
//!
//! - GPIO allocation by pin number, with the bus pins held back
//! - Status LED outputs
//! - Non-blocking console receive on a buffered UART
//! - WS2812 grid output through a PIO state machine

#![no_std]

pub mod gpio;
pub mod matrix;
pub mod pins;
pub mod uart;

// Re-export shared traits from charmatrix-hal for convenience
pub use charmatrix_hal::{ByteSource, OutputPin};
