//! Board-agnostic core logic for the charmatrix firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Shared state between the interrupt, core-1 and core-0 contexts
//! - Debounced button handling
//! - Serial character polling
//! - Display frame composition and LED grid refresh
//! - The boot / steady-state cycle
//! - Board configuration constants
//!
//! Everything here runs on the host under `cargo test`; the firmware
//! crate only wires these pieces to embassy tasks.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod app;
pub mod button;
pub mod config;
pub mod input;
pub mod render;
pub mod state;
pub mod traits;
