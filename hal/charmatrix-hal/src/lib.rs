//! charmatrix Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the application
//! logic talks to. Chip-specific crates implement them for real
//! peripherals; tests implement them with plain structs.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  charmatrix-core / charmatrix-firmware   │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │  charmatrix-hal (this crate - traits)    │
//! └──────────────────────────────────────────┘
//!                     │
//!          ┌──────────┴──────────┐
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │ charmatrix-hal- │   │  test fakes     │
//! │     rp2040      │   │  (host only)    │
//! └─────────────────┘   └─────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (status LEDs)
//! - [`uart::ByteSource`] - Non-blocking byte input (serial console)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use i2c::I2cConfig;
pub use uart::{ByteSource, ReadyReader, UartConfig};
