//! Serial input abstractions
//!
//! The input poller only ever asks "is there a byte right now?", so the
//! receive side is modelled as a non-blocking byte source rather than a
//! full UART.

use embedded_io::{Read, ReadReady};

/// Non-blocking source of input bytes
pub trait ByteSource {
    /// Take one byte if one is already buffered.
    ///
    /// Returns `None` when nothing is available. End-of-stream and receive
    /// errors are reported the same way; callers cannot tell them apart.
    fn try_read_byte(&mut self) -> Option<u8>;
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn try_read_byte(&mut self) -> Option<u8> {
        (**self).try_read_byte()
    }
}

/// [`ByteSource`] over any buffered `embedded-io` reader
///
/// Checks [`ReadReady`] first so the read never blocks.
pub struct ReadyReader<R> {
    inner: R,
}

impl<R> ReadyReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Give back the wrapped reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + ReadReady> ByteSource for ReadyReader<R> {
    fn try_read_byte(&mut self) -> Option<u8> {
        match self.inner.read_ready() {
            Ok(true) => {}
            Ok(false) | Err(_) => return None,
        }

        let mut byte = [0u8; 1];
        match self.inner.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::CONSOLE
    }
}

impl UartConfig {
    /// 115200 8N1, the usual serial console setting
    pub const CONSOLE: Self = Self {
        baudrate: 115_200,
        data_bits: DataBits::Eight,
        parity: Parity::None,
        stop_bits: StopBits::One,
    };
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
