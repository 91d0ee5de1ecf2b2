//! Character input poller

use charmatrix_hal::ByteSource;

use crate::state::CharPublisher;

/// Moves bytes from a [`ByteSource`] into the shared state
pub struct CharacterPoller<'a, S> {
    source: S,
    publisher: CharPublisher<'a>,
    poll_interval_ms: u32,
}

impl<'a, S: ByteSource> CharacterPoller<'a, S> {
    pub fn new(source: S, publisher: CharPublisher<'a>, poll_interval_ms: u32) -> Self {
        Self {
            source,
            publisher,
            poll_interval_ms,
        }
    }

    /// One poll iteration
    ///
    /// Takes at most one byte and publishes it verbatim. Returns the byte,
    /// or `None` if nothing was buffered (including end of stream).
    pub fn poll_once(&mut self) -> Option<u8> {
        let byte = self.source.try_read_byte()?;
        self.publisher.publish(byte);
        Some(byte)
    }

    /// How long the caller sleeps between iterations
    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_interval_ms
    }
}
