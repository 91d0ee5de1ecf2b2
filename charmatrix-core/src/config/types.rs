//! Timing and output constants

/// Red/green/blue intensity applied to every lit LED of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Brightness {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Grid colour: magenta at three-quarter intensity
pub const LED_BRIGHTNESS: Brightness = Brightness::new(191, 0, 191);

/// Timing constants for the three execution contexts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Minimum time between two accepted presses of the same button (ms)
    pub debounce_window_ms: u32,
    /// Sleep between two input polls, byte or no byte (ms)
    ///
    /// Bounds how quickly a new character is picked up.
    pub poll_interval_ms: u32,
    /// Sleep between two render cycles (ms)
    pub frame_interval_ms: u32,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        debounce_window_ms: 200,
        poll_interval_ms: 500,
        frame_interval_ms: 1000,
    };

    /// Debounce window in microseconds, the unit of the button timestamps
    pub const fn debounce_window_us(&self) -> u64 {
        self.debounce_window_ms as u64 * 1000
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let timing = Timing::default();
        assert_eq!(timing.debounce_window_ms, 200);
        assert_eq!(timing.poll_interval_ms, 500);
        assert_eq!(timing.frame_interval_ms, 1000);
        assert_eq!(timing.debounce_window_us(), 200_000);
    }
}
