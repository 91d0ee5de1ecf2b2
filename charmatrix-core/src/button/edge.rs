//! GPIO interrupt event bits
//!
//! Same bit layout as the RP2040 `INTR` / `PROC0_INTE` registers, four
//! bits per pin.

use bitflags::bitflags;

bitflags! {
    /// Events reported for one pin in one interrupt
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EdgeEvents: u32 {
        const LEVEL_LOW = 1 << 0;
        const LEVEL_HIGH = 1 << 1;
        const EDGE_FALL = 1 << 2;
        const EDGE_RISE = 1 << 3;
    }
}

impl EdgeEvents {
    /// Check for a falling edge, the only event buttons react to
    pub fn is_falling(&self) -> bool {
        self.contains(EdgeEvents::EDGE_FALL)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EdgeEvents {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "EdgeEvents({=u32:#x})", self.bits())
    }
}
