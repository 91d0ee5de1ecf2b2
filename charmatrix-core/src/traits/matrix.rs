//! LED grid traits and the pixel mask they exchange

use crate::config::Brightness;

/// Width and height of the LED grid
pub const GRID_SIZE: usize = 5;

/// Number of LEDs in the grid
pub const PIXEL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// On/off pattern over the grid, row-major, row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelMask([bool; PIXEL_COUNT]);

impl PixelMask {
    /// Every LED off
    pub const fn all_off() -> Self {
        Self([false; PIXEL_COUNT])
    }

    /// Build a mask from five row bitmaps, bit 4 = leftmost column
    pub const fn from_rows(rows: [u8; GRID_SIZE]) -> Self {
        let mut cells = [false; PIXEL_COUNT];
        let mut row = 0;
        while row < GRID_SIZE {
            let mut col = 0;
            while col < GRID_SIZE {
                cells[row * GRID_SIZE + col] = rows[row] & (0x10 >> col) != 0;
                col += 1;
            }
            row += 1;
        }
        Self(cells)
    }

    /// LED state at `(row, col)`; out-of-range cells read as off
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return false;
        }
        self.0[row * GRID_SIZE + col]
    }

    /// Set the LED at `(row, col)`; out-of-range cells are ignored
    pub fn set(&mut self, row: usize, col: usize, on: bool) {
        if row < GRID_SIZE && col < GRID_SIZE {
            self.0[row * GRID_SIZE + col] = on;
        }
    }

    /// Number of lit LEDs
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|&&on| on).count()
    }

    /// Check if no LED is lit
    pub fn is_blank(&self) -> bool {
        self.lit_count() == 0
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[bool; PIXEL_COUNT] {
        &self.0
    }
}

impl Default for PixelMask {
    fn default() -> Self {
        Self::all_off()
    }
}

/// Character-to-pattern lookup
///
/// Must never fail: characters without a glyph map to a default pattern
/// (normally [`PixelMask::all_off`]).
pub trait GlyphSource {
    fn render_glyph(&self, ch: u8) -> PixelMask;
}

impl<T: GlyphSource + ?Sized> GlyphSource for &T {
    fn render_glyph(&self, ch: u8) -> PixelMask {
        (**self).render_glyph(ch)
    }
}

/// Errors from pushing a frame to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GridError {
    /// Data transfer to the LEDs failed
    Transfer,
}

/// Physical LED grid
#[allow(async_fn_in_trait)]
pub trait LedGrid {
    /// Light every cell set in `mask` with `brightness`, clear the rest
    async fn show(&mut self, brightness: Brightness, mask: &PixelMask) -> Result<(), GridError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        // Plus sign
        let mask = PixelMask::from_rows([0b00100, 0b00100, 0b11111, 0b00100, 0b00100]);

        assert!(mask.get(0, 2));
        assert!(!mask.get(0, 0));
        assert!(mask.get(2, 0));
        assert!(mask.get(2, 4));
        assert_eq!(mask.lit_count(), 9);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut mask = PixelMask::all_off();
        mask.set(5, 0, true);
        mask.set(0, 5, true);

        assert!(mask.is_blank());
        assert!(!mask.get(7, 7));
    }

    #[test]
    fn test_set_get() {
        let mut mask = PixelMask::default();
        mask.set(4, 4, true);

        assert!(mask.get(4, 4));
        assert!(mask.cells()[PIXEL_COUNT - 1]);
        assert_eq!(mask.lit_count(), 1);
    }
}
