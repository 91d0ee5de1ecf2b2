//! WS2812 frame encoding for the 5x5 grid
//!
//! The LEDs are chained in a serpentine: the first LED on the wire is the
//! bottom-right one, the bottom row runs right to left, the next row up
//! runs left to right, and so on.

use charmatrix_core::config::Brightness;
use charmatrix_core::traits::{PixelMask, GRID_SIZE, PIXEL_COUNT};
use smart_leds::RGB8;

/// One colour per LED, in wire order
pub type Frame = [RGB8; PIXEL_COUNT];

/// Position on the wire of the LED at `(row, col)`, row 0 at the top
///
/// Returns `None` outside the grid.
pub fn physical_index(row: usize, col: usize) -> Option<usize> {
    if row >= GRID_SIZE || col >= GRID_SIZE {
        return None;
    }

    let from_bottom = GRID_SIZE - 1 - row;
    let offset = if from_bottom % 2 == 0 {
        GRID_SIZE - 1 - col
    } else {
        col
    };
    Some(from_bottom * GRID_SIZE + offset)
}

/// Lit cells get `brightness`, the rest are black
pub fn encode_frame(mask: &PixelMask, brightness: Brightness) -> Frame {
    let on = RGB8::new(brightness.r, brightness.g, brightness.b);
    let mut frame = [RGB8::default(); PIXEL_COUNT];

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if mask.get(row, col) {
                if let Some(index) = physical_index(row, col) {
                    frame[index] = on;
                }
            }
        }
    }

    frame
}
