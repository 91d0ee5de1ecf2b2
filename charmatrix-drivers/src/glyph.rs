//! 5x5 glyph font for the LED grid
//!
//! Covers digits, upper-case letters and space. Lower-case letters are
//! shown as their upper-case glyph. Any other byte is all-off.

use charmatrix_core::traits::{GlyphSource, PixelMask};

/// Rows for each glyph, bit 4 = leftmost column, row 0 at the top
type Rows = [u8; 5];

const DIGITS: [Rows; 10] = [
    [0b01110, 0b10011, 0b10101, 0b11001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b01110], // 1
    [0b11110, 0b00001, 0b01110, 0b10000, 0b11111], // 2
    [0b11110, 0b00001, 0b00110, 0b00001, 0b11110], // 3
    [0b10010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b11110], // 5
    [0b01110, 0b10000, 0b11110, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b00100], // 7
    [0b01110, 0b10001, 0b01110, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b01111, 0b00001, 0b01110], // 9
];

const LETTERS: [Rows; 26] = [
    [0b01110, 0b10001, 0b11111, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b11110, 0b10001, 0b11110], // B
    [0b01111, 0b10000, 0b10000, 0b10000, 0b01111], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b11110, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b11110, 0b10000, 0b10000], // F
    [0b01111, 0b10000, 0b10011, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b11111, 0b10001, 0b10001], // H
    [0b11111, 0b00100, 0b00100, 0b00100, 0b11111], // I
    [0b00111, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10010, 0b10100, 0b11000, 0b10100, 0b10010], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10001, 0b10001], // M
    [0b10001, 0b11001, 0b10101, 0b10011, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b11110, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b11110, 0b10100, 0b10010], // R
    [0b01111, 0b10000, 0b01110, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10101, 0b11011, 0b10001], // W
    [0b10001, 0b01010, 0b00100, 0b01010, 0b10001], // X
    [0b10001, 0b01010, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00010, 0b00100, 0b01000, 0b11111], // Z
];

/// Built-in 5x5 font
#[derive(Debug, Clone, Copy, Default)]
pub struct Font5x5;

impl Font5x5 {
    /// Row bitmaps for `ch`, or `None` if the font has no glyph for it
    pub fn rows(ch: u8) -> Option<Rows> {
        match ch.to_ascii_uppercase() {
            b' ' => Some([0; 5]),
            c @ b'0'..=b'9' => Some(DIGITS[usize::from(c - b'0')]),
            c @ b'A'..=b'Z' => Some(LETTERS[usize::from(c - b'A')]),
            _ => None,
        }
    }

    /// Check if `ch` has a glyph
    pub fn covers(ch: u8) -> bool {
        Self::rows(ch).is_some()
    }
}

impl GlyphSource for Font5x5 {
    fn render_glyph(&self, ch: u8) -> PixelMask {
        Self::rows(ch)
            .map(PixelMask::from_rows)
            .unwrap_or_else(PixelMask::all_off)
    }
}
