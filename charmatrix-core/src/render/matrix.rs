//! LED grid refresh

use crate::config::Brightness;
use crate::traits::{GlyphSource, GridError, LedGrid, PixelMask};

/// Turns the selected character into a grid frame
///
/// Owns the current pixel mask. Nothing outside the render loop reads or
/// writes it, so it needs no synchronisation.
pub struct MatrixDriver<G> {
    glyphs: G,
    brightness: Brightness,
    led_matrix_state: PixelMask,
}

impl<G: GlyphSource> MatrixDriver<G> {
    pub fn new(glyphs: G, brightness: Brightness) -> Self {
        Self {
            glyphs,
            brightness,
            led_matrix_state: PixelMask::all_off(),
        }
    }

    /// Recompute the mask for `selected_char` and push it to `grid`
    ///
    /// Never rejects a character: the glyph source supplies its default
    /// pattern for anything it does not know. The mask is updated even if
    /// the push fails.
    pub async fn refresh<L: LedGrid>(
        &mut self,
        selected_char: u8,
        grid: &mut L,
    ) -> Result<(), GridError> {
        self.led_matrix_state = self.glyphs.render_glyph(selected_char);
        grid.show(self.brightness, &self.led_matrix_state).await
    }

    /// Mask computed by the last refresh
    pub fn mask(&self) -> &PixelMask {
        &self.led_matrix_state
    }
}
