//! Display surface trait for the OLED

/// Errors that can occur while drawing or presenting a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    Transport,
    /// Drawing into the frame buffer failed
    Draw,
}

/// Pixel position, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Monochrome frame-buffered display
///
/// Drawing calls only touch the frame buffer; nothing reaches the panel
/// until [`present_frame`](DisplaySurface::present_frame).
/// `lit = true` means the pixel is on.
pub trait DisplaySurface {
    /// Fill the whole buffer
    fn fill(&mut self, lit: bool) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at `origin`
    fn draw_text(&mut self, text: &str, origin: Position, lit: bool) -> Result<(), DisplayError>;

    /// Draw a one-pixel line between two points, both inclusive
    fn draw_line(&mut self, from: Position, to: Position, lit: bool) -> Result<(), DisplayError>;

    /// Push the buffer to the panel
    fn present_frame(&mut self) -> Result<(), DisplayError>;
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    fn fill(&mut self, lit: bool) -> Result<(), DisplayError> {
        (**self).fill(lit)
    }

    fn draw_text(&mut self, text: &str, origin: Position, lit: bool) -> Result<(), DisplayError> {
        (**self).draw_text(text, origin, lit)
    }

    fn draw_line(&mut self, from: Position, to: Position, lit: bool) -> Result<(), DisplayError> {
        (**self).draw_line(from, to, lit)
    }

    fn present_frame(&mut self) -> Result<(), DisplayError> {
        (**self).present_frame()
    }
}
