//! OLED surface over an `embedded-graphics` draw target
//!
//! Text uses the 6x10 ISO 8859-1 font so every byte value has a glyph.
//! Positions are the top-left corner of the text box.

use charmatrix_core::traits::{DisplayError, DisplaySurface, Position};
use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::{Baseline, Text},
};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::{DisplaySize, WriteOnlyDataCommand};
use ssd1306::Ssd1306;

/// Frame-buffered target that can push its buffer to the panel
pub trait Flush {
    fn flush_frame(&mut self) -> Result<(), DisplayError>;
}

impl<DI, SIZE> Flush for Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>>
where
    DI: WriteOnlyDataCommand,
    SIZE: DisplaySize,
{
    fn flush_frame(&mut self) -> Result<(), DisplayError> {
        self.flush().map_err(|_| DisplayError::Transport)
    }
}

fn point(position: Position) -> Point {
    Point::new(position.x, position.y)
}

/// [`DisplaySurface`] for any binary-colour draw target
pub struct GraphicsSurface<D> {
    target: D,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = BinaryColor> + Flush,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Give back the draw target
    pub fn release(self) -> D {
        self.target
    }
}

impl<D> DisplaySurface for GraphicsSurface<D>
where
    D: DrawTarget<Color = BinaryColor> + Flush,
{
    fn fill(&mut self, lit: bool) -> Result<(), DisplayError> {
        self.target
            .clear(BinaryColor::from(lit))
            .map_err(|_| DisplayError::Draw)
    }

    fn draw_text(&mut self, text: &str, origin: Position, lit: bool) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::from(lit));
        Text::with_baseline(text, point(origin), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Draw)
    }

    fn draw_line(&mut self, from: Position, to: Position, lit: bool) -> Result<(), DisplayError> {
        Line::new(point(from), point(to))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::from(lit), 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Draw)
    }

    fn present_frame(&mut self) -> Result<(), DisplayError> {
        self.target.flush_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charmatrix_core::render::compose_frame;
    use charmatrix_core::render::frame::{CHAR_ORIGIN, SEPARATOR_FROM, SEPARATOR_TO};
    use charmatrix_core::state::StateSnapshot;
    use core::convert::Infallible;

    const WIDTH: usize = 128;
    const HEIGHT: usize = 64;

    /// In-memory 128x64 panel
    struct TestPanel {
        pixels: [[bool; WIDTH]; HEIGHT],
        flushes: u32,
        bus_down: bool,
    }

    impl TestPanel {
        fn new() -> Self {
            Self {
                pixels: [[false; WIDTH]; HEIGHT],
                flushes: 0,
                bus_down: false,
            }
        }

        fn lit(&self, x: usize, y: usize) -> bool {
            self.pixels[y][x]
        }

        /// Count pixels equal to `lit` inside a box
        fn count_in(&self, x: usize, y: usize, w: usize, h: usize, lit: bool) -> usize {
            (y..y + h)
                .flat_map(|row| (x..x + w).map(move |col| (col, row)))
                .filter(|&(col, row)| self.pixels[row][col] == lit)
                .count()
        }
    }

    impl OriginDimensions for TestPanel {
        fn size(&self) -> Size {
            Size::new(WIDTH as u32, HEIGHT as u32)
        }
    }

    impl DrawTarget for TestPanel {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, color) in pixels {
                if (0..WIDTH as i32).contains(&p.x) && (0..HEIGHT as i32).contains(&p.y) {
                    self.pixels[p.y as usize][p.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    impl Flush for TestPanel {
        fn flush_frame(&mut self) -> Result<(), DisplayError> {
            if self.bus_down {
                return Err(DisplayError::Transport);
            }
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_fill() {
        let mut surface = GraphicsSurface::new(TestPanel::new());

        surface.fill(true).unwrap();
        assert_eq!(surface.target().count_in(0, 0, WIDTH, HEIGHT, true), WIDTH * HEIGHT);

        surface.fill(false).unwrap();
        assert_eq!(surface.target().count_in(0, 0, WIDTH, HEIGHT, false), WIDTH * HEIGHT);
    }

    #[test]
    fn test_text_stays_in_its_box() {
        let mut surface = GraphicsSurface::new(TestPanel::new());

        surface.draw_text("A", Position::new(99, 15), true).unwrap();

        // One 6x10 cell with its top-left corner at the origin
        let inside = surface.target().count_in(99, 15, 6, 10, true);
        let total = surface.target().count_in(0, 0, WIDTH, HEIGHT, true);
        assert!(inside > 0);
        assert_eq!(inside, total);
    }

    #[test]
    fn test_dark_text_on_lit_background() {
        let mut surface = GraphicsSurface::new(TestPanel::new());

        surface.fill(true).unwrap();
        surface.draw_text("Caractere", Position::new(12, 10), false).unwrap();

        assert!(surface.target().count_in(12, 10, 9 * 6, 10, false) > 0);
        assert_eq!(surface.target().count_in(0, 0, WIDTH, 10, false), 0);
    }

    #[test]
    fn test_latin1_byte_draws_a_glyph() {
        let mut surface = GraphicsSurface::new(TestPanel::new());

        surface.draw_text("é", Position::new(0, 0), true).unwrap();
        assert!(surface.target().count_in(0, 0, 6, 10, true) > 0);
    }

    #[test]
    fn test_line_is_inclusive() {
        let mut surface = GraphicsSurface::new(TestPanel::new());

        surface
            .draw_line(Position::new(98, 25), Position::new(109, 25), true)
            .unwrap();

        let panel = surface.target();
        assert!((98..=109).all(|x| panel.lit(x, 25)));
        assert!(!panel.lit(97, 25));
        assert!(!panel.lit(110, 25));
        assert_eq!(panel.count_in(0, 0, WIDTH, HEIGHT, true), 12);
    }

    #[test]
    fn test_present_flushes() {
        let mut surface = GraphicsSurface::new(TestPanel::new());

        surface.present_frame().unwrap();
        surface.present_frame().unwrap();
        assert_eq!(surface.target().flushes, 2);

        surface.target_mut().bus_down = true;
        assert_eq!(surface.present_frame(), Err(DisplayError::Transport));
    }

    #[test]
    fn test_full_frame() {
        let mut surface = GraphicsSurface::new(TestPanel::new());
        let snapshot = StateSnapshot {
            selected_char: b'7',
            green_led_on: true,
            blue_led_on: false,
        };

        compose_frame(&snapshot, false).draw(&mut surface).unwrap();

        let panel = surface.release();
        assert_eq!(panel.flushes, 1);
        assert!(panel.count_in(CHAR_ORIGIN.x as usize, CHAR_ORIGIN.y as usize, 6, 10, true) > 0);
        let y = SEPARATOR_FROM.y as usize;
        assert!((SEPARATOR_FROM.x as usize..=SEPARATOR_TO.x as usize).all(|x| panel.lit(x, y)));
        // Right margin stays dark
        assert_eq!(panel.count_in(112, 0, 16, HEIGHT, true), 0);
    }

    #[test]
    fn test_inverted_frame_has_dark_ink() {
        let mut surface = GraphicsSurface::new(TestPanel::new());

        compose_frame(&StateSnapshot::default(), true)
            .draw(&mut surface)
            .unwrap();

        let panel = surface.target();
        assert!(!panel.lit(100, 25));
        assert!(panel.lit(0, 0));
        assert!(panel.lit(127, 63));
    }
}
