//! Render loop driven from the primary context

use crate::config::Brightness;
use crate::render::{DisplayRenderer, MatrixDriver};
use crate::state::{StateReader, StateSnapshot};
use crate::traits::{DisplayError, DisplaySurface, GlyphSource, GridError, LedGrid, PixelMask};

/// Outcome of one cycle
///
/// A failing display does not stop the grid refresh and vice versa, so
/// both results are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Cycle number, starting at 0
    pub cycle: u32,
    /// Background polarity used for this frame
    pub inverted: bool,
    /// Snapshot drawn on the display
    pub display: Result<StateSnapshot, DisplayError>,
    /// Character pushed to the grid
    pub grid_char: u8,
    pub grid: Result<(), GridError>,
}

/// Display renderer + matrix driver + the alternating invert flag
pub struct RenderLoop<'a, G> {
    reader: StateReader<'a>,
    renderer: DisplayRenderer<'a>,
    matrix: MatrixDriver<G>,
    invert: bool,
    cycle: u32,
}

impl<'a, G: GlyphSource> RenderLoop<'a, G> {
    /// Create the loop; the first frame is drawn inverted
    pub fn new(reader: StateReader<'a>, glyphs: G, brightness: Brightness) -> Self {
        Self {
            reader,
            renderer: DisplayRenderer::new(reader),
            matrix: MatrixDriver::new(glyphs, brightness),
            invert: true,
            cycle: 0,
        }
    }

    /// Run one cycle
    pub async fn cycle<D: DisplaySurface, L: LedGrid>(
        &mut self,
        display: &mut D,
        grid: &mut L,
    ) -> CycleReport {
        let inverted = self.invert;
        let display_result = self.renderer.render(display, inverted);
        self.invert = !self.invert;

        // Read again: the poller may have published since the frame
        let grid_char = self.reader.selected_char();
        let grid_result = self.matrix.refresh(grid_char, grid).await;

        let report = CycleReport {
            cycle: self.cycle,
            inverted,
            display: display_result,
            grid_char,
            grid: grid_result,
        };
        self.cycle = self.cycle.wrapping_add(1);
        report
    }

    /// Invert flag the next cycle will use
    pub fn next_invert(&self) -> bool {
        self.invert
    }

    /// Mask currently on the grid
    pub fn mask(&self) -> &PixelMask {
        self.matrix.mask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{Button, DebouncedButtons, EdgeEvents, StatusLeds};
    use crate::config::{HardwareConfig, Timing, LED_BRIGHTNESS};
    use crate::input::CharacterPoller;
    use crate::render::frame::{CHAR_ORIGIN, GREEN_STATUS_ORIGIN};
    use crate::state::SharedState;
    use crate::traits::Position;
    use charmatrix_hal::{ByteSource, OutputPin};
    use embassy_futures::block_on;
    use heapless::{String, Vec};

    struct LetterGlyphs;

    impl GlyphSource for LetterGlyphs {
        fn render_glyph(&self, ch: u8) -> PixelMask {
            if ch.is_ascii_uppercase() {
                PixelMask::from_rows([0b11111, 0, 0, 0, 0])
            } else {
                PixelMask::all_off()
            }
        }
    }

    #[derive(Default)]
    struct FakeDisplay {
        background: Option<bool>,
        texts: Vec<(String<16>, Position), 8>,
        frames: u32,
    }

    impl FakeDisplay {
        fn text_at(&self, origin: Position) -> Option<&str> {
            self.texts
                .iter()
                .find(|(_, o)| *o == origin)
                .map(|(t, _)| t.as_str())
        }
    }

    impl DisplaySurface for FakeDisplay {
        fn fill(&mut self, lit: bool) -> Result<(), DisplayError> {
            self.background = Some(lit);
            self.texts.clear();
            Ok(())
        }

        fn draw_text(&mut self, text: &str, origin: Position, _lit: bool) -> Result<(), DisplayError> {
            let mut owned = String::new();
            owned.push_str(text).map_err(|_| DisplayError::Draw)?;
            self.texts
                .push((owned, origin))
                .map_err(|_| DisplayError::Draw)
        }

        fn draw_line(&mut self, _from: Position, _to: Position, _lit: bool) -> Result<(), DisplayError> {
            Ok(())
        }

        fn present_frame(&mut self) -> Result<(), DisplayError> {
            self.frames += 1;
            Ok(())
        }
    }

    /// Display whose bus is unplugged
    struct DeadDisplay;

    impl DisplaySurface for DeadDisplay {
        fn fill(&mut self, _lit: bool) -> Result<(), DisplayError> {
            Ok(())
        }

        fn draw_text(&mut self, _text: &str, _origin: Position, _lit: bool) -> Result<(), DisplayError> {
            Ok(())
        }

        fn draw_line(&mut self, _from: Position, _to: Position, _lit: bool) -> Result<(), DisplayError> {
            Ok(())
        }

        fn present_frame(&mut self) -> Result<(), DisplayError> {
            Err(DisplayError::Transport)
        }
    }

    #[derive(Default)]
    struct FakeGrid {
        last: Option<PixelMask>,
    }

    impl LedGrid for FakeGrid {
        async fn show(&mut self, _brightness: Brightness, mask: &PixelMask) -> Result<(), GridError> {
            self.last = Some(*mask);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeLed {
        high: bool,
        writes: u32,
    }

    impl OutputPin for FakeLed {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct OneByte(Option<u8>);

    impl ByteSource for OneByte {
        fn try_read_byte(&mut self) -> Option<u8> {
            self.0.take()
        }
    }

    #[test]
    fn test_invert_alternates() {
        let mut state = SharedState::new();
        let (_, _, reader) = state.split();
        let mut render_loop = RenderLoop::new(reader, LetterGlyphs, LED_BRIGHTNESS);
        let mut display = FakeDisplay::default();
        let mut grid = FakeGrid::default();

        let mut previous = None;
        for n in 0..6 {
            let report = block_on(render_loop.cycle(&mut display, &mut grid));
            assert_eq!(report.cycle, n);
            assert_eq!(display.background, Some(report.inverted));
            if let Some(prev) = previous {
                assert_ne!(prev, report.inverted);
            }
            previous = Some(report.inverted);
        }
        assert_eq!(display.frames, 6);
    }

    #[test]
    fn test_first_frame_inverted() {
        let mut state = SharedState::new();
        let (_, _, reader) = state.split();
        let mut render_loop = RenderLoop::new(reader, LetterGlyphs, LED_BRIGHTNESS);

        assert!(render_loop.next_invert());
        let report = block_on(render_loop.cycle(&mut FakeDisplay::default(), &mut FakeGrid::default()));
        assert!(report.inverted);
        assert!(!render_loop.next_invert());
    }

    #[test]
    fn test_display_failure_still_refreshes_grid() {
        let mut state = SharedState::new();
        let (publisher, _, reader) = state.split();
        let mut render_loop = RenderLoop::new(reader, LetterGlyphs, LED_BRIGHTNESS);
        let mut grid = FakeGrid::default();

        publisher.publish(b'K');
        let report = block_on(render_loop.cycle(&mut DeadDisplay, &mut grid));

        assert_eq!(report.display, Err(DisplayError::Transport));
        assert_eq!(report.grid, Ok(()));
        assert_eq!(report.grid_char, b'K');
        assert_eq!(grid.last.map(|m| m.lit_count()), Some(5));
        // Invert still flips
        assert!(!render_loop.next_invert());
    }

    #[test]
    fn test_end_to_end() {
        let mut state = SharedState::new();
        let (publisher, toggler, reader) = state.split();
        let timing = Timing::DEFAULT;
        let pin_a = HardwareConfig::BITDOGLAB.button_a.pin;

        let mut red = FakeLed::default();
        let (parked_red, green, blue) =
            StatusLeds::new(&mut red, FakeLed::default(), FakeLed::default()).into_parts();

        let mut poller = CharacterPoller::new(OneByte(Some(b'A')), publisher, timing.poll_interval_ms);
        let mut buttons = DebouncedButtons::new(
            HardwareConfig::BITDOGLAB.button_pins(),
            toggler,
            green,
            blue,
            timing.debounce_window_us(),
        );
        let mut render_loop = RenderLoop::new(reader, LetterGlyphs, LED_BRIGHTNESS);
        let mut display = FakeDisplay::default();
        let mut grid = FakeGrid::default();

        // Byte arrives, next frame shows it
        poller.poll_once();
        block_on(render_loop.cycle(&mut display, &mut grid));
        assert_eq!(display.text_at(CHAR_ORIGIN), Some("A"));
        assert_eq!(display.text_at(GREEN_STATUS_ORIGIN), Some("Led Verde  off"));
        assert!(grid.last.is_some_and(|m| !m.is_blank()));

        // Press A after a quiet period
        let now = 5_000_000;
        assert!(buttons.on_edge(pin_a, EdgeEvents::EDGE_FALL, now).is_some());
        assert!(buttons.green_led().is_set_high());
        assert_eq!(buttons.debouncer(Button::A).last_accept_us(), now);
        block_on(render_loop.cycle(&mut display, &mut grid));
        assert_eq!(display.text_at(GREEN_STATUS_ORIGIN), Some("Led Verde  on "));

        // Bounce inside the window changes nothing
        assert!(buttons.on_edge(pin_a, EdgeEvents::EDGE_FALL, now + 100_000).is_none());
        assert!(buttons.green_led().is_set_high());
        assert!(!buttons.blue_led().is_set_high());
        block_on(render_loop.cycle(&mut display, &mut grid));
        assert_eq!(display.text_at(GREEN_STATUS_ORIGIN), Some("Led Verde  on "));

        // Red was driven low at start-up and never again
        assert!(!parked_red.is_lit());
        drop(parked_red);
        assert_eq!(red.writes, 1);
    }
}
