//! OLED frame composition
//!
//! The SSD1306 is 128x64. Layout, in pixels from the top-left corner:
//!
//! ```text
//!   (12,10) Caractere          (99,15) <char>
//!   (12,20) Escolhido          (98,25)─(109,25)
//!   (12,35) Led Verde  on
//!   (12,45) Led Azul   off
//! ```

use heapless::{String, Vec};

use crate::state::{StateReader, StateSnapshot};
use crate::traits::{DisplayError, DisplaySurface, Position};

/// Longest line on screen ("Led Verde  off") plus headroom
pub const TEXT_CAPACITY: usize = 16;

/// Text items per frame: two captions, the character, two status lines
const TEXT_ITEMS: usize = 5;

pub const CAPTION_TOP: &str = "Caractere";
pub const CAPTION_BOTTOM: &str = "Escolhido";
pub const GREEN_LABEL: &str = "Led Verde  ";
pub const BLUE_LABEL: &str = "Led Azul   ";

pub const CAPTION_TOP_ORIGIN: Position = Position::new(12, 10);
pub const CAPTION_BOTTOM_ORIGIN: Position = Position::new(12, 20);
pub const CHAR_ORIGIN: Position = Position::new(99, 15);
pub const SEPARATOR_FROM: Position = Position::new(98, 25);
pub const SEPARATOR_TO: Position = Position::new(109, 25);
pub const GREEN_STATUS_ORIGIN: Position = Position::new(12, 35);
pub const BLUE_STATUS_ORIGIN: Position = Position::new(12, 45);

/// Fixed-width status word, so "on" fully overwrites "off"
pub fn status_word(on: bool) -> &'static str {
    if on {
        "on "
    } else {
        "off"
    }
}

/// One line of text at a fixed position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    pub text: String<TEXT_CAPACITY>,
    pub origin: Position,
}

impl TextItem {
    fn new(origin: Position, parts: &[&str]) -> Self {
        let mut text = String::new();
        for part in parts {
            let fits = text.push_str(part).is_ok();
            debug_assert!(fits, "text line longer than TEXT_CAPACITY");
        }
        Self { text, origin }
    }
}

/// Everything drawn in one display refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Background polarity; text and separator use the opposite
    pub background_lit: bool,
    pub texts: Vec<TextItem, TEXT_ITEMS>,
    pub separator: (Position, Position),
}

impl Frame {
    /// Colour used for text and the separator
    pub fn ink(&self) -> bool {
        !self.background_lit
    }

    /// Text placed at `origin`, if any
    pub fn text_at(&self, origin: Position) -> Option<&str> {
        self.texts
            .iter()
            .find(|item| item.origin == origin)
            .map(|item| item.text.as_str())
    }

    /// Draw into `display` and present it
    pub fn draw<D: DisplaySurface>(&self, display: &mut D) -> Result<(), DisplayError> {
        let ink = self.ink();

        display.fill(self.background_lit)?;
        for item in &self.texts {
            if !item.text.is_empty() {
                display.draw_text(&item.text, item.origin, ink)?;
            }
        }
        display.draw_line(self.separator.0, self.separator.1, ink)?;
        display.present_frame()
    }
}

/// Build the frame for one snapshot
///
/// The selected byte is shown as its Latin-1 character; byte 0 (nothing
/// received yet) leaves the character slot empty.
pub fn compose_frame(snapshot: &StateSnapshot, invert: bool) -> Frame {
    let mut char_buf = [0u8; 4];
    let selected: &str = match snapshot.selected_char {
        0 => "",
        byte => char::from(byte).encode_utf8(&mut char_buf),
    };

    let items = [
        TextItem::new(CAPTION_TOP_ORIGIN, &[CAPTION_TOP]),
        TextItem::new(CAPTION_BOTTOM_ORIGIN, &[CAPTION_BOTTOM]),
        TextItem::new(CHAR_ORIGIN, &[selected]),
        TextItem::new(
            GREEN_STATUS_ORIGIN,
            &[GREEN_LABEL, status_word(snapshot.green_led_on)],
        ),
        TextItem::new(
            BLUE_STATUS_ORIGIN,
            &[BLUE_LABEL, status_word(snapshot.blue_led_on)],
        ),
    ];

    let mut texts = Vec::new();
    for item in items {
        let fits = texts.push(item).is_ok();
        debug_assert!(fits, "more text lines than TEXT_ITEMS");
    }

    Frame {
        background_lit: invert,
        texts,
        separator: (SEPARATOR_FROM, SEPARATOR_TO),
    }
}

/// Composes and pushes one display frame per call
pub struct DisplayRenderer<'a> {
    reader: StateReader<'a>,
}

impl<'a> DisplayRenderer<'a> {
    pub fn new(reader: StateReader<'a>) -> Self {
        Self { reader }
    }

    /// Render the current state
    ///
    /// Takes a single snapshot so every field is read once per frame.
    /// Returns the snapshot that was drawn.
    pub fn render<D: DisplaySurface>(
        &self,
        display: &mut D,
        invert: bool,
    ) -> Result<StateSnapshot, DisplayError> {
        let snapshot = self.reader.snapshot();
        compose_frame(&snapshot, invert).draw(display)?;
        Ok(snapshot)
    }
}
