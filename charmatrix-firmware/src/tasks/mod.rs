//! Embassy tasks
//!
//! - `button_task`: interrupt executor, debounced LED toggles
//! - `input_task`: core 1, serial character polling

mod button;
mod input;

pub use button::button_task;
pub use input::input_task;
