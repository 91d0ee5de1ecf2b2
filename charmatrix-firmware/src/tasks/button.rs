//! Button task
//!
//! Runs on the high-priority interrupt executor so a press is handled
//! even while core 0 is busy with an I2C frame.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use charmatrix_core::button::{ButtonPins, DebouncedButtons, EdgeEvents};
use charmatrix_hal_rp2040::gpio::LedPin;

/// Button handler with its two LED outputs
pub type Buttons = DebouncedButtons<'static, LedPin<'static>, LedPin<'static>>;

/// Wait for falling edges on either button and toggle its LED
#[embassy_executor::task]
pub async fn button_task(
    mut button_a: Input<'static>,
    mut button_b: Input<'static>,
    pins: ButtonPins,
    mut buttons: Buttons,
) {
    info!("Button task started");

    loop {
        let gpio = match select(
            button_a.wait_for_falling_edge(),
            button_b.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(()) => pins.button_a,
            Either::Second(()) => pins.button_b,
        };

        let now_us = Instant::now().as_micros();
        match buttons.on_edge(gpio, EdgeEvents::EDGE_FALL, now_us) {
            Some(toggle) => debug!("{:?} -> led on={}", toggle.button, toggle.led_on),
            None => trace!("GPIO {} edge dropped", gpio),
        }
    }
}
