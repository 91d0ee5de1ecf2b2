//! Serial input task (core 1)

use defmt::*;
use embassy_time::{Duration, Timer};

use charmatrix_core::input::CharacterPoller;
use charmatrix_hal_rp2040::uart::ConsoleRx;

/// Poll the console for one byte per interval, forever
#[embassy_executor::task]
pub async fn input_task(mut poller: CharacterPoller<'static, ConsoleRx>) {
    info!("Input task started on core 1");

    let interval = Duration::from_millis(u64::from(poller.poll_interval_ms()));
    loop {
        if let Some(byte) = poller.poll_once() {
            debug!("Selected char {=u8:#x}", byte);
        }
        Timer::after(interval).await;
    }
}
