//! WS2812 LED grid on a PIO state machine

use charmatrix_core::config::Brightness;
use charmatrix_core::traits::{GridError, LedGrid, PixelMask, PIXEL_COUNT};
use charmatrix_drivers::ws2812::encode_frame;
use embassy_rp::dma::Channel;
use embassy_rp::pio::{Common, Instance, PioPin, StateMachine};
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812, PioWs2812Program};
use embassy_rp::Peri;

/// The 5x5 grid, one WS2812 chain on PIO state machine `S`
///
/// The LEDs take green, red, blue on the wire.
pub struct PioLedGrid<'d, P: Instance, const S: usize> {
    driver: PioWs2812<'d, P, S, PIXEL_COUNT, Grb>,
}

impl<'d, P: Instance, const S: usize> PioLedGrid<'d, P, S> {
    /// Load the chain onto `sm`, feeding it through `dma`
    pub fn new(
        common: &mut Common<'d, P>,
        sm: StateMachine<'d, P, S>,
        dma: Peri<'d, impl Channel>,
        pin: Peri<'d, impl PioPin>,
        program: &PioWs2812Program<'d, P>,
    ) -> Self {
        Self {
            driver: PioWs2812::new(common, sm, dma, pin, program),
        }
    }
}

impl<P: Instance, const S: usize> LedGrid for PioLedGrid<'_, P, S> {
    async fn show(&mut self, brightness: Brightness, mask: &PixelMask) -> Result<(), GridError> {
        // The DMA push has no failure path
        let frame = encode_frame(mask, brightness);
        self.driver.write(&frame).await;
        Ok(())
    }
}
