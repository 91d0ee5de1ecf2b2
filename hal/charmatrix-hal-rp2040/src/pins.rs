//! GPIO allocation by pin number
//!
//! Plain GPIOs (status LEDs, buttons) are taken from a [`PinBank`] by the
//! numbers in the board config. Pins wired to a peripheral block need
//! their concrete type, so they are handed out through [`BusPeripherals`]
//! and are reserved in the bank.

use charmatrix_core::config::HardwareConfig;
use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{
    CORE1, DMA_CH0, I2C1, PIN_0, PIN_1, PIN_14, PIN_15, PIN_7, PIO0, UART0,
};
use embassy_rp::{Peri, Peripherals};

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: usize = 30;

/// GPIOs owned by [`BusPeripherals`]: UART0 TX/RX, WS2812 data, I2C1 SDA/SCL
pub const BUS_PINS: [u8; 5] = [0, 1, 7, 14, 15];

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken
    AlreadyTaken(u8),
    /// Pin belongs to a peripheral block
    Reserved(u8),
    /// Config puts a bus signal on a pin this board does not route it to
    BusMismatch { expected: u8, configured: u8 },
}

/// Plain GPIOs, taken by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        if usize::from(pin_num) >= GPIO_COUNT {
            return Err(PinError::InvalidPin(pin_num));
        }
        if BUS_PINS.contains(&pin_num) {
            return Err(PinError::Reserved(pin_num));
        }
        self.pins[usize::from(pin_num)]
            .take()
            .ok_or(PinError::AlreadyTaken(pin_num))
    }
}

/// Peripheral blocks and the pins wired to them
pub struct BusPeripherals {
    pub uart0: Peri<'static, UART0>,
    pub uart_tx: Peri<'static, PIN_0>,
    pub uart_rx: Peri<'static, PIN_1>,
    pub i2c1: Peri<'static, I2C1>,
    pub sda: Peri<'static, PIN_14>,
    pub scl: Peri<'static, PIN_15>,
    pub pio0: Peri<'static, PIO0>,
    pub matrix_pin: Peri<'static, PIN_7>,
    pub dma_ch0: Peri<'static, DMA_CH0>,
    pub core1: Peri<'static, CORE1>,
}

/// Split the peripherals into the GPIO bank and the bus blocks
pub fn split(p: Peripherals) -> (PinBank, BusPeripherals) {
    let bank = PinBank {
        pins: [
            None, // UART0 TX
            None, // UART0 RX
            Some(p.PIN_2.into()),
            Some(p.PIN_3.into()),
            Some(p.PIN_4.into()),
            Some(p.PIN_5.into()),
            Some(p.PIN_6.into()),
            None, // WS2812 data
            Some(p.PIN_8.into()),
            Some(p.PIN_9.into()),
            Some(p.PIN_10.into()),
            Some(p.PIN_11.into()),
            Some(p.PIN_12.into()),
            Some(p.PIN_13.into()),
            None, // I2C1 SDA
            None, // I2C1 SCL
            Some(p.PIN_16.into()),
            Some(p.PIN_17.into()),
            Some(p.PIN_18.into()),
            Some(p.PIN_19.into()),
            Some(p.PIN_20.into()),
            Some(p.PIN_21.into()),
            Some(p.PIN_22.into()),
            Some(p.PIN_23.into()),
            Some(p.PIN_24.into()),
            Some(p.PIN_25.into()),
            Some(p.PIN_26.into()),
            Some(p.PIN_27.into()),
            Some(p.PIN_28.into()),
            Some(p.PIN_29.into()),
        ],
    };
    let bus = BusPeripherals {
        uart0: p.UART0,
        uart_tx: p.PIN_0,
        uart_rx: p.PIN_1,
        i2c1: p.I2C1,
        sda: p.PIN_14,
        scl: p.PIN_15,
        pio0: p.PIO0,
        matrix_pin: p.PIN_7,
        dma_ch0: p.DMA_CH0,
        core1: p.CORE1,
    };
    (bank, bus)
}

/// Check that the config routes every bus signal to the pin
/// [`BusPeripherals`] hands out for it
pub fn check_bus_pins(config: &HardwareConfig) -> Result<(), PinError> {
    let routed = [
        (0, config.console_tx),
        (1, config.console_rx),
        (7, config.matrix_pin),
        (14, config.sda_pin),
        (15, config.scl_pin),
    ];
    for (expected, configured) in routed {
        if expected != configured {
            return Err(PinError::BusMismatch {
                expected,
                configured,
            });
        }
    }
    Ok(())
}
