//! Hardware configuration types
//!
//! Pin assignments, bus settings and the display address for the board.

use charmatrix_hal::{I2cConfig, UartConfig};

use crate::button::ButtonPins;

/// Number of GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Pin configuration with optional pull-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self { pin, pull_up: true }
    }
}

/// Errors found while checking a [`HardwareConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Same pin assigned to two functions
    DuplicatePin(u8),
    /// I2C address outside the 7-bit range
    InvalidAddress(u8),
}

/// Complete board wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HardwareConfig {
    /// Display bus clock
    pub i2c: I2cConfig,
    /// Display bus data line
    pub sda_pin: u8,
    /// Display bus clock line
    pub scl_pin: u8,
    /// 7-bit display address
    pub display_addr: u8,
    /// Red status LED (initialised low, never driven afterwards)
    pub red_led: PinConfig,
    /// Green status LED, toggled by button A
    pub green_led: PinConfig,
    /// Blue status LED, toggled by button B
    pub blue_led: PinConfig,
    /// Button A (falling edge = press)
    pub button_a: PinConfig,
    /// Button B (falling edge = press)
    pub button_b: PinConfig,
    /// WS2812 grid data line
    pub matrix_pin: u8,
    /// Serial console settings
    pub console: UartConfig,
    /// Console transmit pin
    pub console_tx: u8,
    /// Console receive pin
    pub console_rx: u8,
}

impl HardwareConfig {
    /// BitDogLab wiring
    pub const BITDOGLAB: Self = Self {
        i2c: I2cConfig::FAST,
        sda_pin: 14,
        scl_pin: 15,
        display_addr: 0x3C,
        red_led: PinConfig::new(13),
        green_led: PinConfig::new(11),
        blue_led: PinConfig::new(12),
        button_a: PinConfig::with_pullup(5),
        button_b: PinConfig::with_pullup(6),
        matrix_pin: 7,
        console: UartConfig::CONSOLE,
        console_tx: 0,
        console_rx: 1,
    };

    /// Pins the button handler has to tell apart
    pub const fn button_pins(&self) -> ButtonPins {
        ButtonPins {
            button_a: self.button_a.pin,
            button_b: self.button_b.pin,
        }
    }

    /// Every GPIO this configuration claims, in a fixed order
    pub const fn claimed_pins(&self) -> [u8; 10] {
        [
            self.sda_pin,
            self.scl_pin,
            self.red_led.pin,
            self.green_led.pin,
            self.blue_led.pin,
            self.button_a.pin,
            self.button_b.pin,
            self.matrix_pin,
            self.console_tx,
            self.console_rx,
        ]
    }

    /// Check for out-of-range and doubly-assigned pins
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_addr > 0x7F {
            return Err(ConfigError::InvalidAddress(self.display_addr));
        }

        let pins = self.claimed_pins();
        for (i, &pin) in pins.iter().enumerate() {
            if pin >= GPIO_COUNT {
                return Err(ConfigError::InvalidPin(pin));
            }
            if pins[i + 1..].contains(&pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
        }

        Ok(())
    }
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self::BITDOGLAB
    }
}
