//! Console UART receive side

use charmatrix_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use charmatrix_hal::ReadyReader;
use embassy_rp::uart::{self, BufferedUartRx};

/// Console input: never waits, any read error counts as "no byte"
pub type ConsoleRx = ReadyReader<BufferedUartRx>;

/// Wrap the receive half of the buffered console UART
pub fn console_rx(rx: BufferedUartRx) -> ConsoleRx {
    ReadyReader::new(rx)
}

/// Translate the board UART settings into the embassy config
pub fn to_embassy_config(config: &UartConfig) -> uart::Config {
    let mut out = uart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    out.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    out
}
