//! charmatrix - Character Picker Firmware
//!
//! Shows the last byte received on the serial console on the OLED and as
//! a glyph on the 5x5 LED grid. Buttons A and B toggle the green and blue
//! LEDs; their state is shown on the OLED as well.
//!
//! Three execution contexts share one `SharedState`:
//!
//! - interrupt executor (SWI_IRQ_1, priority P2): button task
//! - core 1 thread executor: console input poller
//! - core 0 thread executor: render loop in `main`

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{Executor, InterruptExecutor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::multicore::{spawn_core1, Stack};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::PioWs2812Program;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_rp::Peri;
use embassy_time::Timer;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};
use static_cell::{ConstStaticCell, StaticCell};
use {defmt_rtt as _, panic_probe as _};

use charmatrix_core::app::RenderLoop;
use charmatrix_core::button::{DebouncedButtons, StatusLeds};
use charmatrix_core::config::{HardwareConfig, PinConfig, Timing, LED_BRIGHTNESS};
use charmatrix_core::input::CharacterPoller;
use charmatrix_core::state::{Phase, PhaseEvent, SharedState};
use charmatrix_core::traits::DisplaySurface;
use charmatrix_drivers::{Font5x5, GraphicsSurface};
use charmatrix_hal_rp2040::gpio::LedPin;
use charmatrix_hal_rp2040::matrix::PioLedGrid;
use charmatrix_hal_rp2040::pins::{self, PinBank};
use charmatrix_hal_rp2040::uart::{console_rx, to_embassy_config};

mod tasks;

const BOARD: HardwareConfig = HardwareConfig::BITDOGLAB;
const TIMING: Timing = Timing::DEFAULT;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

static SHARED: ConstStaticCell<SharedState> = ConstStaticCell::new(SharedState::new());

static BUTTON_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

static CORE1_STACK: ConstStaticCell<Stack<4096>> = ConstStaticCell::new(Stack::new());
static CORE1_EXECUTOR: StaticCell<Executor> = StaticCell::new();

// Console buffers (must live forever); only the receive side is used
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    BUTTON_EXECUTOR.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("charmatrix firmware starting...");
    let mut phase = Phase::default();

    if let Err(e) = BOARD.validate() {
        defmt::panic!("Invalid board config: {:?}", e);
    }
    if let Err(e) = pins::check_bus_pins(&BOARD) {
        defmt::panic!("Board config does not match bus wiring: {:?}", e);
    }

    let p = embassy_rp::init(Default::default());
    let (mut bank, bus) = pins::split(p);
    info!("Peripherals initialized");

    // Status LEDs start off; red is never driven again
    let leds = StatusLeds::new(
        LedPin::new(take_pin(&mut bank, BOARD.red_led)),
        LedPin::new(take_pin(&mut bank, BOARD.green_led)),
        LedPin::new(take_pin(&mut bank, BOARD.blue_led)),
    );
    let (red_led, green_led, blue_led) = leds.into_parts();

    let button_a = button_input(&mut bank, BOARD.button_a);
    let button_b = button_input(&mut bank, BOARD.button_b);
    info!("GPIO initialized");

    // OLED on I2C1
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = BOARD.i2c.frequency;
    let i2c = I2c::new_blocking(bus.i2c1, bus.scl, bus.sda, i2c_config);
    let interface = I2CDisplayInterface::new_custom_address(i2c, BOARD.display_addr);
    let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if oled.init().is_err() {
        defmt::panic!("SSD1306 init failed at address {=u8:#x}", BOARD.display_addr);
    }
    let mut display = GraphicsSurface::new(oled);
    unwrap!(display.fill(false));
    unwrap!(display.present_frame());
    info!("Display initialized");

    // WS2812 grid on PIO0 SM0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(bus.pio0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let mut grid = PioLedGrid::new(&mut common, sm0, bus.dma_ch0, bus.matrix_pin, &program);
    info!("LED grid initialized");

    let shared: &'static mut SharedState = SHARED.take();
    let (publisher, toggler, reader) = shared.split();

    // Buttons preempt the render loop
    let buttons = DebouncedButtons::new(
        BOARD.button_pins(),
        toggler,
        green_led,
        blue_led,
        TIMING.debounce_window_us(),
    );
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let button_spawner = BUTTON_EXECUTOR.start(interrupt::SWI_IRQ_1);
    unwrap!(button_spawner.spawn(tasks::button_task(
        button_a,
        button_b,
        BOARD.button_pins(),
        buttons
    )));
    info!("Button handler armed");

    // Console input on core 1; the UART interrupt is bound there
    let (uart0, uart_tx, uart_rx) = (bus.uart0, bus.uart_tx, bus.uart_rx);
    spawn_core1(bus.core1, CORE1_STACK.take(), move || {
        let tx_buf = TX_BUF.init([0u8; 16]);
        let rx_buf = RX_BUF.init([0u8; 64]);
        let uart = Uart::new_blocking(uart0, uart_tx, uart_rx, to_embassy_config(&BOARD.console))
            .into_buffered(Irqs, tx_buf, rx_buf);
        let (_tx, rx) = uart.split();
        let poller = CharacterPoller::new(console_rx(rx), publisher, TIMING.poll_interval_ms);

        let executor = CORE1_EXECUTOR.init(Executor::new());
        executor.run(|spawner| unwrap!(spawner.spawn(tasks::input_task(poller))));
    });

    phase = phase.transition(PhaseEvent::SetupComplete);
    info!("Setup complete, phase {:?}, red lit={}", phase, red_led.is_lit());

    let mut render_loop = RenderLoop::new(reader, Font5x5, LED_BRIGHTNESS);
    loop {
        let report = render_loop.cycle(&mut display, &mut grid).await;
        if let Err(e) = report.display {
            warn!("Frame {} not shown: {:?}", report.cycle, e);
        }
        if let Err(e) = report.grid {
            warn!("Grid update {} failed: {:?}", report.cycle, e);
        }
        trace!("Cycle {} inverted={}", report.cycle, report.inverted);

        Timer::after_millis(u64::from(TIMING.frame_interval_ms)).await;
    }
}

/// Take a configured pin from the bank; a missing pin is fatal
fn take_pin(bank: &mut PinBank, pin: PinConfig) -> Peri<'static, AnyPin> {
    match bank.take(pin.pin) {
        Ok(p) => p,
        Err(e) => defmt::panic!("GPIO {} unavailable: {:?}", pin.pin, e),
    }
}

fn button_input(bank: &mut PinBank, pin: PinConfig) -> Input<'static> {
    let pull = if pin.pull_up { Pull::Up } else { Pull::None };
    Input::new(take_pin(bank, pin), pull)
}
