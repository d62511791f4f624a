//! Lychnos - Nixie Tube Clock Firmware
//!
//! Main firmware binary for RP2040-based nixie clock boards. Six
//! IN-12 class tubes are multiplexed through one shared BCD decoder;
//! wall-clock time arrives over UART from a Wi-Fi/NTP companion MCU.
//!
//! Named after the Greek "lychnos" (λύχνος) meaning "lamp" - the warm
//! neon glow this firmware keeps flicker-free.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Instant;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lychnos_core::clock::WallClock;
#[cfg(not(feature = "polarity-check"))]
use lychnos_core::splash::{splash_random, XorShift32};
use lychnos_core::ScanEngine;
use lychnos_drivers::{BcdBus, DigitSelects};

use crate::platform::OutPin;

mod channels;
mod config;
mod platform;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lychnos firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let board = config::BoardConfig::default();

    // Decoder bus lines A..D, least-significant first
    // Pin assignments are board-specific (rev B board: GPIO2..GPIO5)
    let bus = BcdBus::new([
        OutPin::new(Output::new(p.PIN_2, Level::Low)),
        OutPin::new(Output::new(p.PIN_3, Level::Low)),
        OutPin::new(Output::new(p.PIN_4, Level::Low)),
        OutPin::new(Output::new(p.PIN_5, Level::Low)),
    ]);

    // Digit-select lines, units tube first (rev B board: GPIO6..GPIO11)
    let selects = DigitSelects::new(
        [
            OutPin::new(Output::new(p.PIN_6, Level::Low)),
            OutPin::new(Output::new(p.PIN_7, Level::Low)),
            OutPin::new(Output::new(p.PIN_8, Level::Low)),
            OutPin::new(Output::new(p.PIN_9, Level::Low)),
            OutPin::new(Output::new(p.PIN_10, Level::Low)),
            OutPin::new(Output::new(p.PIN_11, Level::Low)),
        ],
        board.select_polarity,
    );

    let mut engine = ScanEngine::new(bus, selects, board.timing);
    engine.force_blank(Instant::now().as_micros());
    info!("Display initialized");

    // Select-polarity walk for board bring-up (runs instead of splash)
    #[cfg(feature = "polarity-check")]
    {
        info!("Running polarity self-test");
        lychnos_core::splash::polarity_self_test(&mut engine, &mut platform::BusyDelay, 500);
    }

    // One-time power-on splash; the display is still exclusively ours
    // here, so running it blocking before task spawn is safe
    #[cfg(not(feature = "polarity-check"))]
    {
        let mut clock = platform::UptimeClock;
        let mut rng = XorShift32::new(Instant::now().as_ticks() as u32);
        splash_random(
            &mut engine,
            &mut clock,
            &mut rng,
            board.splash_duration_ms,
            board.splash_frame_ms,
        );
        info!("Splash complete");
    }

    // UART link to the Wi-Fi/NTP companion
    let uart_config = UartConfig::default(); // 115200 baud default
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("Companion UART initialized");

    let wall = WallClock::new(board.utc_offset_secs, board.sync_interval_secs);

    // Spawn tasks
    spawner.spawn(tasks::scan_task(engine)).unwrap();
    spawner
        .spawn(tasks::timekeeper_task(wall, board.resync_retry_secs))
        .unwrap();
    spawner.spawn(tasks::time_rx_task(rx)).unwrap();
    spawner.spawn(tasks::time_tx_task(tx)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned
    // tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
