//! Display refresh task
//!
//! Owns the scan engine and drives it at high frequency. This is the
//! only task that touches the decoder bus and select lines once
//! scanning starts.

use defmt::*;
use embassy_time::{Duration, Instant, Timer};

use lychnos_core::ScanEngine;
use lychnos_drivers::{BcdBus, DigitSelects};

use crate::channels::DISPLAY_VALUE;
use crate::platform::OutPin;

/// Tick pacing in microseconds
///
/// Granularity only stretches a stage (transitions are keyed off
/// elapsed time, recomputed fresh every tick); it never corrupts the
/// ring. 100 us is comfortably finer than the shortest interesting
/// stage boundary while leaving the executor plenty of idle time.
const REFRESH_TICK_US: u64 = 100;

/// Scan task - multiplexes the six tubes forever
#[embassy_executor::task]
pub async fn scan_task(mut engine: ScanEngine<BcdBus<OutPin>, DigitSelects<OutPin>>) {
    info!("Scan task started");

    loop {
        // Wholesale buffer replacement between ticks; the digit being
        // rendered keeps its per-pass snapshot
        if let Some(value) = DISPLAY_VALUE.try_take() {
            engine.set_number(value);
        }

        engine.tick(Instant::now().as_micros());
        Timer::after(Duration::from_micros(REFRESH_TICK_US)).await;
    }
}
