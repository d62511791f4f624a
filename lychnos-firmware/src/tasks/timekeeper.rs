//! Wall-clock task
//!
//! Owns the wall clock: applies incoming syncs, schedules resync
//! requests, and publishes the HHMMSS display value once per second
//! change.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use lychnos_core::clock::WallClock;

use crate::channels::{DISPLAY_VALUE, SYNC_REQUEST, TIME_SYNC};

/// Poll period; fine enough that the displayed seconds never skip
const POLL_MS: u64 = 250;

/// Timekeeper task - wall clock owner
#[embassy_executor::task]
pub async fn timekeeper_task(mut wall: WallClock, resync_retry_secs: u32) {
    info!("Timekeeper task started");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_MS));
    let mut last_request: Option<Instant> = None;
    let mut last_shown: Option<u32> = None;

    loop {
        ticker.next().await;
        let now = Instant::now();
        let now_us = now.as_micros();

        if let Some(epoch) = TIME_SYNC.try_take() {
            wall.sync(epoch, now_us);
            info!("Wall clock synced (epoch {})", epoch);
        }

        // Request fresh time at boot and once per sync interval,
        // paced so an unanswered request is not machine-gunned
        if wall.needs_resync(now_us) {
            let due = last_request
                .map_or(true, |at| now - at >= Duration::from_secs(resync_retry_secs as u64));
            if due {
                SYNC_REQUEST.signal(());
                last_request = Some(now);
            }
        }

        // All zeros until the first sync lands
        let value = wall.now(now_us).map_or(0, |tod| tod.hhmmss());
        if last_shown != Some(value) {
            DISPLAY_VALUE.signal(value);
            last_shown = Some(value);
        }
    }
}
