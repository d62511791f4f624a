//! Board configuration
//!
//! Everything wiring- or deployment-specific lives here, constructed
//! once in `main` and passed into the tasks that need it. Pin
//! assignments stay next to the peripheral setup in `main`.

use lychnos_core::ScanTiming;
use lychnos_drivers::SelectPolarity;

/// Fixed configuration for one board/deployment
#[derive(Debug, Clone, Copy)]
pub struct BoardConfig {
    /// Electrical polarity of the digit-select driver stage
    pub select_polarity: SelectPolarity,
    /// Scan stage durations (hardware-tuning parameter)
    pub timing: ScanTiming,
    /// Local timezone offset from UTC, seconds (may be negative)
    pub utc_offset_secs: i32,
    /// How often to ask the companion for fresh time once synced
    pub sync_interval_secs: u32,
    /// Pacing between repeated sync requests while unanswered
    pub resync_retry_secs: u32,
    /// Total power-on splash duration
    pub splash_duration_ms: u32,
    /// Splash digit-tumble frame period
    pub splash_frame_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            select_polarity: SelectPolarity::ActiveHigh,
            timing: ScanTiming::default(),
            // Reference deployment runs at JST (UTC+9)
            utc_offset_secs: 9 * 3600,
            sync_interval_secs: 3600,
            resync_retry_secs: 5,
            splash_duration_ms: 2000,
            splash_frame_ms: 60,
        }
    }
}
