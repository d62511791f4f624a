//! Wall clock
//!
//! Anchors a network-sourced epoch to the local monotonic clock and
//! extrapolates time-of-day between syncs. The actual time acquisition
//! lives outside this crate (a Wi-Fi/NTP companion on the UART link);
//! this module owns the resync scheduling and the HHMMSS conversion
//! the display consumes.

/// Seconds in one day
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A wall-clock time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeOfDay {
    /// Convert a UTC epoch to local time of day
    ///
    /// `utc_offset_secs` may be negative (western timezones). Date is
    /// discarded; the display only shows HHMMSS.
    pub fn from_epoch(epoch: u32, utc_offset_secs: i32) -> Self {
        let local = (epoch as i64 + utc_offset_secs as i64).rem_euclid(SECONDS_PER_DAY as i64);
        let local = local as u32;
        Self {
            hours: (local / 3600) as u8,
            minutes: (local / 60 % 60) as u8,
            seconds: (local % 60) as u8,
        }
    }

    /// Pack as an HHMMSS integer for the digit buffer
    ///
    /// 12:34:56 becomes 123456; the buffer's LSB-first decomposition
    /// puts seconds on the rightmost tubes.
    pub fn hhmmss(&self) -> u32 {
        self.hours as u32 * 10_000 + self.minutes as u32 * 100 + self.seconds as u32
    }
}

/// Epoch anchored to the monotonic clock at sync time
#[derive(Debug, Clone, Copy)]
struct SyncPoint {
    epoch: u32,
    at_us: u64,
}

/// Wall clock with periodic-resync bookkeeping
///
/// Mirrors the companion contract: `sync` is called whenever a time
/// broadcast arrives, `now` extrapolates from the last anchor, and
/// `needs_resync` is polled by the owning task to decide when to ask
/// the companion for fresh time - immediately while never synced, then
/// once per `sync_interval_secs`.
#[derive(Debug, Clone)]
pub struct WallClock {
    utc_offset_secs: i32,
    sync_interval_secs: u32,
    anchor: Option<SyncPoint>,
}

impl WallClock {
    /// Create an unsynced clock
    pub const fn new(utc_offset_secs: i32, sync_interval_secs: u32) -> Self {
        Self {
            utc_offset_secs,
            sync_interval_secs,
            anchor: None,
        }
    }

    /// Whether a first sync has completed
    pub fn is_synced(&self) -> bool {
        self.anchor.is_some()
    }

    /// Anchor `epoch` (UTC seconds) to monotonic time `now_us`
    pub fn sync(&mut self, epoch: u32, now_us: u64) {
        self.anchor = Some(SyncPoint { epoch, at_us: now_us });
    }

    /// Current local time of day, or `None` before the first sync
    pub fn now(&self, now_us: u64) -> Option<TimeOfDay> {
        let anchor = self.anchor?;
        let elapsed_secs = (now_us.saturating_sub(anchor.at_us) / 1_000_000) as u32;
        let epoch = anchor.epoch.wrapping_add(elapsed_secs);
        Some(TimeOfDay::from_epoch(epoch, self.utc_offset_secs))
    }

    /// Whether the owning task should request a resync
    ///
    /// True while never synced, and again once the configured interval
    /// has elapsed since the last anchor.
    pub fn needs_resync(&self, now_us: u64) -> bool {
        match self.anchor {
            None => true,
            Some(anchor) => {
                let elapsed_secs = now_us.saturating_sub(anchor.at_us) / 1_000_000;
                elapsed_secs >= self.sync_interval_secs as u64
            }
        }
    }

    /// Replace the resync interval
    pub fn set_sync_interval(&mut self, secs: u32) {
        self.sync_interval_secs = secs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2021-01-02 03:04:05 UTC
    const EPOCH: u32 = 1_609_556_645;

    #[test]
    fn test_time_of_day_from_epoch() {
        let tod = TimeOfDay::from_epoch(EPOCH, 0);
        assert_eq!((tod.hours, tod.minutes, tod.seconds), (3, 4, 5));
    }

    #[test]
    fn test_positive_offset_wraps_midnight() {
        // 23:00 UTC + 2 h = 01:00 next day
        let tod = TimeOfDay::from_epoch(23 * 3600, 2 * 3600);
        assert_eq!((tod.hours, tod.minutes, tod.seconds), (1, 0, 0));
    }

    #[test]
    fn test_negative_offset_wraps_midnight() {
        // 01:00 UTC - 2 h = 23:00 previous day
        let tod = TimeOfDay::from_epoch(3600, -2 * 3600);
        assert_eq!((tod.hours, tod.minutes, tod.seconds), (23, 0, 0));
    }

    #[test]
    fn test_hhmmss_packing() {
        let tod = TimeOfDay {
            hours: 12,
            minutes: 34,
            seconds: 56,
        };
        assert_eq!(tod.hhmmss(), 123_456);

        let midnight = TimeOfDay {
            hours: 0,
            minutes: 0,
            seconds: 0,
        };
        assert_eq!(midnight.hhmmss(), 0);
    }

    #[test]
    fn test_unsynced_clock() {
        let clock = WallClock::new(0, 3600);
        assert!(!clock.is_synced());
        assert_eq!(clock.now(5_000_000), None);
        assert!(clock.needs_resync(0));
    }

    #[test]
    fn test_extrapolation_between_syncs() {
        let mut clock = WallClock::new(0, 3600);
        clock.sync(EPOCH, 10_000_000);

        // 90 seconds later: 03:04:05 + 90 s = 03:05:35
        let tod = clock.now(100_000_000).unwrap();
        assert_eq!((tod.hours, tod.minutes, tod.seconds), (3, 5, 35));
    }

    #[test]
    fn test_resync_after_interval() {
        let mut clock = WallClock::new(0, 3600);
        clock.sync(EPOCH, 0);

        assert!(!clock.needs_resync(3_599_000_000));
        assert!(clock.needs_resync(3_600_000_000));

        // A fresh sync rearms the interval
        clock.sync(EPOCH + 3600, 3_600_000_000);
        assert!(!clock.needs_resync(3_601_000_000));

        // A shorter interval takes effect against the same anchor
        clock.set_sync_interval(60);
        assert!(clock.needs_resync(3_660_000_000));
    }

    #[test]
    fn test_jst_offset() {
        // The reference deployment runs at UTC+9
        let tod = TimeOfDay::from_epoch(EPOCH, 9 * 3600);
        assert_eq!((tod.hours, tod.minutes, tod.seconds), (12, 4, 5));
    }
}
