//! Scan stage durations
//!
//! These are hardware-tuning parameters, not fixed constants: the
//! right values depend on the anode driver propagation delay and the
//! decoder settling time of the particular board.

/// Durations of the three scan stages, in microseconds
///
/// One full refresh cycle (all six tubes once) takes
/// `6 * (blank_us + settle_us + on_us)`. The defaults land the refresh
/// rate in the flicker-free band (roughly 70-120 Hz full-cycle rate);
/// boards with slower drivers should stretch `blank_us` rather than
/// `settle_us`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanTiming {
    /// Time the bus holds the blank code with all selects deasserted,
    /// letting the previous tube's driver fully release
    pub blank_us: u32,
    /// Time the bus holds the target digit before the tube is gated on
    pub settle_us: u32,
    /// Time the tube stays lit
    pub on_us: u32,
}

impl Default for ScanTiming {
    fn default() -> Self {
        Self {
            blank_us: 220,
            settle_us: 8,
            on_us: 1800,
        }
    }
}

impl ScanTiming {
    /// Duration of one BLANK -> SETTLE -> ON pass for a single tube
    pub const fn digit_period_us(&self) -> u32 {
        self.blank_us + self.settle_us + self.on_us
    }

    /// Duration of one full refresh cycle over all six tubes
    pub const fn frame_period_us(&self) -> u32 {
        self.digit_period_us() * crate::buffer::DIGIT_COUNT as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_refresh_rate_is_flicker_free() {
        let timing = ScanTiming::default();
        let frame_hz = 1_000_000 / timing.frame_period_us();
        assert!(
            (70..=120).contains(&frame_hz),
            "frame rate {} Hz outside flicker-free band",
            frame_hz
        );
    }

    #[test]
    fn test_periods() {
        let timing = ScanTiming {
            blank_us: 220,
            settle_us: 8,
            on_us: 1800,
        };
        assert_eq!(timing.digit_period_us(), 2028);
        assert_eq!(timing.frame_period_us(), 12168);
    }
}
