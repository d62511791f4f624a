//! Time source traits

/// Monotonic microsecond clock
///
/// The scan engine and wall clock key every decision off elapsed time
/// read from a clock like this; under test it is a plain counter.
pub trait MonotonicClock {
    /// Current monotonic time in microseconds since an arbitrary epoch
    fn now_micros(&mut self) -> u64;
}

/// Blocking microsecond delay
///
/// Used only by the offline diagnostic paths (blocking frame, polarity
/// self-test). The production scan path never blocks.
pub trait DelayUs {
    /// Busy-wait for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}
