//! Adapters from embassy-rp peripherals to the core traits

use embassy_rp::gpio::Output;
use embassy_time::{block_for, Duration, Instant};

use lychnos_core::traits::{DelayUs, MonotonicClock, OutputPin};

/// GPIO output wrapped for the core pin trait
pub struct OutPin(Output<'static>);

impl OutPin {
    pub fn new(output: Output<'static>) -> Self {
        Self(output)
    }
}

impl OutputPin for OutPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Monotonic microsecond clock backed by the embassy uptime timer
pub struct UptimeClock;

impl MonotonicClock for UptimeClock {
    fn now_micros(&mut self) -> u64 {
        Instant::now().as_micros()
    }
}

/// Busy-wait delay for the blocking diagnostic paths
pub struct BusyDelay;

impl DelayUs for BusyDelay {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }
}
