//! Splash and self-test modes
//!
//! Offline display-drive modes: a power-on "tumbling digits" effect
//! and a manual polarity check. Both block and must never be
//! interleaved with tick-driven scanning.

use crate::buffer::DIGIT_COUNT;
use crate::scan::ScanEngine;
use crate::traits::{DecoderBus, DelayUs, MonotonicClock, SelectBank};

/// Source of uniform randomness for the splash effect
///
/// Quality is cosmetic only; any uniform-ish generator will do.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}

/// Small xorshift PRNG
///
/// Good enough for tumbling splash digits; seed it from an uptime
/// counter or a hardware entropy register.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator; a zero seed is remapped (xorshift sticks at 0)
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }
}

impl RandomSource for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

/// Six independently uniform digits in [0, 9]
fn random_digits<R: RandomSource>(rng: &mut R) -> [u8; DIGIT_COUNT] {
    let mut digits = [0u8; DIGIT_COUNT];
    for d in digits.iter_mut() {
        *d = (rng.next_u32() % 10) as u8;
    }
    digits
}

/// Power-on splash: tumble random digits for `duration_ms`
///
/// Every `frame_ms` the buffer is loaded with a fresh random 6-digit
/// value while the scan engine keeps ticking, so the effect multiplexes
/// exactly like normal display. Ends by forcing the blank/deasserted
/// state. Failure-free by construction.
pub fn splash_random<B, S, C, R>(
    engine: &mut ScanEngine<B, S>,
    clock: &mut C,
    rng: &mut R,
    duration_ms: u32,
    frame_ms: u32,
) where
    B: DecoderBus,
    S: SelectBank,
    C: MonotonicClock,
    R: RandomSource,
{
    let start = clock.now_micros();
    let total_us = duration_ms as u64 * 1000;
    let frame_us = frame_ms.max(1) as u64 * 1000;
    let mut next_frame = start;

    loop {
        let now = clock.now_micros();
        if now.saturating_sub(start) >= total_us {
            break;
        }
        if now >= next_frame {
            engine.set_digits(random_digits(rng));
            next_frame = now + frame_us;
        }
        engine.tick(now);
    }

    engine.force_blank(clock.now_micros());
}

/// Manual select-polarity check
///
/// Lights each tube position in turn - each showing its own index -
/// holding for `hold_ms`. With inverted polarity configuration the
/// operator sees five tubes lit and one dark instead, which makes the
/// wiring mistake obvious. Not part of automated operation.
pub fn polarity_self_test<B, S, D>(engine: &mut ScanEngine<B, S>, delay: &mut D, hold_ms: u32)
where
    B: DecoderBus,
    S: SelectBank,
    D: DelayUs,
{
    for index in 0..DIGIT_COUNT {
        engine.hold_digit(index, index as u8, delay, hold_ms.saturating_mul(1000));
    }
}
