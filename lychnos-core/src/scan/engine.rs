//! Non-blocking scan state machine
//!
//! Each call to [`ScanEngine::tick`] advances the display by at most
//! one micro-step of the BLANK -> SETTLE -> ON ring and returns
//! immediately. The BLANK stage keeps the shared bus unreadable while
//! the previous tube's select driver releases; the SETTLE stage lets
//! the new bus value stabilize before the next tube is gated on.
//! Skipping either window makes neighboring tubes flash the wrong
//! numeral ("ghosting").

use crate::buffer::{DigitBuffer, DIGIT_COUNT};
use crate::traits::{DecoderBus, DelayUs, SelectBank};

use super::timing::ScanTiming;

/// Scan stages, one ring per tube position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// All selects deasserted, bus holds the blank code
    Blank,
    /// Bus holds the target digit, tube not yet gated on
    Settle,
    /// Tube lit
    On,
}

/// The multiplexing scan engine
///
/// Owns the decoder bus, the select bank, and the digit buffer. The
/// bus and select lines are exclusively this engine's while scanning
/// is active; the buffer is written wholesale by the owning task and
/// read here one position per pass, so a write landing between ticks
/// shows a stale digit for at most one refresh cycle.
pub struct ScanEngine<B, S> {
    bus: B,
    select: S,
    buffer: DigitBuffer,
    timing: ScanTiming,
    stage: Stage,
    digit_index: usize,
    stage_entry_us: u64,
    /// Latch so the BLANK entry side effect fires once per stage
    /// instance instead of on every tick spent waiting in BLANK
    blank_applied: bool,
}

impl<B: DecoderBus, S: SelectBank> ScanEngine<B, S> {
    /// Create an engine in the BLANK stage at tube 0
    ///
    /// The stage entry timestamp starts at zero; callers that construct
    /// the engine long after their monotonic clock started should call
    /// [`force_blank`](Self::force_blank) first so the first BLANK
    /// window is not shortened.
    pub fn new(bus: B, select: S, timing: ScanTiming) -> Self {
        Self {
            bus,
            select,
            buffer: DigitBuffer::new(),
            timing,
            stage: Stage::Blank,
            digit_index: 0,
            stage_entry_us: 0,
            blank_applied: false,
        }
    }

    /// Replace the displayed value (base-10 decomposition, low 6 digits)
    pub fn set_number(&mut self, value: u32) {
        self.buffer.set_number(value);
    }

    /// Replace all six digits at once, least-significant first
    pub fn set_digits(&mut self, digits: [u8; DIGIT_COUNT]) {
        self.buffer.set_digits(digits);
    }

    /// Replace the stage durations wholesale
    ///
    /// Safe at any time; a change only affects the next stage boundary.
    pub fn set_timing(&mut self, timing: ScanTiming) {
        self.timing = timing;
    }

    /// Current stage durations
    pub fn timing(&self) -> ScanTiming {
        self.timing
    }

    /// Stage the engine is currently in
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Tube position about to be or currently being rendered
    pub fn digit_index(&self) -> usize {
        self.digit_index
    }

    /// The displayed digits
    pub fn buffer(&self) -> &DigitBuffer {
        &self.buffer
    }

    /// Advance the scan by at most one stage transition
    ///
    /// Never blocks; calling again before the current stage's exit
    /// condition is met is a no-op. Transitions are keyed off elapsed
    /// time since stage entry, so missed ticks delay a transition
    /// rather than corrupt it. The compound transitions that touch
    /// both the select lines and the bus run inside a minimal critical
    /// section so a concurrent execution context touching the same
    /// lines cannot observe them half-done.
    pub fn tick(&mut self, now_us: u64) {
        let elapsed = now_us.saturating_sub(self.stage_entry_us);

        match self.stage {
            Stage::Blank => {
                if !self.blank_applied {
                    critical_section::with(|_| {
                        self.select.deassert_all();
                        self.bus.blank();
                    });
                    self.blank_applied = true;
                }
                if elapsed >= self.timing.blank_us as u64 {
                    // All selects are deasserted here, so the shared
                    // bus is safe to retarget.
                    self.bus.write_digit(self.buffer.digit(self.digit_index));
                    self.enter(Stage::Settle, now_us);
                }
            }
            Stage::Settle => {
                if elapsed >= self.timing.settle_us as u64 {
                    let index = self.digit_index;
                    critical_section::with(|_| self.select.assert_digit(index));
                    self.enter(Stage::On, now_us);
                }
            }
            Stage::On => {
                if elapsed >= self.timing.on_us as u64 {
                    critical_section::with(|_| self.select.deassert_all());
                    self.digit_index = (self.digit_index + 1) % DIGIT_COUNT;
                    self.blank_applied = false;
                    self.enter(Stage::Blank, now_us);
                }
            }
        }
    }

    fn enter(&mut self, stage: Stage, now_us: u64) {
        self.stage = stage;
        self.stage_entry_us = now_us;
    }

    /// Blank the hardware and restart the ring from tube 0
    ///
    /// The select lines are deasserted and the bus holds the blank
    /// code on return; the next [`tick`](Self::tick) resumes a normal
    /// BLANK stage from `now_us`.
    pub fn force_blank(&mut self, now_us: u64) {
        critical_section::with(|_| {
            self.select.deassert_all();
            self.bus.blank();
        });
        self.stage = Stage::Blank;
        self.digit_index = 0;
        self.stage_entry_us = now_us;
        self.blank_applied = true;
    }

    /// Render one full display pass with real blocking delays
    ///
    /// Runs the same blank/settle/on sequence as the tick path but as
    /// an explicit busy loop over all six positions, reading from the
    /// caller's digit array instead of the live buffer. Finishes with
    /// the bus blanked and every select deasserted.
    ///
    /// Diagnostics and splash only - mutually exclusive with
    /// tick-driven operation.
    pub fn run_blocking_frame<D: DelayUs>(&mut self, digits: &[u8; DIGIT_COUNT], delay: &mut D) {
        for (index, &digit) in digits.iter().enumerate() {
            critical_section::with(|_| {
                self.select.deassert_all();
                self.bus.blank();
            });
            delay.delay_us(self.timing.blank_us);

            self.bus.write_digit(digit % 10);
            delay.delay_us(self.timing.settle_us);

            critical_section::with(|_| self.select.assert_digit(index));
            delay.delay_us(self.timing.on_us);

            critical_section::with(|_| self.select.deassert_all());
        }
        self.bus.blank();
    }

    /// Light a single tube for `hold_us`, then blank everything
    ///
    /// Blocking diagnostic primitive used by the polarity self-test.
    pub fn hold_digit<D: DelayUs>(&mut self, index: usize, digit: u8, delay: &mut D, hold_us: u32) {
        critical_section::with(|_| {
            self.select.deassert_all();
            self.bus.blank();
        });
        delay.delay_us(self.timing.blank_us);

        self.bus.write_digit(digit % 10);
        delay.delay_us(self.timing.settle_us);

        critical_section::with(|_| self.select.assert_digit(index));
        delay.delay_us(hold_us);

        critical_section::with(|_| {
            self.select.deassert_all();
            self.bus.blank();
        });
    }
}
