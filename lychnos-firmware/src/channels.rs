//! Inter-task communication channels
//!
//! Defines the static signals used for communication between Embassy
//! tasks. Each signal has exactly one writer and one reader; a newer
//! value simply replaces an unconsumed older one, which is the right
//! semantics for all three (only the latest time/value matters).

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Latest HHMMSS value for the display (timekeeper -> scan task)
///
/// The scan task applies it as a wholesale digit-buffer write between
/// ticks; no lock is needed because the buffer has a single writer and
/// a one-refresh-cycle-stale read is acceptable.
pub static DISPLAY_VALUE: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Fresh UTC epoch from the companion (time RX -> timekeeper)
pub static TIME_SYNC: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Request a time broadcast from the companion (timekeeper -> time TX)
pub static SYNC_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();
