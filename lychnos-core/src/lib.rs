//! Board-agnostic core logic for the nixie clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (pins, decoder bus, select bank, clock)
//! - Digit buffer (the 6-digit value currently intended for display)
//! - Multiplexed scan engine (non-blocking BLANK/SETTLE/ON state machine)
//! - Splash and polarity self-test modes
//! - Wall clock (epoch anchoring and resync scheduling)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod buffer;
pub mod clock;
pub mod scan;
pub mod splash;
pub mod traits;

pub use buffer::{DigitBuffer, DIGIT_COUNT};
pub use scan::{ScanEngine, ScanTiming, Stage};
