//! Hardware driver implementations for the Lychnos nixie clock
//!
//! Implements the core display traits over plain [`OutputPin`]s:
//! the shared 4-line BCD decoder bus and the 6-line digit-select bank.
//! Everything here is a fire-and-forget digital line set with no
//! feedback channel; the only defensiveness is ignoring out-of-range
//! inputs.
//!
//! [`OutputPin`]: lychnos_core::traits::OutputPin

#![no_std]
#![deny(unsafe_code)]

pub mod bus;

pub use bus::{BcdBus, DigitSelects, SelectPolarity};
