//! Hardware abstraction traits
//!
//! These traits define the interface between the scanning core
//! and hardware-specific implementations.

pub mod display;
pub mod gpio;
pub mod time;

pub use display::{DecoderBus, SelectBank};
pub use gpio::OutputPin;
pub use time::{DelayUs, MonotonicClock};
