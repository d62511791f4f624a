//! Time-sync protocol for the Lychnos nixie clock
//!
//! The clock board has no network hardware of its own; a small Wi-Fi
//! companion MCU runs NTP and feeds wall-clock time over a UART. This
//! crate defines the byte-level framing and the two messages that
//! cross that link:
//!
//! - companion -> clock: [`HostMessage::TimeBroadcast`] (UTC epoch)
//! - clock -> companion: [`ClockMessage::SyncRequest`]
//!
//! The framing is deliberately tiny: a start byte for resync, a type,
//! a length, up to 16 payload bytes, and a complemented-XOR checksum.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod frame;
pub mod messages;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD_SIZE};
pub use messages::{ClockMessage, HostMessage, MessageError};
