//! Message types for the companion link
//!
//! Two directions:
//! - Companion -> clock: time broadcasts
//! - Clock -> companion: sync requests

use crate::frame::{Frame, FrameError};

// Message type IDs: companion -> clock
pub const MSG_TIME_BROADCAST: u8 = 0x01;

// Message type IDs: clock -> companion
pub const MSG_SYNC_REQUEST: u8 = 0x10;

/// Errors decoding a frame into a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// Message type identifier not recognized
    UnknownType,
    /// Payload shorter than the message requires
    Truncated,
}

/// Messages from the Wi-Fi/NTP companion to the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostMessage {
    /// Fresh wall-clock time: UTC seconds since the Unix epoch
    ///
    /// The companion sends one after every NTP sync and in answer to
    /// every sync request. Timezone conversion happens clock-side.
    TimeBroadcast { epoch: u32 },
}

impl HostMessage {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            HostMessage::TimeBroadcast { epoch } => {
                Frame::new(MSG_TIME_BROADCAST, &epoch.to_le_bytes())
            }
        }
    }

    /// Decode a received frame
    pub fn from_frame(frame: &Frame) -> Result<Self, MessageError> {
        match frame.msg_type {
            MSG_TIME_BROADCAST => {
                let bytes: [u8; 4] = frame
                    .payload
                    .get(..4)
                    .and_then(|s| s.try_into().ok())
                    .ok_or(MessageError::Truncated)?;
                Ok(HostMessage::TimeBroadcast {
                    epoch: u32::from_le_bytes(bytes),
                })
            }
            _ => Err(MessageError::UnknownType),
        }
    }
}

/// Messages from the clock to the companion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockMessage {
    /// Ask the companion for a fresh time broadcast
    ///
    /// Sent at boot and whenever the resync interval elapses.
    SyncRequest,
}

impl ClockMessage {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Frame {
        match self {
            ClockMessage::SyncRequest => Frame::empty(MSG_SYNC_REQUEST),
        }
    }

    /// Decode a received frame
    pub fn from_frame(frame: &Frame) -> Result<Self, MessageError> {
        match frame.msg_type {
            MSG_SYNC_REQUEST => Ok(ClockMessage::SyncRequest),
            _ => Err(MessageError::UnknownType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_broadcast_roundtrip() {
        let msg = HostMessage::TimeBroadcast {
            epoch: 1_700_000_000,
        };
        let frame = msg.to_frame().unwrap();
        assert_eq!(frame.msg_type, MSG_TIME_BROADCAST);
        assert_eq!(frame.payload.len(), 4);
        assert_eq!(HostMessage::from_frame(&frame), Ok(msg));
    }

    #[test]
    fn test_sync_request_roundtrip() {
        let frame = ClockMessage::SyncRequest.to_frame();
        assert_eq!(frame.msg_type, MSG_SYNC_REQUEST);
        assert!(frame.payload.is_empty());
        assert_eq!(
            ClockMessage::from_frame(&frame),
            Ok(ClockMessage::SyncRequest)
        );
    }

    #[test]
    fn test_truncated_time_broadcast() {
        let frame = Frame::new(MSG_TIME_BROADCAST, &[1, 2]).unwrap();
        assert_eq!(
            HostMessage::from_frame(&frame),
            Err(MessageError::Truncated)
        );
    }

    #[test]
    fn test_unknown_type() {
        let frame = Frame::empty(0x7F);
        assert_eq!(
            HostMessage::from_frame(&frame),
            Err(MessageError::UnknownType)
        );
        assert_eq!(
            ClockMessage::from_frame(&frame),
            Err(MessageError::UnknownType)
        );
    }
}
