//! Frame encoding and decoding for the companion link.
//!
//! Frame format:
//! - START (1 byte): 0xA5 synchronization byte
//! - TYPE (1 byte): message type identifier
//! - LENGTH (1 byte): payload length (0-16)
//! - PAYLOAD (0-16 bytes): type-specific data
//! - CHECKSUM (1 byte): complemented XOR of TYPE, LENGTH and PAYLOAD

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 0xA5;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 16;

/// Maximum complete frame size (START + TYPE + LENGTH + MAX_PAYLOAD + CHECKSUM)
pub const MAX_FRAME_SIZE: usize = 1 + 1 + 1 + MAX_PAYLOAD_SIZE + 1;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Checksum mismatch
    InvalidChecksum,
    /// Declared length exceeds the protocol maximum
    InvalidLength,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A parsed or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type identifier
    pub msg_type: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Create a new frame with the given message type and payload
    pub fn new(msg_type: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let payload = Vec::from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { msg_type, payload })
    }

    /// Create a frame with no payload
    pub fn empty(msg_type: u8) -> Self {
        Self {
            msg_type,
            payload: Vec::new(),
        }
    }

    fn checksum(msg_type: u8, length: u8, payload: &[u8]) -> u8 {
        let mut sum = msg_type ^ length;
        for &byte in payload {
            sum ^= byte;
        }
        !sum
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = 4 + self.payload.len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        let length = self.payload.len() as u8;

        buffer[0] = FRAME_START;
        buffer[1] = self.msg_type;
        buffer[2] = length;
        buffer[3..3 + self.payload.len()].copy_from_slice(&self.payload);
        buffer[3 + self.payload.len()] = Self::checksum(self.msg_type, length, &self.payload);

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        Vec::from_slice(&buffer[..len]).map_err(|_| FrameError::BufferTooSmall)
    }
}

/// State machine for parsing incoming frames one byte at a time
///
/// Garbage between frames is skipped while hunting for the start byte;
/// a corrupt frame resets the parser, which then resynchronizes on the
/// next start byte.
#[derive(Debug, Clone, Default)]
pub struct FrameParser {
    state: ParseState,
    msg_type: u8,
    expected_length: u8,
    buffer: Vec<u8, MAX_PAYLOAD_SIZE>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ParseState {
    /// Hunting for the START byte
    #[default]
    Start,
    /// Got START, waiting for TYPE
    Type,
    /// Got TYPE, waiting for LENGTH
    Length,
    /// Reading payload bytes
    Payload,
    /// Waiting for CHECKSUM
    Checksum,
}

impl FrameParser {
    /// Create a new frame parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::Start;
        self.msg_type = 0;
        self.expected_length = 0;
        self.buffer.clear();
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(frame))` when a complete valid frame is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` on parse error.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            ParseState::Start => {
                if byte == FRAME_START {
                    self.state = ParseState::Type;
                }
                Ok(None)
            }
            ParseState::Type => {
                self.msg_type = byte;
                self.state = ParseState::Length;
                Ok(None)
            }
            ParseState::Length => {
                if byte as usize > MAX_PAYLOAD_SIZE {
                    self.reset();
                    return Err(FrameError::InvalidLength);
                }
                self.expected_length = byte;
                self.buffer.clear();
                self.state = if byte == 0 {
                    ParseState::Checksum
                } else {
                    ParseState::Payload
                };
                Ok(None)
            }
            ParseState::Payload => {
                // Cannot overflow: expected_length was bounds-checked
                let _ = self.buffer.push(byte);
                if self.buffer.len() == self.expected_length as usize {
                    self.state = ParseState::Checksum;
                }
                Ok(None)
            }
            ParseState::Checksum => {
                let expected = Frame::checksum(self.msg_type, self.expected_length, &self.buffer);
                if byte != expected {
                    self.reset();
                    return Err(FrameError::InvalidChecksum);
                }

                let frame = Frame {
                    msg_type: self.msg_type,
                    payload: self.buffer.clone(),
                };
                self.reset();
                Ok(Some(frame))
            }
        }
    }
}
