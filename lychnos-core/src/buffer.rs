//! Digit buffer
//!
//! Holds the 6 decimal digits currently intended for display,
//! least-significant first. Written wholesale by the owning task;
//! read by the scan engine one position at a time.

/// Number of tube positions on the display
pub const DIGIT_COUNT: usize = 6;

/// Largest value the display can show without truncation
pub const MAX_DISPLAY_VALUE: u32 = 999_999;

/// The 6-digit display buffer, index 0 = least-significant digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitBuffer {
    digits: [u8; DIGIT_COUNT],
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitBuffer {
    /// Create a buffer showing all zeros
    pub const fn new() -> Self {
        Self {
            digits: [0; DIGIT_COUNT],
        }
    }

    /// Replace the buffer with the base-10 decomposition of `value`
    ///
    /// Digits are stored least-significant first. Values above
    /// [`MAX_DISPLAY_VALUE`] silently lose their high digits - the
    /// stored digits are those of `value mod 1_000_000`.
    pub fn set_number(&mut self, value: u32) {
        let mut n = value;
        for digit in self.digits.iter_mut() {
            *digit = (n % 10) as u8;
            n /= 10;
        }
    }

    /// Replace all six positions at once
    ///
    /// Each entry is reduced mod 10 so the buffer never holds an
    /// undisplayable value.
    pub fn set_digits(&mut self, digits: [u8; DIGIT_COUNT]) {
        for (slot, d) in self.digits.iter_mut().zip(digits) {
            *slot = d % 10;
        }
    }

    /// Read the digit at `index` (0 = units place)
    ///
    /// Out-of-range indices read as 0 rather than panicking; the scan
    /// engine never produces one.
    pub fn digit(&self, index: usize) -> u8 {
        self.digits.get(index).copied().unwrap_or(0)
    }

    /// All six digits, least-significant first
    pub fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.digits
    }
}
