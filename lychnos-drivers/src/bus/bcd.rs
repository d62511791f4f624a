//! Shared BCD decoder bus
//!
//! Four lines, least-significant first, feeding a BCD-to-decimal
//! decoder (74141/K155ID1 class). Codes 10-15 map to "no numeral" in
//! those decoders, so driving all lines high blanks every tube that is
//! gated onto the bus.

use lychnos_core::traits::{DecoderBus, OutputPin};

/// Number of bus lines
pub const BUS_WIDTH: usize = 4;

/// GPIO implementation of the shared decoder bus
pub struct BcdBus<P> {
    /// Bus lines A..D, least-significant first
    lines: [P; BUS_WIDTH],
}

impl<P: OutputPin> BcdBus<P> {
    /// Create the bus driver and clear all lines low
    pub fn new(mut lines: [P; BUS_WIDTH]) -> Self {
        for line in lines.iter_mut() {
            line.set_low();
        }
        Self { lines }
    }

    fn clear(&mut self) {
        for line in self.lines.iter_mut() {
            line.set_low();
        }
    }
}

impl<P: OutputPin> DecoderBus for BcdBus<P> {
    fn write_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }

        // Clear before writing; with marginal wiring a transient mixed
        // code on the bus is harder to provoke this way.
        self.clear();

        for (bit, line) in self.lines.iter_mut().enumerate() {
            line.set_state((digit >> bit) & 0x1 != 0);
        }
    }

    fn blank(&mut self) {
        for line in self.lines.iter_mut() {
            line.set_high();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn new_bus() -> BcdBus<MockPin> {
        BcdBus::new([MockPin::new(), MockPin::new(), MockPin::new(), MockPin::new()])
    }

    fn pattern(bus: &BcdBus<MockPin>) -> u8 {
        bus.lines
            .iter()
            .enumerate()
            .fold(0, |acc, (bit, line)| acc | (line.is_set_high() as u8) << bit)
    }

    #[test]
    fn test_every_digit_pattern() {
        let mut bus = new_bus();
        for digit in 0..=9u8 {
            bus.write_digit(digit);
            assert_eq!(pattern(&bus), digit);
        }
    }

    #[test]
    fn test_blank_is_all_high() {
        let mut bus = new_bus();
        bus.write_digit(5);
        bus.blank();
        assert_eq!(pattern(&bus), 0b1111);
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let mut bus = new_bus();
        bus.write_digit(7);
        bus.write_digit(10);
        assert_eq!(pattern(&bus), 7);
        bus.write_digit(255);
        assert_eq!(pattern(&bus), 7);
    }

    #[test]
    fn test_construction_clears_lines() {
        let mut high = MockPin::new();
        high.set_high();
        let bus = BcdBus::new([high, MockPin::new(), MockPin::new(), MockPin::new()]);
        assert_eq!(pattern(&bus), 0);
    }
}
