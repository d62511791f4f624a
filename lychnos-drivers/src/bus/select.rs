//! Digit-select line bank
//!
//! One line per tube position, gating that tube's cathodes to the
//! shared decoder bus. Whether "asserted" is electrically high or low
//! depends on the anode driver stage, so polarity is fixed wiring
//! configuration chosen at construction.

use lychnos_core::traits::{OutputPin, SelectBank};
use lychnos_core::DIGIT_COUNT;

/// Electrical polarity of an asserted select line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelectPolarity {
    /// Asserted = pin high (direct NPN/MOSFET driver)
    ActiveHigh,
    /// Asserted = pin low (PNP/high-side driver)
    ActiveLow,
}

/// GPIO implementation of the digit-select bank
pub struct DigitSelects<P> {
    lines: [P; DIGIT_COUNT],
    polarity: SelectPolarity,
}

impl<P: OutputPin> DigitSelects<P> {
    /// Create the bank and drive every line to its deasserted level
    pub fn new(lines: [P; DIGIT_COUNT], polarity: SelectPolarity) -> Self {
        let mut bank = Self { lines, polarity };
        bank.deassert_all();
        bank
    }

    fn write_raw(line: &mut P, polarity: SelectPolarity, asserted: bool) {
        let high = match polarity {
            SelectPolarity::ActiveHigh => asserted,
            SelectPolarity::ActiveLow => !asserted,
        };
        line.set_state(high);
    }
}

impl<P: OutputPin> SelectBank for DigitSelects<P> {
    fn assert_digit(&mut self, index: usize) {
        if let Some(line) = self.lines.get_mut(index) {
            Self::write_raw(line, self.polarity, true);
        }
    }

    fn deassert_all(&mut self) {
        for line in self.lines.iter_mut() {
            Self::write_raw(line, self.polarity, false);
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

    fn new_bank(polarity: SelectPolarity) -> DigitSelects<MockPin> {
        DigitSelects::new(
            [
                MockPin::new(),
                MockPin::new(),
                MockPin::new(),
                MockPin::new(),
                MockPin::new(),
                MockPin::new(),
            ],
            polarity,
        )
    }

    fn high_lines(bank: &DigitSelects<MockPin>) -> [bool; DIGIT_COUNT] {
        let mut out = [false; DIGIT_COUNT];
        for (slot, line) in out.iter_mut().zip(bank.lines.iter()) {
            *slot = line.is_set_high();
        }
        out
    }

    #[test]
    fn test_active_high_bank() {
        let mut bank = new_bank(SelectPolarity::ActiveHigh);
        // Construction deasserts: all low
        assert_eq!(high_lines(&bank), [false; DIGIT_COUNT]);

        bank.assert_digit(2);
        assert_eq!(
            high_lines(&bank),
            [false, false, true, false, false, false]
        );

        bank.deassert_all();
        assert_eq!(high_lines(&bank), [false; DIGIT_COUNT]);
    }

    #[test]
    fn test_active_low_bank() {
        let mut bank = new_bank(SelectPolarity::ActiveLow);
        // Construction deasserts: all high
        assert_eq!(high_lines(&bank), [true; DIGIT_COUNT]);

        bank.assert_digit(4);
        assert_eq!(high_lines(&bank), [true, true, true, true, false, true]);

        bank.deassert_all();
        assert_eq!(high_lines(&bank), [true; DIGIT_COUNT]);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut bank = new_bank(SelectPolarity::ActiveHigh);
        bank.assert_digit(6);
        bank.assert_digit(usize::MAX);
        assert_eq!(high_lines(&bank), [false; DIGIT_COUNT]);
    }
}
