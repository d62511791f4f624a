//! Display drive traits
//!
//! The scan engine drives two physical resources through these traits:
//! the shared 4-line BCD decoder bus and the per-tube digit-select
//! lines. Implementations live in `lychnos-drivers`.

/// Shared BCD decoder bus
///
/// One bus feeds the decoder for all tubes; only the tube whose select
/// line is asserted renders the bus value. The scan engine guarantees
/// the bus is only written while every select line is deasserted.
pub trait DecoderBus {
    /// Drive the BCD pattern for `digit` onto the bus.
    ///
    /// Values above 9 are ignored (guard against programming errors,
    /// not a reported fault).
    fn write_digit(&mut self, digit: u8);

    /// Drive the blank code - a pattern the decoder maps to "no
    /// numeral" - independent of any specific digit value.
    fn blank(&mut self);
}

/// Bank of digit-select lines, one per tube position
///
/// At most one line may be asserted at any instant; the scan engine
/// enforces this by always deasserting all lines before asserting one.
pub trait SelectBank {
    /// Assert the select line for `index`.
    ///
    /// Indices outside the bank are ignored.
    fn assert_digit(&mut self, index: usize);

    /// Deassert every select line.
    fn deassert_all(&mut self);
}
