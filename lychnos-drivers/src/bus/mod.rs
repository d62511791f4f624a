//! Decoder bus and digit-select drivers

pub mod bcd;
pub mod select;

pub use bcd::BcdBus;
pub use select::{DigitSelects, SelectPolarity};
