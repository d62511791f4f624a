//! Multiplexed display scanning
//!
//! The scan engine lights each of the six tubes in strict rotation
//! through the shared decoder bus, enforcing a blank/settle/on timing
//! discipline that prevents cross-digit ghosting.

pub mod engine;
pub mod timing;

pub use engine::{ScanEngine, Stage};
pub use timing::ScanTiming;
