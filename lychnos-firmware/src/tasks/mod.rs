//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod scan;
pub mod time_rx;
pub mod time_tx;
pub mod timekeeper;

pub use scan::scan_task;
pub use time_rx::time_rx_task;
pub use time_tx::time_tx_task;
pub use timekeeper::timekeeper_task;
