//! Companion UART transmit task
//!
//! Sends sync requests to the Wi-Fi/NTP companion whenever the
//! timekeeper asks for fresh time.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use lychnos_protocol::ClockMessage;

use crate::channels::SYNC_REQUEST;

/// Time TX task - sends frames to the companion
#[embassy_executor::task]
pub async fn time_tx_task(mut tx: BufferedUartTx) {
    info!("Time TX task started");

    loop {
        SYNC_REQUEST.wait().await;

        let frame = ClockMessage::SyncRequest.to_frame();
        let mut buf = [0u8; 16];
        match frame.encode(&mut buf) {
            Ok(len) => {
                if let Err(e) = tx.write_all(&buf[..len]).await {
                    warn!("Failed to send sync request: {:?}", e);
                } else {
                    trace!("Sync request sent");
                }
            }
            Err(e) => {
                warn!("Failed to encode sync request: {:?}", e);
            }
        }
    }
}
