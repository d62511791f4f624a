//! Companion UART receive task
//!
//! Receives frames from the Wi-Fi/NTP companion and forwards time
//! broadcasts to the timekeeper.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use lychnos_protocol::{FrameParser, HostMessage};

use crate::channels::TIME_SYNC;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Time RX task - receives and parses frames from the companion
#[embassy_executor::task]
pub async fn time_rx_task(mut rx: BufferedUartRx) {
    info!("Time RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => match HostMessage::from_frame(&frame) {
                            Ok(HostMessage::TimeBroadcast { epoch }) => {
                                trace!("Time broadcast: epoch {}", epoch);
                                TIME_SYNC.signal(epoch);
                            }
                            Err(e) => {
                                warn!("Unrecognized companion message: {:?}", e);
                            }
                        },
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(e) => {
                            // Parser resynchronizes on the next start byte
                            warn!("Frame parse error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
