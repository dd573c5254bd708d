//! UART serial link to the transceiver.
//!
//! The same link carries the configuration menu, so it is full duplex.
//!
//! The receive loop abandons a pending read whenever the timer wakes it, so
//! the link sits on a [`BufferedUart`]: bytes land in the interrupt-fed ring
//! buffer and a dropped read loses nothing.
//!
//! # Pins
//!
//! Uses UART1:
//! - GPIO 8: TX
//! - GPIO 9: RX

use embassy_rp::uart::{BufferedUart, Error as UartError};
use embedded_io_async::{Read, Write};
use switch_core::{LinkError, SerialLink};

/// Receive ring buffer size.
pub const RX_BUFFER_LEN: usize = 64;

/// Transmit ring buffer size. Holds the longest menu text.
pub const TX_BUFFER_LEN: usize = 256;

/// Convert UART errors to [`LinkError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan rule issues
/// (both `UartError` and `LinkError` are defined in external crates).
#[inline]
fn uart_error_to_link_error(e: UartError) -> LinkError {
    match e {
        UartError::Framing => LinkError::Framing,
        UartError::Overrun => LinkError::Overrun,
        _ => LinkError::Io,
    }
}

/// Transceiver link over an interrupt-buffered UART.
pub struct UartLink {
    uart: BufferedUart,
}

impl UartLink {
    /// Create a link from a UART configured for the transceiver's baud rate.
    #[must_use]
    pub fn new(uart: BufferedUart) -> Self {
        Self { uart }
    }

    /// Get mutable access to the UART.
    pub fn uart_mut(&mut self) -> &mut BufferedUart {
        &mut self.uart
    }
}

impl SerialLink for UartLink {
    async fn read_byte(&mut self) -> Result<u8, LinkError> {
        let mut byte = [0u8; 1];
        let n = self
            .uart
            .read(&mut byte)
            .await
            .map_err(uart_error_to_link_error)?;
        if n == 0 {
            return Err(LinkError::Io);
        }
        Ok(byte[0])
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        Write::write_all(&mut self.uart, bytes)
            .await
            .map_err(uart_error_to_link_error)
    }
}
