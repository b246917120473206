//! Byte-oriented serial transport.
//!
//! The logger and any console sit on top of this trait; vendor backends wire
//! it to a UART, the host wires it to an in-memory buffer.

use std::collections::VecDeque;

use parking_lot::Mutex;
use thiserror::Error;

/// Serial transport errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// No byte available right now (non-blocking read only).
    #[error("no data available")]
    Unavailable,
    /// The transport dropped data or cannot accept more.
    #[error("transport exhausted")]
    Exhausted,
}

/// Blocking byte transport.
pub trait SerialIo: Send + Sync {
    /// Read one byte, blocking until one is available.
    fn read_byte(&self) -> Result<u8, SerialError>;

    /// Read one byte if available, [`SerialError::Unavailable`] otherwise.
    fn try_read_byte(&self) -> Result<u8, SerialError>;

    /// Write one byte, blocking until the transport accepts it.
    fn write_byte(&self, b: u8) -> Result<(), SerialError>;

    /// Write `s` followed by CRLF. Returns the number of bytes written,
    /// which on error counts the bytes that made it out.
    fn write_line(&self, s: &str) -> Result<usize, (SerialError, usize)> {
        let mut written = 0;
        for b in s.bytes().chain(*b"\r\n") {
            self.write_byte(b).map_err(|e| (e, written))?;
            written += 1;
        }
        Ok(written)
    }
}

/// Write-only sink over process stdout. On ESP-IDF targets stdout is routed
/// to the console UART, which makes this the cheapest wire transport for the
/// logger; reads are not wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSerial;

impl SerialIo for StdoutSerial {
    fn read_byte(&self) -> Result<u8, SerialError> {
        Err(SerialError::Exhausted)
    }

    fn try_read_byte(&self) -> Result<u8, SerialError> {
        Err(SerialError::Unavailable)
    }

    fn write_byte(&self, b: u8) -> Result<(), SerialError> {
        use std::io::Write;
        std::io::stdout()
            .write_all(&[b])
            .map_err(|_| SerialError::Exhausted)
    }
}

impl<T: SerialIo> SerialIo for std::sync::Arc<T> {
    fn read_byte(&self) -> Result<u8, SerialError> {
        (**self).read_byte()
    }

    fn try_read_byte(&self) -> Result<u8, SerialError> {
        (**self).try_read_byte()
    }

    fn write_byte(&self, b: u8) -> Result<(), SerialError> {
        (**self).write_byte(b)
    }
}

/// In-memory serial port for host tests and demos.
///
/// Bytes written become readable in FIFO order.
#[derive(Debug, Default)]
pub struct BufferSerial {
    buffer: Mutex<VecDeque<u8>>,
}

impl BufferSerial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything written so far, lossily decoded for assertions.
    pub fn take_string(&self) -> String {
        let bytes: Vec<u8> = self.buffer.lock().drain(..).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl SerialIo for BufferSerial {
    fn read_byte(&self) -> Result<u8, SerialError> {
        // In-memory transport never blocks; empty means exhausted.
        self.buffer.lock().pop_front().ok_or(SerialError::Exhausted)
    }

    fn try_read_byte(&self) -> Result<u8, SerialError> {
        self.buffer.lock().pop_front().ok_or(SerialError::Unavailable)
    }

    fn write_byte(&self, b: u8) -> Result<(), SerialError> {
        self.buffer.lock().push_back(b);
        Ok(())
    }
}
