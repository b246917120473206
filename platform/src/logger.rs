//! `log` facade backend writing to a serial transport.
//!
//! One line per record: `LEVEL [target] message`. The sink is shared with
//! whatever else uses the transport, so each record is written under a lock
//! to keep lines whole.
//!
//! Also hosts the vendor log bridge: the HAL reports its own numeric levels
//! (trace=1, info=30, warn=40, error=50, panic=60) through a callback; map
//! them onto [`log::Level`] here and let the facade do the filtering.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::Mutex;

use crate::serial::SerialIo;

/// Map a vendor numeric log level onto the `log` facade.
///
/// Panic has no facade counterpart and collapses into `Error`.
pub fn level_from_raw(level: i32) -> Level {
    if level >= 50 {
        Level::Error
    } else if level >= 40 {
        Level::Warn
    } else if level >= 30 {
        Level::Info
    } else {
        Level::Debug
    }
}

/// Logger writing one formatted line per record through a serial sink.
pub struct SerialLogger<S: SerialIo> {
    sink: Mutex<S>,
    max_level: LevelFilter,
}

impl<S: SerialIo> SerialLogger<S> {
    pub fn new(sink: S, max_level: LevelFilter) -> Self {
        Self {
            sink: Mutex::new(sink),
            max_level,
        }
    }

    /// Format a record the way it appears on the wire, minus the CRLF.
    fn format(record: &Record) -> String {
        format!("{} [{}] {}", record.level(), record.target(), record.args())
    }
}

impl<S: SerialIo + 'static> SerialLogger<S> {
    /// Install this logger as the global `log` backend.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let max_level = self.max_level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl<S: SerialIo> Log for SerialLogger<S> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format(record);
        // A full transport drops the rest of the line; nothing to report
        // from inside the logger.
        let _ = self.sink.lock().write_line(&line);
    }

    fn flush(&self) {}
}
