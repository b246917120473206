//! Watchdog timer wrapper.
//!
//! The backend is the raw vendor watchdog (configure + start, stop, refresh);
//! [`Watchdog`] layers the enabled/timeout bookkeeping and the precondition
//! checks on top, so callers get one consistent contract across vendors.
//!
//! Usage:
//! ```
//! use platform::watchdog::{Watchdog, WatchdogBackend, WatchdogError};
//! # #[derive(Default)] struct Wdt;
//! # impl WatchdogBackend for Wdt {
//! #     fn start(&mut self, _: u32) -> Result<(), WatchdogError> { Ok(()) }
//! #     fn stop(&mut self) -> Result<(), WatchdogError> { Ok(()) }
//! #     fn refresh(&mut self) -> Result<(), WatchdogError> { Ok(()) }
//! # }
//! let mut wdt = Watchdog::new(Wdt::default());
//! wdt.enable_ms(10_000).unwrap();
//! loop {
//!     // do work...
//!     wdt.feed().unwrap();
//!     # break;
//! }
//! ```

use core::time::Duration;

use thiserror::Error;

/// Errors from the watchdog wrapper or its backend.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchdogError {
    /// Fed or disabled before being enabled.
    #[error("watchdog not enabled")]
    NotEnabled,
    /// The hardware cannot perform the operation (some watchdogs cannot be
    /// stopped once started).
    #[error("operation not supported by this watchdog")]
    Unsupported,
    /// Vendor HAL call failed.
    #[error("watchdog driver error code: {0}")]
    Driver(i32),
}

/// Raw vendor watchdog operations.
pub trait WatchdogBackend {
    /// Configure the timeout and start the hardware timer.
    fn start(&mut self, timeout_ms: u32) -> Result<(), WatchdogError>;

    /// Stop the hardware timer.
    fn stop(&mut self) -> Result<(), WatchdogError>;

    /// Reset the countdown.
    fn refresh(&mut self) -> Result<(), WatchdogError>;
}

/// Watchdog timer with enabled-state bookkeeping.
///
/// The system resets if [`feed`](Watchdog::feed) is not called within the
/// configured timeout.
#[derive(Debug)]
pub struct Watchdog<B: WatchdogBackend> {
    backend: B,
    enabled: bool,
    timeout_ms: u32,
}

impl<B: WatchdogBackend> Watchdog<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            enabled: false,
            timeout_ms: 0,
        }
    }

    /// Enable the watchdog with the given timeout.
    pub fn enable(&mut self, timeout: Duration) -> Result<(), WatchdogError> {
        self.enable_ms(timeout.as_millis().min(u32::MAX as u128) as u32)
    }

    /// Enable the watchdog with a millisecond timeout.
    pub fn enable_ms(&mut self, timeout_ms: u32) -> Result<(), WatchdogError> {
        self.backend.start(timeout_ms)?;
        self.enabled = true;
        self.timeout_ms = timeout_ms;
        Ok(())
    }

    /// Disable the watchdog. Not supported by all hardware.
    pub fn disable(&mut self) -> Result<(), WatchdogError> {
        if !self.enabled {
            return Err(WatchdogError::NotEnabled);
        }
        self.backend.stop()?;
        self.enabled = false;
        Ok(())
    }

    /// Feed (kick) the watchdog. Must be called more often than the timeout.
    pub fn feed(&mut self) -> Result<(), WatchdogError> {
        if !self.enabled {
            return Err(WatchdogError::NotEnabled);
        }
        self.backend.refresh()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Timeout configured by the last successful enable.
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }
}

impl<B: WatchdogBackend> Drop for Watchdog<B> {
    fn drop(&mut self) {
        if self.enabled {
            // Best-effort cleanup; the hardware may refuse.
            let _ = self.backend.stop();
        }
    }
}
