//! Platform glue for the mirror firmware.
//!
//! Everything here adapts a vendor HAL concern to a small trait so the
//! firmware loop and the host tests can share code:
//! - [`clock`]    – millisecond tick source and system clock.
//! - [`sleep`]    – blocking delays with yield semantics for zero durations.
//! - [`watchdog`] – watchdog timer wrapper over a start/stop/refresh backend.
//! - [`serial`]   – byte-oriented serial transport used by the logger.
//! - [`logger`]   – `log` facade implementation writing lines to a serial
//!   sink, plus the vendor log-level bridge.
//!
//! None of this carries application logic; the mirror core lives in its own
//! crate and never touches these modules.

pub mod clock;
pub mod logger;
pub mod serial;
pub mod sleep;
pub mod watchdog;

pub use clock::{SystemClock, TickSource, Uptime};
pub use logger::{level_from_raw, SerialLogger};
pub use serial::{BufferSerial, SerialError, SerialIo, StdoutSerial};
pub use sleep::{sleep_for, DelayBackend, StdDelay};
pub use watchdog::{Watchdog, WatchdogBackend, WatchdogError};

#[cfg(test)]
mod tests;
