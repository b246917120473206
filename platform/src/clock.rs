//! Millisecond system clock.
//!
//! The vendor HAL exposes time as milliseconds since boot; [`TickSource`]
//! captures that single call and [`SystemClock`] turns it into a `Duration`
//! for the rest of the firmware.

use core::time::Duration;

/// Source of the monotonic millisecond tick count.
pub trait TickSource {
    /// Milliseconds since boot. Monotonic, 1 ms period.
    fn millis(&self) -> u64;
}

/// System clock over a [`TickSource`].
#[derive(Debug, Clone)]
pub struct SystemClock<S: TickSource> {
    source: S,
}

impl<S: TickSource> SystemClock<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Time since boot.
    pub fn now(&self) -> Duration {
        Duration::from_millis(self.source.millis())
    }

    /// Time since boot in whole milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.source.millis()
    }
}

/// Host tick source counting from its own creation.
#[derive(Debug, Clone)]
pub struct Uptime {
    epoch: std::time::Instant,
}

impl Uptime {
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

impl Default for Uptime {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for Uptime {
    fn millis(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}
