//! Blocking thread sleep over a vendor delay primitive.

use core::time::Duration;

/// Vendor delay primitive. The HAL delay call takes a `u32` millisecond
/// count, so long sleeps are chunked by [`sleep_for`].
pub trait DelayBackend {
    /// Block the calling thread for `ms` milliseconds.
    fn delay_ms(&self, ms: u32);

    /// Give up the remainder of the current time slice.
    fn yield_now(&self);
}

/// Sleep for `duration`, yielding instead of sleeping when the duration is
/// zero so tight loops still let other threads run.
pub fn sleep_for<D: DelayBackend>(backend: &D, duration: Duration) {
    if duration.is_zero() {
        backend.yield_now();
        return;
    }

    let mut remaining_ms = duration.as_millis();
    while remaining_ms > 0 {
        let chunk = remaining_ms.min(u32::MAX as u128) as u32;
        backend.delay_ms(chunk);
        remaining_ms -= chunk as u128;
    }
}

/// Host backend over `std::thread`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl DelayBackend for StdDelay {
    fn delay_ms(&self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms as u64));
    }

    fn yield_now(&self) {
        std::thread::yield_now();
    }
}
