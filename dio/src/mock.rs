//! In-memory digital line for host-side tests.

use core::cell::Cell;

use crate::digital::{DigitalInput, DigitalOutput, DigitalState};
use crate::error::{DioError, DioResult};

/// Test double implementing both line capabilities over one backing cell.
///
/// A test typically creates one instance per line, enables it, drives it
/// through the [`DigitalOutput`] side and observes it through the
/// [`DigitalInput`] side. Read and write counters let tests assert how many
/// hardware accesses an operation performed.
#[derive(Debug, Default)]
pub struct MockDigitalInOut {
    state: Cell<DigitalState>,
    enabled: Cell<bool>,
    reads: Cell<u32>,
    writes: Cell<u32>,
}

impl MockDigitalInOut {
    /// New disabled line, initially inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// New line that is already enabled.
    pub fn enabled() -> Self {
        let line = Self::new();
        line.enabled.set(true);
        line
    }

    /// Current backing state, bypassing the enable check. For assertions
    /// about state preserved across failed operations.
    pub fn state(&self) -> DigitalState {
        self.state.get()
    }

    /// Whether the line currently reads active.
    pub fn is_state_active(&self) -> DioResult<bool> {
        Ok(self.get_state()? == DigitalState::Active)
    }

    /// Number of successful reads performed through [`DigitalInput`].
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }

    /// Number of successful writes performed through [`DigitalOutput`].
    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl DigitalInput for MockDigitalInOut {
    fn enable(&mut self, enable: bool) -> DioResult<()> {
        self.enabled.set(enable);
        Ok(())
    }

    fn get_state(&self) -> DioResult<DigitalState> {
        if !self.enabled.get() {
            return Err(DioError::NotEnabled);
        }
        self.reads.set(self.reads.get() + 1);
        Ok(self.state.get())
    }
}

impl DigitalOutput for MockDigitalInOut {
    fn enable(&mut self, enable: bool) -> DioResult<()> {
        self.enabled.set(enable);
        Ok(())
    }

    fn set_state(&self, state: DigitalState) -> DioResult<()> {
        if !self.enabled.get() {
            return Err(DioError::NotEnabled);
        }
        self.writes.set(self.writes.get() + 1);
        self.state.set(state);
        Ok(())
    }
}
