//! Input-to-output digital state mirror.
//!
//! [`Mirror`] copies the state of one digital input to one digital output on
//! demand. It is the only piece of application logic in the firmware; the
//! surrounding loop decides when to call it, at what cadence, and what to do
//! when it fails.

#![cfg_attr(not(feature = "std"), no_std)]

use dio::{DigitalInput, DigitalOutput, DioResult};

/// Stateless transform synchronizing a digital output to a digital input.
///
/// The mirror borrows both lines for its whole life; it never enables,
/// configures, or rebinds them. Enablement is the caller's job before the
/// first [`update`](Mirror::update).
pub struct Mirror<'a> {
    input: &'a dyn DigitalInput,
    output: &'a dyn DigitalOutput,
}

impl<'a> Mirror<'a> {
    /// Bind the mirror to its input and output lines.
    pub fn new(input: &'a dyn DigitalInput, output: &'a dyn DigitalOutput) -> Self {
        Self { input, output }
    }

    /// Read the input and drive the output to match.
    ///
    /// Performs exactly one read and, if the read succeeds, exactly one
    /// write. A failed read short-circuits: the output is left untouched
    /// rather than driven to an indeterminate value. Success means the
    /// output reflects the input as of the read; no atomicity is claimed
    /// against a racing physical input change.
    ///
    /// Errors are surfaced, never retried. Callers that poll periodically
    /// simply try again next cycle.
    pub fn update(&mut self) -> DioResult<()> {
        let state = self.input.get_state()?;
        self.output.set_state(state)
    }
}
