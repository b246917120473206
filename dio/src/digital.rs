//! Digital line capability traits.
//!
//! A line is either a [`DigitalInput`] or a [`DigitalOutput`]; both must be
//! enabled before their state accessor works. State accessors take `&self`:
//! implementations guard their own interior mutability (register access
//! behind FFI, `Cell` in the mock), which lets a long-lived consumer hold a
//! shared borrow of a line while the surrounding application still inspects
//! or drives it.

use crate::error::DioResult;

/// Logical state of a digital line.
///
/// Read failures are reported through [`DioResult`], never as a third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitalState {
    /// Line is asserted.
    Active,
    /// Line is deasserted.
    #[default]
    Inactive,
}

/// Pull configuration for input lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Floating input
    #[default]
    Floating,
    /// Input with pull-up resistor
    PullUp,
    /// Input with pull-down resistor
    PullDown,
}

/// A readable digital line.
pub trait DigitalInput {
    /// Configure and enable (or disable) the line. Called by application
    /// setup before the line is handed to its consumer.
    fn enable(&mut self, enable: bool) -> DioResult<()>;

    /// Read the current state.
    ///
    /// Fails with [`DioError::NotEnabled`](crate::DioError::NotEnabled) if
    /// the line has not been enabled.
    fn get_state(&self) -> DioResult<DigitalState>;
}

/// A writable digital line.
pub trait DigitalOutput {
    /// Configure and enable (or disable) the line.
    fn enable(&mut self, enable: bool) -> DioResult<()>;

    /// Drive the line to `state`.
    ///
    /// Fails with [`DioError::NotEnabled`](crate::DioError::NotEnabled) if
    /// the line has not been enabled.
    fn set_state(&self, state: DigitalState) -> DioResult<()>;
}
