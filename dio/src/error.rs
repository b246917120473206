//! Common error types for digital I/O operations

use core::fmt;

/// Digital I/O operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DioError {
    /// Line was used before `enable(true)` succeeded. Recoverable: enable
    /// the line and retry.
    NotEnabled,
    /// The underlying hardware access failed with a vendor error code.
    Driver(i32),
}

impl fmt::Display for DioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnabled => write!(f, "line not enabled"),
            Self::Driver(code) => write!(f, "driver error code: {}", code),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DioError {}

/// Result type for digital I/O operations
pub type DioResult<T> = Result<T, DioError>;
