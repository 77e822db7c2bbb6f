//! Error types for number operations.
//!
//! Operations that can violate a precondition come in two forms: an
//! operator or plain method that fails fast (panics with the error's
//! message), and a `checked_*`/`try_*` method that returns the error
//! instead. Silent numeric anomalies such as NaN or infinity are ordinary
//! values and never surface here.

use thiserror::Error;

/// Precondition violations raised by number operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NumberError {
    /// The divisor of a division was zero.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// A clamp was requested with a lower bound above the upper bound.
    ///
    /// NaN bounds are rejected with this variant as well, since they cannot
    /// be ordered.
    #[error("minimum ({minimum}) in limit calculation cannot be greater than maximum ({maximum})")]
    InvalidBounds {
        /// Requested lower bound
        minimum: f64,
        /// Requested upper bound
        maximum: f64,
    },
}

impl NumberError {
    /// Create an InvalidBounds error.
    pub fn invalid_bounds(minimum: f64, maximum: f64) -> Self {
        Self::InvalidBounds { minimum, maximum }
    }

    /// Abort the current operation with this error.
    ///
    /// Used by the fast-fail operator forms.
    #[cold]
    #[track_caller]
    pub(crate) fn fail(self) -> ! {
        tracing::error!(error = %self, "number precondition violated");
        panic!("{self}")
    }
}

/// Result type alias for operations that can produce NumberError.
pub type Result<T> = std::result::Result<T, NumberError>;
