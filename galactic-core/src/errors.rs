//! Error types shared by the scalar layer.
//!
//! Validation in this crate fails fast: a non-finite angle, a negative
//! uncertainty, a latitude past the pole. Nothing here is retried or
//! silently defaulted; the caller sees the violated precondition.

use thiserror::Error;

/// Classification of numerical failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericErrorKind {
    /// Value is NaN or infinite.
    NotFinite,
    /// Value outside its valid domain (e.g. latitude > 90°).
    OutOfRange,
    /// Attempted division by zero or near-zero value.
    DivisionByZero,
    /// Input with no usable variation (e.g. all abscissae identical).
    Degenerate,
}

/// Unified error type for the scalar layer.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Numerical precondition violated.
    #[error("Numeric error in {operation} ({kind:?}): {message}")]
    Numeric {
        operation: String,
        kind: NumericErrorKind,
        message: String,
    },

    /// A `Measurement` constructor rejected its inputs.
    #[error("Invalid measurement: {message}")]
    InvalidMeasurement { message: String },
}

/// Convenience alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Creates a [`Numeric`](Self::Numeric) error with the given kind.
    pub fn numeric(operation: &str, kind: NumericErrorKind, reason: &str) -> Self {
        Self::Numeric {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates an [`InvalidMeasurement`](Self::InvalidMeasurement) error.
    pub fn invalid_measurement(message: impl Into<String>) -> Self {
        Self::InvalidMeasurement {
            message: message.into(),
        }
    }
}
