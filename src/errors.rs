//! Error types for geometric calculations.
//!
//! This module provides a unified error type [`GeomError`] covering the failure
//! modes of fixed-dimension linear algebra: degenerate numerical inputs (zero
//! vectors, non-finite values, invalid bounds) and dimension mismatches when
//! constructing value types from raw slices.
//!
//! # Usage
//!
//! Most fallible functions return [`GeomResult<T>`], which is
//! `Result<T, GeomError>`. Use the constructor methods for consistent error
//! creation:
//!
//! ```
//! use pose_core::{GeomError, MathErrorKind};
//!
//! fn safe_divide(a: f64, b: f64) -> Result<f64, GeomError> {
//!     if b == 0.0 {
//!         return Err(GeomError::math_error(
//!             "safe_divide",
//!             MathErrorKind::DivisionByZero,
//!             "divisor is zero",
//!         ));
//!     }
//!     Ok(a / b)
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
///
/// Used with [`GeomError::MathError`] to distinguish between different
/// numerical failure modes.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Attempted division by zero or near-zero value (e.g. normalizing the
    /// zero vector).
    DivisionByZero,
    /// Result is NaN or infinity.
    NotFinite,
    /// Input value is invalid for the operation (e.g. lower bound exceeding
    /// upper bound).
    InvalidInput,
}

/// Unified error type for geometric calculations.
///
/// Covers numerical failures and dimension mismatches. Use the constructor
/// methods ([`math_error`](Self::math_error),
/// [`dimension_mismatch`](Self::dimension_mismatch)) for consistent error
/// creation. All failures are local and immediate; nothing is transient or
/// retryable.
#[derive(Error, Debug)]
pub enum GeomError {
    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// A function requiring an exact component count received a different one.
    #[error("Dimension mismatch in {operation}: expected {expected} components, got {actual}")]
    DimensionMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },
}

/// Convenience alias for `Result<T, GeomError>`.
pub type GeomResult<T> = Result<T, GeomError>;

impl GeomError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`DimensionMismatch`](Self::DimensionMismatch) error.
    pub fn dimension_mismatch(operation: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            operation: operation.to_string(),
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_with_kind() {
        let err = GeomError::math_error(
            "Vector3::normalize",
            MathErrorKind::DivisionByZero,
            "zero-length vector",
        );
        assert!(err.to_string().contains("Math error"));
        assert!(err.to_string().contains("DivisionByZero"));
        assert!(err.to_string().contains("Vector3::normalize"));
    }

    #[test]
    fn test_dimension_mismatch_error() {
        let err = GeomError::dimension_mismatch("Quaternion::try_from", 4, 3);
        assert_eq!(
            err.to_string(),
            "Dimension mismatch in Quaternion::try_from: expected 4 components, got 3"
        );
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<GeomError>();
        _assert_sync::<GeomError>();
    }
}
