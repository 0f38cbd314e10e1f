//! Error types for matrix operations.
//!
//! Every failure is a precondition violation raised synchronously to the
//! caller; nothing is retried and nothing is logged-and-ignored.

use std::fmt;

/// Main error type for matrix operations.
///
/// Carries enough context to report which contract was violated and by how
/// much, without borrowing from the matrix that produced it.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::NotSquare { rows: 2, cols: 3 };
/// assert!(err.to_string().contains("square"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MatrizError {
    /// Construction input was empty, jagged, or zero-sized.
    InvalidShape {
        /// What was wrong with the input
        reason: String,
    },

    /// Appended row or column has the wrong length.
    ShapeMismatch {
        /// Length required by the current dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// 1-indexed position outside the current bounds.
    IndexOutOfBounds {
        /// Axis the index applies to ("row" or "column")
        axis: &'static str,
        /// Index supplied (1-indexed)
        index: usize,
        /// Largest valid index on that axis
        bound: usize,
    },

    /// Element is NaN or infinite.
    NonFiniteValue {
        /// Offending value, rendered for the message
        value: String,
    },

    /// Operation would remove the last remaining row or column.
    CannotEmptyMatrix {
        /// Axis that would be emptied ("row" or "column")
        axis: &'static str,
    },

    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Square-only operation requested on a non-square matrix.
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidShape { reason } => {
                write!(f, "Invalid matrix shape: {reason}")
            }
            MatrizError::ShapeMismatch { expected, actual } => {
                write!(f, "Shape mismatch: expected length {expected}, got {actual}")
            }
            MatrizError::IndexOutOfBounds { axis, index, bound } => {
                write!(
                    f,
                    "{axis} index {index} out of bounds (valid range 1..={bound})"
                )
            }
            MatrizError::NonFiniteValue { value } => {
                write!(f, "Non-finite element: {value}")
            }
            MatrizError::CannotEmptyMatrix { axis } => {
                write!(f, "Cannot delete the last {axis} of a matrix")
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got {rows}x{cols}")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Create an invalid shape error with a reason.
    #[must_use]
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }

    /// Create a shape mismatch error for an appended row or column.
    #[must_use]
    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    /// Create an out-of-bounds error for a 1-indexed position.
    #[must_use]
    pub fn index_out_of_bounds(axis: &'static str, index: usize, bound: usize) -> Self {
        Self::IndexOutOfBounds { axis, index, bound }
    }

    /// Create a non-finite element error.
    #[must_use]
    pub fn non_finite(value: f64) -> Self {
        Self::NonFiniteValue {
            value: format!("{value}"),
        }
    }

    /// Create a cannot-empty error for the given axis.
    #[must_use]
    pub fn cannot_empty(axis: &'static str) -> Self {
        Self::CannotEmptyMatrix { axis }
    }

    /// Create a dimension mismatch error from two shapes.
    #[must_use]
    pub fn dimension_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create a not-square error from the current shape.
    #[must_use]
    pub fn not_square(rows: usize, cols: usize) -> Self {
        Self::NotSquare { rows, cols }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shape_display() {
        let err = MatrizError::invalid_shape("jagged rows");
        assert!(err.to_string().contains("Invalid matrix shape"));
        assert!(err.to_string().contains("jagged rows"));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = MatrizError::shape_mismatch(3, 5);
        let msg = err.to_string();
        assert!(msg.contains("Shape mismatch"));
        assert!(msg.contains('3'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_index_out_of_bounds_display() {
        let err = MatrizError::index_out_of_bounds("row", 4, 3);
        let msg = err.to_string();
        assert!(msg.contains("row index 4"));
        assert!(msg.contains("1..=3"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = MatrizError::non_finite(f64::NAN);
        assert!(err.to_string().contains("Non-finite"));
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_cannot_empty_display() {
        let err = MatrizError::cannot_empty("column");
        assert!(err.to_string().contains("last column"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrizError::dimension_mismatch((2, 3), (3, 3));
        let msg = err.to_string();
        assert!(msg.contains("dimension mismatch"));
        assert!(msg.contains("2x3"));
        assert!(msg.contains("3x3"));
    }

    #[test]
    fn test_not_square_display() {
        let err = MatrizError::not_square(2, 5);
        let msg = err.to_string();
        assert!(msg.contains("square"));
        assert!(msg.contains("2x5"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            MatrizError::cannot_empty("row"),
            MatrizError::CannotEmptyMatrix { axis: "row" }
        );
        assert_ne!(
            MatrizError::shape_mismatch(2, 3),
            MatrizError::shape_mismatch(3, 2)
        );
    }

    #[test]
    fn test_error_debug_impl() {
        let err = MatrizError::not_square(1, 2);
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("NotSquare"));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<MatrizError>();
        assert_sync::<MatrizError>();
    }
}
