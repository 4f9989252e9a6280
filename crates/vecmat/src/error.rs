//! Error type shared by all fallible vector and matrix operations.

use thiserror::Error;

/// The ways a vector or matrix operation can fail.
///
/// Every error is returned by the call that violated the precondition; nothing in this crate
/// catches or retries them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LinalgError {
    /// The operands of a binary operation have different lengths (or, for matrices, different
    /// dimensions).
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// An operation that only exists in 3 dimensions (cross product, axis rotation) was invoked
    /// on a vector of a different length.
    #[error("operation is only defined for 3-dimensional vectors, got {len} dimensions")]
    Dimensionality { len: usize },

    /// The matrix has a determinant of exactly zero.
    #[error("matrix is not invertible")]
    NotInvertible,

    /// A matrix was built from rows that do not form a square.
    #[error("row {row} has {len} elements, but a square matrix with {rows} rows needs {rows}")]
    Shape { row: usize, len: usize, rows: usize },

    /// A vector with no elements, or a matrix with no rows, was requested.
    #[error("vectors and matrices need at least one element")]
    Empty,

    /// A direction was requested from a vector of zero length.
    #[error("vector has zero length and no direction")]
    DegenerateVector,
}

/// Result type returned by fallible operations in this crate.
pub type Result<T, E = LinalgError> = std::result::Result<T, E>;

/// Returns an error if `expected` and `actual` lengths differ.
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(LinalgError::DimensionMismatch { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            LinalgError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
            .to_string(),
            "dimension mismatch: expected 3, got 2"
        );
        assert_eq!(
            LinalgError::Shape {
                row: 1,
                len: 2,
                rows: 3
            }
            .to_string(),
            "row 1 has 2 elements, but a square matrix with 3 rows needs 3"
        );
    }

    #[test]
    fn len_check() {
        assert_eq!(check_len(4, 4), Ok(()));
        assert_eq!(
            check_len(4, 5),
            Err(LinalgError::DimensionMismatch {
                expected: 4,
                actual: 5
            })
        );
    }
}
