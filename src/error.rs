//! The error taxonomy shared by every matrix operation.

use crate::matrix::MatrixKind;
use thiserror::Error;

/// The failures a matrix operation can report.
///
/// Every fallible operation detects its error at the call that violates the
/// rule and returns before mutating anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Dimensions or data violate the shape rules of a representation:
    /// non-positive dimensions, non-rectangular data, a dimension mismatch
    /// between operands, a non-finite element, or a non-zero value in a
    /// structurally-zero position.
    #[error("shape error: {0}")]
    Shape(String),

    /// A row/column pair outside the matrix on `get` or `set`.
    #[error("index ({row},{col}) is out of bounds for a {nrows}x{ncols} matrix")]
    Bounds {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
        /// Number of rows in the matrix.
        nrows: usize,
        /// Number of columns in the matrix.
        ncols: usize,
    },

    /// The representation does not define the requested operation (e.g.,
    /// the trace of a general dense matrix, or a determinant that would
    /// require elimination).
    #[error("{op} is not supported for {kind} matrices")]
    Unsupported {
        /// Name of the operation.
        op: &'static str,
        /// Kind of the matrix it was requested on.
        kind: MatrixKind,
    },
}
