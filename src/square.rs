//! The square representation, a dense grid with a trace.

use crate::dense::DenseMatrix;
use crate::error::MatrixError;
use crate::Float;
use serde::{Deserialize, Serialize};

/// A dense matrix that is guaranteed to have as many rows as columns,
/// which is what gives it a trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquareMatrix {
    pub(crate) grid: DenseMatrix,
}

impl std::fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.grid.fmt(f)
    }
}

impl SquareMatrix {
    /// Creates a `SquareMatrix` from a full grid, validating that the grid
    /// is well formed and that `nrows == ncols`.
    pub fn from_grid(nrows: usize, ncols: usize, data: &[Vec<Float>]) -> Result<Self, MatrixError> {
        Self::from_dense(DenseMatrix::from_grid(nrows, ncols, data)?)
    }

    /// Wraps an existing `DenseMatrix`, validating that it is square.
    pub fn from_dense(grid: DenseMatrix) -> Result<Self, MatrixError> {
        if !grid.is_square() {
            return Err(MatrixError::Shape(format!(
                "a square matrix must have as many rows as columns (got {} by {})",
                grid.nrows, grid.ncols
            )));
        }
        Ok(Self { grid })
    }

    /// Returns a tuple with number of rows and columns.
    pub fn size(&self) -> (usize, usize) {
        self.grid.size()
    }

    /// Gets an element from the matrix.
    pub fn get(&self, nrow: usize, ncol: usize) -> Result<Float, MatrixError> {
        self.grid.get(nrow, ncol)
    }

    /// Sets an element into the matrix, returning the written value.
    pub fn set(&mut self, nrow: usize, ncol: usize, v: Float) -> Result<Float, MatrixError> {
        self.grid.set(nrow, ncol, v)
    }

    /// The sum of the diagonal elements, in increasing index order.
    pub fn trace(&self) -> Float {
        let mut trace = 0.0;
        for i in 0..self.grid.nrows {
            trace += self.grid.data[self.grid.index(i, i)];
        }
        trace
    }

    /// Returns the full dense grid of this matrix.
    pub fn to_dense(&self) -> DenseMatrix {
        self.grid.clone()
    }
}
