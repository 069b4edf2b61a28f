//! The compacted diagonal representation.

use crate::dense::{check_grid, DenseMatrix};
use crate::error::MatrixError;
use crate::Float;
use serde::{Deserialize, Serialize};

/// A square matrix whose off-diagonal elements are all exactly zero.
///
/// Only the diagonal itself is stored, as a flat vector of `n` values.
/// Off-diagonal positions are answered as zero on reads and refuse non-zero
/// writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagonalMatrix {
    // The diagonal, top-left to bottom-right.
    pub(crate) data: Vec<Float>,
}

impl std::fmt::Display for DiagonalMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.data.len();
        for r in 0..n {
            write!(f, "[ ")?;
            for c in 0..n {
                let v = if r == c { self.data[r] } else { 0.0 };
                write!(f, "{:.2} ", v)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl DiagonalMatrix {
    /// Creates a `DiagonalMatrix` from a full grid, validating that the grid
    /// is a well-formed square and that every off-diagonal element is
    /// exactly zero, then keeping only the diagonal.
    pub fn from_grid(nrows: usize, ncols: usize, data: &[Vec<Float>]) -> Result<Self, MatrixError> {
        check_grid(nrows, ncols, data)?;
        if nrows != ncols {
            return Err(MatrixError::Shape(format!(
                "a diagonal matrix must have as many rows as columns (got {} by {})",
                nrows, ncols
            )));
        }
        for (r, row) in data.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if r != c && v != 0.0 {
                    return Err(MatrixError::Shape(format!(
                        "not a diagonal matrix: non-zero element {} off the diagonal at ({},{})",
                        v, r, c
                    )));
                }
            }
        }
        let diag = (0..nrows).map(|i| data[i][i]).collect();
        Ok(Self { data: diag })
    }

    /// Creates a `DiagonalMatrix` directly from its diagonal, trusting the
    /// caller. The matrix is `data.len()` by `data.len()`.
    pub fn from_compact(data: Vec<Float>) -> Self {
        Self { data }
    }

    /// Returns a tuple with number of rows and columns.
    pub fn size(&self) -> (usize, usize) {
        (self.data.len(), self.data.len())
    }

    fn check_bounds(&self, nrow: usize, ncol: usize) -> Result<(), MatrixError> {
        let n = self.data.len();
        if nrow < n && ncol < n {
            Ok(())
        } else {
            Err(MatrixError::Bounds {
                row: nrow,
                col: ncol,
                nrows: n,
                ncols: n,
            })
        }
    }

    /// Gets an element from the matrix. Off-diagonal positions are zero by
    /// construction.
    pub fn get(&self, nrow: usize, ncol: usize) -> Result<Float, MatrixError> {
        self.check_bounds(nrow, ncol)?;
        if nrow == ncol {
            Ok(self.data[nrow])
        } else {
            Ok(0.0)
        }
    }

    /// Sets an element into the matrix, returning the written value.
    ///
    /// Writing a non-zero value off the diagonal violates the invariant and
    /// fails; writing a zero there is a no-op.
    pub fn set(&mut self, nrow: usize, ncol: usize, v: Float) -> Result<Float, MatrixError> {
        self.check_bounds(nrow, ncol)?;
        if !v.is_finite() {
            return Err(MatrixError::Shape(format!(
                "all elements must be finite numbers (found {})",
                v
            )));
        }
        if nrow != ncol {
            if v != 0.0 {
                return Err(MatrixError::Shape(format!(
                    "cannot set the non-zero value {} off the main diagonal of a diagonal matrix",
                    v
                )));
            }
            return Ok(v);
        }
        self.data[nrow] = v;
        Ok(v)
    }

    /// The sum of the diagonal, in increasing index order.
    pub fn trace(&self) -> Float {
        let mut trace = 0.0;
        for v in &self.data {
            trace += *v;
        }
        trace
    }

    /// The product of the diagonal, in increasing index order.
    pub fn determinant(&self) -> Float {
        let mut det = 1.0;
        for v in &self.data {
            det *= *v;
        }
        det
    }

    fn check_same_size(&self, other: &Self, op: &str) -> Result<(), MatrixError> {
        if self.data.len() != other.data.len() {
            let (n, m) = (self.data.len(), other.data.len());
            return Err(MatrixError::Shape(format!(
                "matrices must have the same dimensions for {} (got {} by {} and {} by {})",
                op, n, n, m, m
            )));
        }
        Ok(())
    }

    /// Adds two diagonal matrices directly over the stored diagonals.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other, "addition")?;
        let data = std::iter::zip(self.data.iter(), other.data.iter())
            .map(|(x, y)| *x + *y)
            .collect();
        Ok(Self { data })
    }

    /// Subtracts `other` from `self` directly over the stored diagonals.
    pub fn sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other, "subtraction")?;
        let data = std::iter::zip(self.data.iter(), other.data.iter())
            .map(|(x, y)| *x - *y)
            .collect();
        Ok(Self { data })
    }

    /// Scales the stored diagonal by `s`.
    pub fn scale(&self, s: Float) -> Self {
        Self {
            data: self.data.iter().map(|x| *x * s).collect(),
        }
    }

    /// Multiplies two diagonal matrices of matching dimension. The product
    /// of two diagonal matrices is the element-wise product of their
    /// diagonals, so this never touches a full grid.
    pub fn matmul(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.data.len() != other.data.len() {
            return Err(MatrixError::Shape(format!(
                "the number of columns in the first matrix ({}) must match the number of rows in the second ({}) for multiplication",
                self.data.len(),
                other.data.len()
            )));
        }
        let data = std::iter::zip(self.data.iter(), other.data.iter())
            .map(|(x, y)| *x * *y)
            .collect();
        Ok(Self { data })
    }

    /// Expands the stored diagonal into a full dense grid.
    pub fn to_dense(&self) -> DenseMatrix {
        let n = self.data.len();
        let mut grid = vec![0.0; n * n];
        for (i, v) in self.data.iter().enumerate() {
            grid[i * (n + 1)] = *v;
        }
        DenseMatrix {
            nrows: n,
            ncols: n,
            data: grid,
        }
    }
}
