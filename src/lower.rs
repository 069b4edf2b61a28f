//! The compacted lower-triangular representation.

use crate::dense::{check_grid, DenseMatrix};
use crate::error::MatrixError;
use crate::Float;
use serde::{Deserialize, Serialize};

/// A square matrix whose elements above the main diagonal are all exactly
/// zero.
///
/// Only the triangle on and below the diagonal is stored: row `r`
/// contributes its `r + 1` leading elements, packed row after row into a
/// single vector of `n * (n + 1) / 2` values. Positions above the diagonal
/// are answered as zero on reads and refuse non-zero writes.
///
/// Deserialization restores the packed storage with the same trust as
/// [`LowerTriangularMatrix::from_compact`]: `n` and the stored length are
/// assumed consistent, as written by this library's own serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowerTriangularMatrix {
    pub(crate) n: usize,

    // Triangle-packed: row r occupies positions
    // r*(r+1)/2 .. r*(r+1)/2 + r + 1, holding columns 0..=r.
    pub(crate) data: Vec<Float>,
}

/// Number of stored elements of an `n` by `n` triangular matrix.
pub(crate) const fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

impl std::fmt::Display for LowerTriangularMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Renders the full logical grid, reconstructing the zeroes, so the
        // output is indistinguishable from a dense rendering.
        for r in 0..self.n {
            write!(f, "[ ")?;
            for c in 0..self.n {
                let v = if c <= r { self.data[self.index(r, c)] } else { 0.0 };
                write!(f, "{:.2} ", v)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl LowerTriangularMatrix {
    /// Creates a `LowerTriangularMatrix` from a full grid, validating that
    /// the grid is a well-formed square and that every element above the
    /// diagonal is exactly zero, then compacting it.
    pub fn from_grid(nrows: usize, ncols: usize, data: &[Vec<Float>]) -> Result<Self, MatrixError> {
        check_grid(nrows, ncols, data)?;
        if nrows != ncols {
            return Err(MatrixError::Shape(format!(
                "a lower triangular matrix must have as many rows as columns (got {} by {})",
                nrows, ncols
            )));
        }
        for (r, row) in data.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if c > r && v != 0.0 {
                    return Err(MatrixError::Shape(format!(
                        "not a lower triangular matrix: non-zero element {} above the diagonal at ({},{})",
                        v, r, c
                    )));
                }
            }
        }
        let mut packed = Vec::with_capacity(packed_len(nrows));
        for (r, row) in data.iter().enumerate() {
            packed.extend_from_slice(&row[..=r]);
        }
        Ok(Self {
            n: nrows,
            data: packed,
        })
    }

    /// Creates a `LowerTriangularMatrix` directly from triangle-packed
    /// storage, trusting the caller.
    ///
    /// This is the fast entry used when an operation already knows its
    /// result is legally triangular (e.g., the sum of two lower triangular
    /// matrices) and re-validating would be wasted work.
    ///
    /// # Panics
    /// Panics if `data.len()` is not `n * (n + 1) / 2`.
    pub fn from_compact(n: usize, data: Vec<Float>) -> Self {
        assert_eq!(
            data.len(),
            packed_len(n),
            "triangle-packed data for a {} by {} matrix must hold {} elements",
            n,
            n,
            packed_len(n)
        );
        Self { n, data }
    }

    /// Returns a tuple with number of rows and columns.
    pub fn size(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    /// Gets the index of a stored element within the packed `data` vector.
    /// Only valid for `ncol <= nrow`.
    pub(crate) fn index(&self, nrow: usize, ncol: usize) -> usize {
        nrow * (nrow + 1) / 2 + ncol
    }

    fn check_bounds(&self, nrow: usize, ncol: usize) -> Result<(), MatrixError> {
        if nrow < self.n && ncol < self.n {
            Ok(())
        } else {
            Err(MatrixError::Bounds {
                row: nrow,
                col: ncol,
                nrows: self.n,
                ncols: self.n,
            })
        }
    }

    /// Gets an element from the matrix. Positions above the diagonal are
    /// zero by construction.
    pub fn get(&self, nrow: usize, ncol: usize) -> Result<Float, MatrixError> {
        self.check_bounds(nrow, ncol)?;
        if ncol > nrow {
            return Ok(0.0);
        }
        Ok(self.data[self.index(nrow, ncol)])
    }

    /// Sets an element into the matrix, returning the written value.
    ///
    /// Writing a non-zero value above the diagonal violates the invariant
    /// and fails; writing a zero there is a no-op.
    pub fn set(&mut self, nrow: usize, ncol: usize, v: Float) -> Result<Float, MatrixError> {
        self.check_bounds(nrow, ncol)?;
        if !v.is_finite() {
            return Err(MatrixError::Shape(format!(
                "all elements must be finite numbers (found {})",
                v
            )));
        }
        if ncol > nrow {
            if v != 0.0 {
                return Err(MatrixError::Shape(format!(
                    "cannot set the non-zero value {} above the main diagonal of a lower triangular matrix",
                    v
                )));
            }
            return Ok(v);
        }
        let i = self.index(nrow, ncol);
        self.data[i] = v;
        Ok(v)
    }

    /// The sum of the diagonal elements, in increasing index order.
    pub fn trace(&self) -> Float {
        let mut trace = 0.0;
        for i in 0..self.n {
            trace += self.data[self.index(i, i)];
        }
        trace
    }

    /// The product of the diagonal elements, in increasing index order.
    /// For a triangular matrix this is the determinant.
    pub fn determinant(&self) -> Float {
        let mut det = 1.0;
        for i in 0..self.n {
            det *= self.data[self.index(i, i)];
        }
        det
    }

    fn check_same_size(&self, other: &Self, op: &str) -> Result<(), MatrixError> {
        if self.n != other.n {
            return Err(MatrixError::Shape(format!(
                "matrices must have the same dimensions for {} (got {} by {} and {} by {})",
                op, self.n, self.n, other.n, other.n
            )));
        }
        Ok(())
    }

    /// Adds two lower triangular matrices directly over the packed storage.
    /// The sum of two lower triangular matrices is lower triangular, so the
    /// result is built without re-validation.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other, "addition")?;
        let data = std::iter::zip(self.data.iter(), other.data.iter())
            .map(|(x, y)| *x + *y)
            .collect();
        Ok(Self { n: self.n, data })
    }

    /// Subtracts `other` from `self` directly over the packed storage.
    pub fn sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other, "subtraction")?;
        let data = std::iter::zip(self.data.iter(), other.data.iter())
            .map(|(x, y)| *x - *y)
            .collect();
        Ok(Self { n: self.n, data })
    }

    /// Scales every stored element by `s`, staying in the packed storage.
    pub fn scale(&self, s: Float) -> Self {
        Self {
            n: self.n,
            data: self.data.iter().map(|x| *x * s).collect(),
        }
    }

    /// Expands the packed triangle into a full dense grid.
    pub fn to_dense(&self) -> DenseMatrix {
        let mut grid = vec![0.0; self.n * self.n];
        for r in 0..self.n {
            for c in 0..=r {
                grid[r * self.n + c] = self.data[self.index(r, c)];
            }
        }
        DenseMatrix {
            nrows: self.n,
            ncols: self.n,
            data: grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_index() {
        let m = LowerTriangularMatrix::from_compact(3, vec![1., 2., 3., 4., 5., 6.]);
        // Row starts at r*(r+1)/2
        assert_eq!(m.index(0, 0), 0);
        assert_eq!(m.index(1, 0), 1);
        assert_eq!(m.index(1, 1), 2);
        assert_eq!(m.index(2, 0), 3);
        assert_eq!(m.index(2, 2), 5);
    }

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(1), 1);
        assert_eq!(packed_len(3), 6);
        assert_eq!(packed_len(5), 15);
    }

    #[test]
    #[should_panic]
    fn test_from_compact_wrong_len() {
        let _ = LowerTriangularMatrix::from_compact(3, vec![1., 2., 3.]);
    }
}
