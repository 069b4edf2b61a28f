//! The general full-grid matrix representation.

use crate::error::MatrixError;
use crate::Float;
use serde::{Deserialize, Serialize};

/// Checks that a raw grid is a well-formed `nrows` by `ncols` rectangle of
/// finite numbers. Every validating constructor in the library starts here.
pub(crate) fn check_grid(nrows: usize, ncols: usize, data: &[Vec<Float>]) -> Result<(), MatrixError> {
    if nrows == 0 {
        return Err(MatrixError::Shape(
            "the number of rows must be positive".to_string(),
        ));
    }
    if ncols == 0 {
        return Err(MatrixError::Shape(
            "the number of columns must be positive".to_string(),
        ));
    }
    if data.len() != nrows {
        return Err(MatrixError::Shape(format!(
            "data has {} rows but {} were expected",
            data.len(),
            nrows
        )));
    }
    for (r, row) in data.iter().enumerate() {
        if row.len() != ncols {
            return Err(MatrixError::Shape(format!(
                "row {} has {} elements but {} were expected",
                r,
                row.len(),
                ncols
            )));
        }
        for &v in row {
            if !v.is_finite() {
                return Err(MatrixError::Shape(format!(
                    "all elements must be finite numbers (found {})",
                    v
                )));
            }
        }
    }
    Ok(())
}

/// A general rectangular matrix, stored as a full grid.
///
/// This is the baseline every other representation falls back to: mixed-kind
/// arithmetic promotes both operands to a `DenseMatrix` and computes here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix {
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,

    // Contains the data ordered by row,
    // going left to right, and up and down.
    pub(crate) data: Vec<Float>,
}

impl std::fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.nrows {
            write!(f, "[ ")?;
            for c in 0..self.ncols {
                write!(f, "{:.2} ", self.data[self.index(r, c)])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl DenseMatrix {
    /// Creates a `DenseMatrix` of `nrows` by `ncols` full of zeroes.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, MatrixError> {
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::Shape(format!(
                "matrix dimensions must be positive (got {} by {})",
                nrows, ncols
            )));
        }
        Ok(Self {
            nrows,
            ncols,
            data: vec![0.0; nrows * ncols],
        })
    }

    /// Creates a `DenseMatrix` from a full rectangular grid, validating that
    /// the grid matches `nrows` by `ncols` and contains only finite numbers.
    pub fn from_grid(nrows: usize, ncols: usize, data: &[Vec<Float>]) -> Result<Self, MatrixError> {
        check_grid(nrows, ncols, data)?;
        let mut flat = Vec::with_capacity(nrows * ncols);
        for row in data {
            flat.extend_from_slice(row);
        }
        Ok(Self {
            nrows,
            ncols,
            data: flat,
        })
    }

    /// Returns a tuple with number of rows and columns.
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Gets the index of an element within the `data` array of the matrix.
    pub(crate) fn index(&self, nrow: usize, ncol: usize) -> usize {
        self.ncols * nrow + ncol
    }

    fn check_bounds(&self, nrow: usize, ncol: usize) -> Result<(), MatrixError> {
        if nrow < self.nrows && ncol < self.ncols {
            Ok(())
        } else {
            Err(MatrixError::Bounds {
                row: nrow,
                col: ncol,
                nrows: self.nrows,
                ncols: self.ncols,
            })
        }
    }

    /// Gets an element from the matrix.
    pub fn get(&self, nrow: usize, ncol: usize) -> Result<Float, MatrixError> {
        self.check_bounds(nrow, ncol)?;
        Ok(self.data[self.index(nrow, ncol)])
    }

    /// Sets an element into the matrix, returning the written value.
    pub fn set(&mut self, nrow: usize, ncol: usize, v: Float) -> Result<Float, MatrixError> {
        self.check_bounds(nrow, ncol)?;
        if !v.is_finite() {
            return Err(MatrixError::Shape(format!(
                "all elements must be finite numbers (found {})",
                v
            )));
        }
        let i = self.index(nrow, ncol);
        self.data[i] = v;
        Ok(v)
    }

    /// Checks whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Checks whether every element above the main diagonal is exactly zero.
    /// A non-square matrix is never triangular.
    pub fn is_lower_triangular(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for r in 0..self.nrows {
            for c in (r + 1)..self.ncols {
                if self.data[self.index(r, c)] != 0.0 {
                    return false;
                }
            }
        }
        true
    }

    /// Checks whether every element below the main diagonal is exactly zero.
    /// A non-square matrix is never triangular.
    pub fn is_upper_triangular(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for r in 0..self.nrows {
            for c in 0..r {
                if self.data[self.index(r, c)] != 0.0 {
                    return false;
                }
            }
        }
        true
    }

    /// Checks whether every off-diagonal element is exactly zero; i.e.,
    /// whether the matrix is both lower- and upper-triangular.
    pub fn is_diagonal(&self) -> bool {
        self.is_lower_triangular() && self.is_upper_triangular()
    }

    /// Returns a new matrix with swapped dimensions, where
    /// `result[c][r] == self[r][c]`. Does not mutate `self`.
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.nrows * self.ncols];
        for r in 0..self.nrows {
            for c in 0..self.ncols {
                data[self.nrows * c + r] = self.data[self.index(r, c)];
            }
        }
        Self {
            nrows: self.ncols,
            ncols: self.nrows,
            data,
        }
    }

    fn check_same_size(&self, other: &Self, op: &str) -> Result<(), MatrixError> {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return Err(MatrixError::Shape(format!(
                "matrices must have the same dimensions for {} (got {} by {} and {} by {})",
                op, self.nrows, self.ncols, other.nrows, other.ncols
            )));
        }
        Ok(())
    }

    /// Adds `self` and `other` element-wise into a new matrix.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other, "addition")?;
        let data = std::iter::zip(self.data.iter(), other.data.iter())
            .map(|(x, y)| *x + *y)
            .collect();
        Ok(Self {
            nrows: self.nrows,
            ncols: self.ncols,
            data,
        })
    }

    /// Subtracts `other` from `self` element-wise into a new matrix.
    pub fn sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other, "subtraction")?;
        let data = std::iter::zip(self.data.iter(), other.data.iter())
            .map(|(x, y)| *x - *y)
            .collect();
        Ok(Self {
            nrows: self.nrows,
            ncols: self.ncols,
            data,
        })
    }

    /// Scales every element by `s` into a new matrix.
    pub fn scale(&self, s: Float) -> Self {
        Self {
            nrows: self.nrows,
            ncols: self.ncols,
            data: self.data.iter().map(|x| *x * s).collect(),
        }
    }

    /// Multiplies `self` by `other` with the standard triple loop. The
    /// accumulation runs over the shared dimension in increasing index
    /// order, which pins the floating-point result.
    pub fn matmul(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.ncols != other.nrows {
            return Err(MatrixError::Shape(format!(
                "the number of columns in the first matrix ({}) must match the number of rows in the second ({}) for multiplication",
                self.ncols, other.nrows
            )));
        }
        let mut ret = Self {
            nrows: self.nrows,
            ncols: other.ncols,
            data: vec![0.0; self.nrows * other.ncols],
        };
        for r in 0..self.nrows {
            for c in 0..other.ncols {
                let mut v = 0.0;
                for i in 0..self.ncols {
                    v += self.data[self.index(r, i)] * other.data[other.index(i, c)];
                }
                let j = ret.index(r, c);
                ret.data[j] = v;
            }
        }
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index() {
        let m = DenseMatrix::zeros(3, 4).unwrap();
        assert_eq!(m.index(0, 0), 0);
        assert_eq!(m.index(0, 3), 3);
        assert_eq!(m.index(1, 0), 4);
        assert_eq!(m.index(2, 3), 11);
    }

    #[test]
    fn test_shape_predicates() {
        // A non-square matrix is never triangular nor diagonal.
        let rect = DenseMatrix::from_grid(2, 3, &[vec![1., 0., 0.], vec![0., 1., 0.]]).unwrap();
        assert!(!rect.is_square());
        assert!(!rect.is_lower_triangular());
        assert!(!rect.is_upper_triangular());
        assert!(!rect.is_diagonal());

        // Strictly lower triangular: lower yes, upper no, diagonal no.
        let lower = DenseMatrix::from_grid(2, 2, &[vec![1., 0.], vec![3., 4.]]).unwrap();
        assert!(lower.is_square());
        assert!(lower.is_lower_triangular());
        assert!(!lower.is_upper_triangular());
        assert!(!lower.is_diagonal());

        // Strictly upper triangular: the mirror case.
        let upper = DenseMatrix::from_grid(2, 2, &[vec![1., 2.], vec![0., 4.]]).unwrap();
        assert!(!upper.is_lower_triangular());
        assert!(upper.is_upper_triangular());
        assert!(!upper.is_diagonal());

        // Diagonal is triangular both ways.
        let diag = DenseMatrix::from_grid(2, 2, &[vec![1., 0.], vec![0., 4.]]).unwrap();
        assert!(diag.is_lower_triangular());
        assert!(diag.is_upper_triangular());
        assert!(diag.is_diagonal());

        // A full square has no triangular structure at all.
        let full = DenseMatrix::from_grid(2, 2, &[vec![1., 2.], vec![3., 4.]]).unwrap();
        assert!(full.is_square());
        assert!(!full.is_lower_triangular());
        assert!(!full.is_upper_triangular());
        assert!(!full.is_diagonal());
    }

    #[test]
    fn test_check_grid() {
        assert!(check_grid(2, 2, &[vec![1., 2.], vec![3., 4.]]).is_ok());
        // wrong number of rows
        assert!(check_grid(3, 2, &[vec![1., 2.], vec![3., 4.]]).is_err());
        // ragged
        assert!(check_grid(2, 2, &[vec![1., 2.], vec![3.]]).is_err());
        // empty
        assert!(check_grid(0, 2, &[]).is_err());
        // non-finite
        assert!(check_grid(1, 2, &[vec![1., Float::NAN]]).is_err());
        assert!(check_grid(1, 2, &[vec![1., Float::INFINITY]]).is_err());
    }
}
