//! The closed set of representations, the classifier and the
//! operation dispatch over pairs of them.

use crate::dense::DenseMatrix;
use crate::diagonal::DiagonalMatrix;
use crate::error::MatrixError;
use crate::lower::LowerTriangularMatrix;
use crate::square::SquareMatrix;
use crate::upper::UpperTriangularMatrix;
use crate::Float;
use serde::{Deserialize, Serialize};

/// The tag identifying each concrete matrix representation, from most
/// general to most specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatrixKind {
    /// A general rectangular matrix.
    Dense,
    /// A square matrix with no further structure.
    Square,
    /// A square matrix that is zero above the diagonal.
    LowerTriangular,
    /// A square matrix that is zero below the diagonal.
    UpperTriangular,
    /// A square matrix that is zero off the diagonal.
    Diagonal,
}

impl std::fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatrixKind::Dense => "dense",
            MatrixKind::Square => "square",
            MatrixKind::LowerTriangular => "lower triangular",
            MatrixKind::UpperTriangular => "upper triangular",
            MatrixKind::Diagonal => "diagonal",
        };
        write!(f, "{}", name)
    }
}

/// One matrix in any of the five concrete representations.
///
/// The enum is the single public entry for callers that do not care which
/// representation they hold: [`Matrix::classify`] picks the most specific
/// one for a raw grid, and every operation dispatches on the concrete pair
/// of operands, keeping the compacted representations when both sides share
/// one and promoting through [`DenseMatrix`] otherwise.
///
/// Serialization is tagged with the representation, so a persisted matrix
/// deserializes back into the exact same variant (and the same compacted
/// storage) without being re-classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "matrix")]
pub enum Matrix {
    /// A general rectangular matrix.
    Dense(DenseMatrix),
    /// A square matrix with no further structure.
    Square(SquareMatrix),
    /// A square matrix that is zero above the diagonal.
    LowerTriangular(LowerTriangularMatrix),
    /// A square matrix that is zero below the diagonal.
    UpperTriangular(UpperTriangularMatrix),
    /// A square matrix that is zero off the diagonal.
    Diagonal(DiagonalMatrix),
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Matrix::Dense(m) => m.fmt(f),
            Matrix::Square(m) => m.fmt(f),
            Matrix::LowerTriangular(m) => m.fmt(f),
            Matrix::UpperTriangular(m) => m.fmt(f),
            Matrix::Diagonal(m) => m.fmt(f),
        }
    }
}

impl Matrix {
    /// Builds the most specific representation that losslessly holds the
    /// given grid.
    ///
    /// The attempts run in a fixed order — diagonal, lower triangular, upper
    /// triangular, square (when the grid is square), dense — and each one is
    /// a full validating construction; the first that succeeds wins. The
    /// lower-before-upper ordering only matters for matrices that are
    /// strictly one of the two, since a matrix that is triangular both ways
    /// is diagonal and is caught by the first attempt.
    ///
    /// Fails only when the grid itself is malformed (wrong dimensions,
    /// ragged rows, non-finite elements); any well-formed rectangle
    /// classifies, at worst as dense.
    pub fn classify(nrows: usize, ncols: usize, data: &[Vec<Float>]) -> Result<Self, MatrixError> {
        if let Ok(m) = DiagonalMatrix::from_grid(nrows, ncols, data) {
            return Ok(Matrix::Diagonal(m));
        }
        if let Ok(m) = LowerTriangularMatrix::from_grid(nrows, ncols, data) {
            return Ok(Matrix::LowerTriangular(m));
        }
        if let Ok(m) = UpperTriangularMatrix::from_grid(nrows, ncols, data) {
            return Ok(Matrix::UpperTriangular(m));
        }
        if nrows == ncols {
            if let Ok(m) = SquareMatrix::from_grid(nrows, ncols, data) {
                return Ok(Matrix::Square(m));
            }
        }
        Ok(Matrix::Dense(DenseMatrix::from_grid(nrows, ncols, data)?))
    }

    /// The tag of the representation currently held.
    pub fn kind(&self) -> MatrixKind {
        match self {
            Matrix::Dense(_) => MatrixKind::Dense,
            Matrix::Square(_) => MatrixKind::Square,
            Matrix::LowerTriangular(_) => MatrixKind::LowerTriangular,
            Matrix::UpperTriangular(_) => MatrixKind::UpperTriangular,
            Matrix::Diagonal(_) => MatrixKind::Diagonal,
        }
    }

    /// Returns a tuple with number of rows and columns.
    pub fn size(&self) -> (usize, usize) {
        match self {
            Matrix::Dense(m) => m.size(),
            Matrix::Square(m) => m.size(),
            Matrix::LowerTriangular(m) => m.size(),
            Matrix::UpperTriangular(m) => m.size(),
            Matrix::Diagonal(m) => m.size(),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.size().0
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.size().1
    }

    /// Gets an element, whichever representation holds it.
    pub fn get(&self, nrow: usize, ncol: usize) -> Result<Float, MatrixError> {
        match self {
            Matrix::Dense(m) => m.get(nrow, ncol),
            Matrix::Square(m) => m.get(nrow, ncol),
            Matrix::LowerTriangular(m) => m.get(nrow, ncol),
            Matrix::UpperTriangular(m) => m.get(nrow, ncol),
            Matrix::Diagonal(m) => m.get(nrow, ncol),
        }
    }

    /// Sets an element, returning the written value. The compacted
    /// representations enforce their zero-region invariant here, so a set
    /// that succeeds never changes the kind of the matrix.
    pub fn set(&mut self, nrow: usize, ncol: usize, v: Float) -> Result<Float, MatrixError> {
        match self {
            Matrix::Dense(m) => m.set(nrow, ncol, v),
            Matrix::Square(m) => m.set(nrow, ncol, v),
            Matrix::LowerTriangular(m) => m.set(nrow, ncol, v),
            Matrix::UpperTriangular(m) => m.set(nrow, ncol, v),
            Matrix::Diagonal(m) => m.set(nrow, ncol, v),
        }
    }

    /// Expands whatever representation is held into a full dense grid. This
    /// is the promotion every mixed-kind operation goes through.
    pub fn to_dense(&self) -> DenseMatrix {
        match self {
            Matrix::Dense(m) => m.clone(),
            Matrix::Square(m) => m.to_dense(),
            Matrix::LowerTriangular(m) => m.to_dense(),
            Matrix::UpperTriangular(m) => m.to_dense(),
            Matrix::Diagonal(m) => m.to_dense(),
        }
    }

    /// Adds two matrices.
    ///
    /// When both operands share a compacted representation the sum is
    /// computed over the compacted storage and keeps that representation;
    /// any other pairing promotes both sides to dense and returns a dense
    /// result, without attempting to re-classify it.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        match (self, other) {
            (Matrix::LowerTriangular(a), Matrix::LowerTriangular(b)) => {
                Ok(Matrix::LowerTriangular(a.add(b)?))
            }
            (Matrix::UpperTriangular(a), Matrix::UpperTriangular(b)) => {
                Ok(Matrix::UpperTriangular(a.add(b)?))
            }
            (Matrix::Diagonal(a), Matrix::Diagonal(b)) => Ok(Matrix::Diagonal(a.add(b)?)),
            _ => Ok(Matrix::Dense(self.to_dense().add(&other.to_dense())?)),
        }
    }

    /// Subtracts `other` from `self`. Same dispatch rules as [`Matrix::add`].
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        match (self, other) {
            (Matrix::LowerTriangular(a), Matrix::LowerTriangular(b)) => {
                Ok(Matrix::LowerTriangular(a.sub(b)?))
            }
            (Matrix::UpperTriangular(a), Matrix::UpperTriangular(b)) => {
                Ok(Matrix::UpperTriangular(a.sub(b)?))
            }
            (Matrix::Diagonal(a), Matrix::Diagonal(b)) => Ok(Matrix::Diagonal(a.sub(b)?)),
            _ => Ok(Matrix::Dense(self.to_dense().sub(&other.to_dense())?)),
        }
    }

    /// Scales every element by `s`. The compacted representations scale
    /// their stored region and keep their kind; dense and square return a
    /// dense result.
    pub fn scale(&self, s: Float) -> Matrix {
        match self {
            Matrix::LowerTriangular(a) => Matrix::LowerTriangular(a.scale(s)),
            Matrix::UpperTriangular(a) => Matrix::UpperTriangular(a.scale(s)),
            Matrix::Diagonal(a) => Matrix::Diagonal(a.scale(s)),
            Matrix::Dense(a) => Matrix::Dense(a.scale(s)),
            Matrix::Square(a) => Matrix::Dense(a.to_dense().scale(s)),
        }
    }

    /// Multiplies `self` by `other`.
    ///
    /// Diagonal by diagonal is the one specialized product: it is exactly
    /// the element-wise product of the two diagonals and stays diagonal.
    /// Every other pairing promotes to dense and runs the standard triple
    /// loop.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        match (self, other) {
            (Matrix::Diagonal(a), Matrix::Diagonal(b)) => Ok(Matrix::Diagonal(a.matmul(b)?)),
            _ => Ok(Matrix::Dense(self.to_dense().matmul(&other.to_dense())?)),
        }
    }

    /// Returns the transpose as a new dense matrix. No representation keeps
    /// its compacted storage through a transpose; callers that want a
    /// specific result can re-run [`Matrix::classify`] on it.
    pub fn transpose(&self) -> Matrix {
        Matrix::Dense(self.to_dense().transpose())
    }

    /// The sum of the diagonal elements. Defined on the square family only;
    /// a dense matrix reports [`MatrixError::Unsupported`].
    pub fn trace(&self) -> Result<Float, MatrixError> {
        match self {
            Matrix::Square(m) => Ok(m.trace()),
            Matrix::LowerTriangular(m) => Ok(m.trace()),
            Matrix::UpperTriangular(m) => Ok(m.trace()),
            Matrix::Diagonal(m) => Ok(m.trace()),
            Matrix::Dense(_) => Err(MatrixError::Unsupported {
                op: "trace",
                kind: self.kind(),
            }),
        }
    }

    /// The determinant, as the product of the diagonal. Defined on the
    /// triangular and diagonal representations only; the general case would
    /// need elimination, which this library does not do.
    pub fn determinant(&self) -> Result<Float, MatrixError> {
        match self {
            Matrix::LowerTriangular(m) => Ok(m.determinant()),
            Matrix::UpperTriangular(m) => Ok(m.determinant()),
            Matrix::Diagonal(m) => Ok(m.determinant()),
            Matrix::Dense(_) | Matrix::Square(_) => Err(MatrixError::Unsupported {
                op: "determinant",
                kind: self.kind(),
            }),
        }
    }

    /// Renders the full logical grid as text, each element to two decimals,
    /// one bracketed row per line. Same as the `Display` implementation.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
