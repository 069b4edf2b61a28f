/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

#![deny(missing_docs)]

//! A library of shaped matrices.
//!
//! Besides the general [`DenseMatrix`], it offers storage-optimized
//! representations for square, lower-triangular, upper-triangular and
//! diagonal matrices. The triangular and diagonal kinds store only their
//! structurally-nonzero region, enforce the corresponding zero-region
//! invariant on mutation, and keep arithmetic within the compacted
//! representation whenever both operands share it.
//!
//! The [`Matrix`] enum closes the five representations behind one type:
//! [`Matrix::classify`] turns raw rectangular data into the most specific
//! representation that losslessly holds it, and the arithmetic on [`Matrix`]
//! dispatches on the pair of operand kinds, falling back to a dense
//! computation when no specialized path applies.

/// The kind of floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

pub mod dense;
pub mod diagonal;
pub mod error;
pub mod lower;
pub mod matrix;
pub mod square;
pub mod upper;

pub use dense::DenseMatrix;
pub use diagonal::DiagonalMatrix;
pub use error::MatrixError;
pub use lower::LowerTriangularMatrix;
pub use matrix::{Matrix, MatrixKind};
pub use square::SquareMatrix;
pub use upper::UpperTriangularMatrix;
