//! Error types.

use thiserror::Error;

/// Errors returned by fallible operations of this crate.
///
/// Every error is reported before the result (or an in-place destination) is written, so a
/// failed operation never leaves a partially updated value behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to invert a matrix whose determinant is exactly zero, or to perform Gauss-Jordan
    /// elimination on a matrix without a usable pivot.
    #[error("attempt to invert a singular matrix")]
    SingularMatrix,

    /// The operands of a variable-size vector operation have different lengths.
    #[error("vector size mismatch: expected {expected} elements, found {found}")]
    VectorSize { expected: usize, found: usize },

    /// The operands of a variable-size matrix operation have incompatible dimensions.
    ///
    /// Dimensions are given as `(width, height)`, ie. `(columns, rows)`.
    #[error("matrix size mismatch: {}x{} and {}x{}", .left.0, .left.1, .right.0, .right.1)]
    MatrixSize {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// An operation that requires a square matrix was invoked on a non-square one.
    #[error("expected a square matrix, found a {width}x{height} matrix")]
    NonSquare { width: usize, height: usize },

    /// A variable-size matrix was constructed from columns of differing lengths.
    #[error("column {column} has {found} elements, expected {expected}")]
    PartialMatrix {
        column: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type alias with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
