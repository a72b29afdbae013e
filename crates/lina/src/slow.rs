//! Variable-size vectors and matrices.
//!
//! [`SlowVector`] and [`SlowMatrix`] store their elements on the heap and check operand sizes at
//! runtime. Every operation that combines two values returns a [`Result`](crate::Result) and
//! fails with an [`Error`](crate::Error) if the sizes do not fit together.
//!
//! These types favor generality over speed: the determinant is computed by cofactor expansion,
//! which takes exponential time. Prefer [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix)
//! whenever the dimensions are known at compile time.

mod matrix;
mod vector;

pub use matrix::SlowMatrix;
pub use vector::SlowVector;
