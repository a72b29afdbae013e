//! Linear algebra primitives for graphics and geometry code.
//!
//! This library provides:
//!
//! - [`Vector`]s with 2, 3 or 4 elements, and the usual component-wise arithmetic.
//! - Square [`Matrix`] types of dimension 2, 3 and 4, with builders for affine transforms and
//!   projections.
//! - Unit quaternions ([`Quat`]) for rotations and dual quaternions ([`DualQuat`]) for rigid
//!   transforms.
//! - Variable-size [`SlowVector`] and [`SlowMatrix`] types whose dimensions are checked at
//!   runtime.
//! - Approximate floating-point comparisons through the [`ApproxEq`] trait.
//!
//! # Conventions
//!
//! - Matrices are stored in column-major order and indexed as `m[(row, column)]`. Vectors are
//!   column vectors, so `m * v` transforms `v` by `m`.
//! - All fixed-size types are [`Copy`] values. Operations return a new value instead of writing
//!   to an output parameter, so passing the same value as input and destination (`a = a * b`,
//!   `a *= b`) is always fine.
//! - Angles are given in radians, except for [`FieldOfView`], which uses degrees.
//! - Operations that can fail return a [`Result`]. Inverting a singular matrix is an error, while
//!   inverting a zero quaternion yields the zero quaternion.
//!
//! # Goals & Non-Goals
//!
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals"). Trigonometric operations need the [`Float`] trait, which is implemented for
//!   [`f32`] and [`f64`].
//! - Support only a single, column-major, unpadded data layout for matrices and vectors, so that
//!   they can be handed to graphics APIs via [`bytemuck`] without conversion.
//! - Don't try to be fast at the expense of simplicity. There is no SIMD code.

pub mod approx;
mod dual_quat;
mod error;
mod matrix;
mod quat;
mod slow;
mod traits;
mod vector;

pub use approx::{approx_equals, exact_equals, ApproxEq, EPSILON};
pub use dual_quat::*;
pub use error::*;
pub use matrix::*;
pub use quat::*;
pub use slow::*;
pub use traits::*;
pub use vector::*;
