//! Scalar number-theory helpers for `lina`.
//!
//! These are small, independent, pure functions: factorials and binomial coefficients, greatest
//! common divisors, primality and factorization, finite summation, and angle unit conversion.
//! Functions whose result can exceed the range of [`u64`] return [`Option`] and yield [`None`]
//! on overflow instead of wrapping.

mod angle;
mod combinatorics;
mod primes;
mod sum;

pub use angle::*;
pub use combinatorics::*;
pub use primes::*;
pub use sum::*;
