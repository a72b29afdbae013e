//! Finite summation.

use std::ops::RangeInclusive;

/// Computes `f(start) + f(start + 1) + ... + f(end)`.
///
/// An empty range (`start > end`) sums to 0.
///
/// # Examples
///
/// ```
/// # use lina_utils::*;
/// assert_eq!(summation(1..=100, |i| i as f64), 5050.0);
/// assert_eq!(summation(1..=3, |i| (i * i) as f64), 14.0);
/// ```
pub fn summation<F>(range: RangeInclusive<i64>, f: F) -> f64
where
    F: FnMut(i64) -> f64,
{
    range.map(f).sum()
}
