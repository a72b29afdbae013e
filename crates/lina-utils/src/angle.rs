//! Degree/radian conversion.

use std::f64::consts::PI;

/// Converts an angle in degrees to radians.
///
/// # Examples
///
/// ```
/// # use lina_utils::*;
/// assert!((radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Converts an angle in radians to degrees.
///
/// # Examples
///
/// ```
/// # use lina_utils::*;
/// assert!((degrees(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
/// ```
#[inline]
pub fn degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}
