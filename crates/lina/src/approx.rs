//! Tolerance-based and exact equality.
//!
//! Every type in this crate compares *exactly* through [`PartialEq`] and *approximately* through
//! [`ApproxEq`]. The approximate comparison used throughout the library is the *scaled*
//! comparison: `a` and `b` are considered equal if
//!
//! ```text
//! |a - b| <= EPSILON * max(1, |a|, |b|)
//! ```
//!
//! so values near zero are compared absolutely and large values relatively. Vectors, matrices
//! and quaternions compare equal when every pair of elements does.
//!
//! Tests use [`assert_approx_eq!`][crate::assert_approx_eq], which defaults to the same scaled
//! comparison and lets the caller pick a different comparison and tolerance:
//!
//! ```
//! # use lina::*;
//! let rotated = Mat2f::from_rotation(std::f32::consts::FRAC_PI_2) * vec2(1.0, 0.0);
//! assert_approx_eq!(rotated, vec2(0.0, 1.0)).abs(1e-6);
//! ```

mod impls;

use std::{fmt, panic::Location};

/// The tolerance used for approximate comparisons.
///
/// This is the machine epsilon of [`f32`] (≈1.19e-7). [`f64`] comparisons use the same value, so
/// that both precisions agree on what "approximately equal" means.
pub const EPSILON: f32 = f32::EPSILON;

/// Approximate equality.
///
/// Floats implement the four comparison strategies below; compound types forward them to their
/// elements and are equal only if every element is.
///
/// Background on comparing floats:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The scalar the tolerance is expressed in ([`f32`] or [`f64`]).
    type Tolerance: Epsilon + Copy;

    /// `|a - b| <= tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// `|a - b| <= tolerance * max(|a|, |b|)`.
    ///
    /// Note that nothing but zero is relatively close to zero unless `tolerance >= 1`.
    fn rel_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// `|a - b| <= tolerance * max(1, |a|, |b|)`.
    fn scaled_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// At most `ulps` representable values lie between `a` and `b`.
    ///
    /// NaN equals nothing. Zeros of either sign are equal, any other values of opposite sign are
    /// not.
    fn ulps_diff_eq(&self, other: &Rhs, ulps: u32) -> bool;

    /// The crate-wide tolerance equality: a scaled comparison with [`EPSILON`].
    ///
    /// ```
    /// # use lina::*;
    /// assert!(0.1f32.approx_eq(&(0.3 - 0.2)));
    /// assert!(1e9f32.approx_eq(&(1e9 + 64.0)));
    /// assert!(!1.0f32.approx_eq(&1.001));
    /// ```
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.scaled_diff_eq(other, Self::Tolerance::EPSILON)
    }
}

/// Scalar types that can serve as an [`ApproxEq::Tolerance`].
pub trait Epsilon {
    /// [`EPSILON`], converted to `Self`.
    const EPSILON: Self;
}

impl Epsilon for f32 {
    const EPSILON: Self = EPSILON;
}

impl Epsilon for f64 {
    const EPSILON: Self = EPSILON as f64;
}

/// Returns whether `a` and `b` are equal within [`EPSILON`], scaled by their magnitude.
///
/// ```
/// # use lina::*;
/// assert!(approx_equals(&vec3(1.0, 2.0, 3.0), &vec3(1.0, 2.0, 3.0000001)));
/// assert!(!approx_equals(&0.0, &1e-3));
/// ```
#[inline]
pub fn approx_equals<T: ApproxEq + ?Sized>(a: &T, b: &T) -> bool {
    a.approx_eq(b)
}

/// Returns whether `a` and `b` are exactly equal.
///
/// ```
/// # use lina::*;
/// assert!(exact_equals(&vec2(1.0, 2.0), &vec2(1.0, 2.0)));
/// assert!(!exact_equals(&0.3, &(0.1 + 0.2)));
/// ```
#[inline]
pub fn exact_equals<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

#[derive(Clone, Copy)]
enum Check<Tol> {
    Abs(Tol),
    Rel(Tol),
    Scaled(Tol),
    Ulps(u32),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Expect {
    Equal,
    NotEqual,
}

/// Pending assertion created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The comparison runs when the value is dropped, at the end of the statement. Until then,
/// [`abs`](Self::abs), [`rel`](Self::rel), [`scaled`](Self::scaled) and [`ulps`](Self::ulps)
/// select which comparisons to run. The operands count as equal if *any* selected comparison
/// says so. With none selected, [`ApproxEq::approx_eq`] decides.
pub struct Asserter<'a, T: ApproxEq + fmt::Debug> {
    left: &'a T,
    right: &'a T,
    expect: Expect,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    checks: Vec<Check<T::Tolerance>>,
}

impl<'a, T: ApproxEq + fmt::Debug> Asserter<'a, T> {
    #[doc(hidden)]
    #[track_caller]
    pub fn equal(left: &'a T, right: &'a T, msg: Option<fmt::Arguments<'a>>) -> Self {
        Self::new(left, right, Expect::Equal, msg)
    }

    #[doc(hidden)]
    #[track_caller]
    pub fn not_equal(left: &'a T, right: &'a T, msg: Option<fmt::Arguments<'a>>) -> Self {
        Self::new(left, right, Expect::NotEqual, msg)
    }

    #[track_caller]
    fn new(left: &'a T, right: &'a T, expect: Expect, msg: Option<fmt::Arguments<'a>>) -> Self {
        Self {
            left,
            right,
            expect,
            location: Location::caller(),
            msg,
            checks: Vec::new(),
        }
    }

    /// Compares the absolute difference against `tolerance`.
    ///
    /// Good for results that should be close to zero, such as the components of rotated unit
    /// vectors.
    pub fn abs(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.checks.push(Check::Abs(tolerance));
        self
    }

    /// Compares the absolute difference against `tolerance` times the larger magnitude.
    pub fn rel(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.checks.push(Check::Rel(tolerance));
        self
    }

    /// Like the default comparison, but with a custom tolerance.
    pub fn scaled(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.checks.push(Check::Scaled(tolerance));
        self
    }

    /// Counts the representable values between the operands.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.checks.push(Check::Ulps(ulps));
        self
    }

    fn operands_equal(&self) -> bool {
        let (l, r) = (self.left, self.right);
        if self.checks.is_empty() {
            return l.approx_eq(r);
        }
        self.checks.iter().any(|&check| match check {
            Check::Abs(tol) => l.abs_diff_eq(r, tol),
            Check::Rel(tol) => l.rel_diff_eq(r, tol),
            Check::Scaled(tol) => l.scaled_diff_eq(r, tol),
            Check::Ulps(ulps) => l.ulps_diff_eq(r, ulps),
        })
    }
}

impl<T: ApproxEq + fmt::Debug> Drop for Asserter<'_, T> {
    // Destructors can't be `#[track_caller]`, hence the stored `location`.
    fn drop(&mut self) {
        let equal = self.operands_equal();
        if equal != (self.expect == Expect::Equal) {
            fail(self.left, self.right, self.expect, self.location, self.msg);
        }
    }
}

fn fail(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    expect: Expect,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match expect {
        Expect::Equal => "==",
        Expect::NotEqual => "!=",
    };
    let msg = msg.map(|args| format!(": {args}")).unwrap_or_default();
    panic!("assertion `left {op} right` failed at {location}{msg}\n  left: {left:?}\n right: {right:?}")
}

/// Like [`assert_eq!`], but compares with [`ApproxEq`].
///
/// Evaluates to an [`Asserter`], which can be told which comparison and tolerance to use before
/// the check runs at the end of the statement.
///
/// ```
/// # use lina::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(vec2(100.0, 0.0), vec2(99.0, 0.001)).scaled(0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::equal(&$lhs, &$rhs, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::equal(
            &$lhs,
            &$rhs,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// The negation of [`assert_approx_eq!`].
///
/// ```
/// # use lina::*;
/// assert_approx_ne!(Quatf::IDENTITY, Quatf::from_rotation_x(0.01));
/// assert_approx_ne!(1.0, 1.0 + 2.0 * f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::not_equal(&$lhs, &$rhs, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::not_equal(
            &$lhs,
            &$rhs,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(0.5, 0.5);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(0.5, 0.6);
    }

    #[test]
    #[should_panic(expected = "determinant mismatch: 3")]
    fn assertion_message() {
        assert_approx_eq!(2.0, 3.0, "determinant mismatch: {}", 3);
    }

    #[test]
    fn default_is_scaled_epsilon() {
        // Near zero, the tolerance is absolute.
        assert!(0.0f32.approx_eq(&1e-7));
        assert!(!0.0f32.approx_eq(&1e-6));
        // For large values, it is relative.
        assert!(1000.0f32.approx_eq(&1000.00006));
        assert!(!1000.0f32.approx_eq(&1000.001));
        assert!(1e20f64.approx_eq(&(1e20 + 1e12)));

        assert_approx_eq!(1000.0, 1000.5).scaled(0.001);
        assert_approx_ne!(1000.0, 1002.0).scaled(0.001);
    }

    #[test]
    fn free_functions() {
        assert!(approx_equals(&1.0f32, &(1.0 + EPSILON)));
        assert!(!exact_equals(&1.0f32, &(1.0 + EPSILON)));
        assert!(exact_equals(&[1, 2, 3], &[1, 2, 3]));
        assert!(approx_equals(&[1.0f64, 2.0][..], &[1.0, 2.0000000001][..]));
    }

    #[test]
    fn any_selected_check_suffices() {
        // Fails the absolute check, passes the relative one.
        assert_approx_eq!(1e6, 1e6 + 1.0).abs(0.5).rel(1e-5);
        assert_approx_ne!(1e6, 1e6 + 1.0).abs(0.5).ulps(2);
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
        assert_approx_ne!(0.0, 0.00001).rel(0.5);
    }

    #[test]
    fn ulps() {
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON).ulps(1);
        assert_approx_ne!(1.0, 1.0 + f32::EPSILON).ulps(0);
        assert_approx_eq!(0.0, -0.0).ulps(0);
        assert_approx_ne!(f32::MIN_POSITIVE, -f32::MIN_POSITIVE).ulps(u32::MAX);
    }

    #[test]
    fn opposite_signs() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).abs(0.0);
        assert_approx_eq!(-1.0, -1.0).rel(0.0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(0.0);
        assert_approx_ne!(f32::NAN, f32::NAN).rel(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).scaled(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).ulps(100);
        assert_approx_ne!(f32::NAN, 0.0).abs(1.0);
        assert!(!approx_equals(&f64::NAN, &f64::NAN));
    }

    #[test]
    fn infinities() {
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).scaled(0.0);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY).scaled(1.0);
        assert_approx_ne!(f64::INFINITY, f64::MAX).scaled(10000.0);
        assert_approx_eq!(f64::MAX, f64::INFINITY).ulps(1);
    }
}
