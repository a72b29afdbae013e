//! Element type traits.
//!
//! [`Vector`][crate::Vector], [`Matrix`][crate::Matrix] and the quaternion types are generic over
//! their element type. Ring arithmetic only needs [`Number`]; anything that normalizes, takes
//! square roots or evaluates trigonometric functions needs [`Float`].

use std::{fmt, ops};

use crate::approx::ApproxEq;

/// Trigonometry on angles in radians.
pub trait Trig: Sized {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Four-quadrant arctangent of `self / other`.
    fn atan2(self, other: Self) -> Self;
    /// Returns `(sin, cos)`.
    fn sin_cos(self) -> (Self, Self);
}

pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Minimum and maximum without requiring [`Ord`].
///
/// Floats follow [`f32::min`]: if one operand is NaN, the other one is returned.
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point element types.
///
/// Implemented for [`f32`] and [`f64`]. Operations that normalize, interpolate along arcs or
/// build rotation and projection matrices require this trait.
pub trait Float:
    Number + Trig + Sqrt + MinMax + PartialOrd + ApproxEq<Tolerance = Self> + fmt::Debug
{
    /// Archimedes' constant (π).
    const PI: Self;

    /// The tolerance used by [`ApproxEq::approx_eq`] and by the degenerate-case checks of this
    /// crate.
    ///
    /// This is [`crate::EPSILON`] for both [`f32`] and [`f64`].
    const EPSILON: Self;

    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn powf(self, n: Self) -> Self;

    /// Converts an [`f64`] to `Self`, rounding if necessary.
    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;

    /// Returns `1 / 2`.
    #[inline]
    fn half() -> Self {
        Self::ONE / Self::two()
    }

    /// Returns `2`.
    #[inline]
    fn two() -> Self {
        Self::ONE + Self::ONE
    }
}

/// Implements trait methods by calling the inherent float method of the same name.
macro_rules! forward {
    ($($name:ident($($arg:ident),*)),+ $(,)?) => {
        $(
            #[inline]
            fn $name(self $(, $arg: Self)*) -> Self {
                Self::$name(self $(, $arg)*)
            }
        )+
    };
}

macro_rules! float_impls {
    ($($ty:ident),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            impl MinMax for $ty {
                forward!(min(other), max(other));
            }

            impl Sqrt for $ty {
                forward!(sqrt());
            }

            impl Trig for $ty {
                forward!(sin(), cos(), tan(), asin(), acos(), atan(), atan2(other));

                #[inline]
                fn sin_cos(self) -> (Self, Self) {
                    Self::sin_cos(self)
                }
            }

            impl Float for $ty {
                const PI: Self = std::$ty::consts::PI;
                const EPSILON: Self = crate::EPSILON as $ty;

                forward!(abs(), floor(), ceil(), round(), exp(), ln(), powf(n));

                fn from_f64(v: f64) -> Self {
                    v as $ty
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}
float_impls!(f32, f64);
