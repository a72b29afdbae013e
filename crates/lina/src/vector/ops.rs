//! Operator implementations.
//!
//! Addition and subtraction work element-wise. Multiplication and division are available both
//! element-wise (`Vector * Vector`) and with a scalar right-hand side (`Vector * T`).

use std::{
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
    slice::SliceIndex,
};

use crate::approx::ApproxEq;

use super::Vector;

/// Indexing with a `usize` yields a single element, indexing with a range yields a slice.
impl<T, I, const N: usize> Index<I> for Vector<T, N>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, I, const N: usize> IndexMut<I> for Vector<T, N>
where
    I: SliceIndex<[T]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N> {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T, N> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.0 == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for [T; N] {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U]> for Vector<T, N> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for Vector<T, N> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, tolerance)
    }

    fn scaled_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.0.scaled_diff_eq(&other.0, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, tolerance)
    }
}

/// Element-wise negation.
impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! elementwise {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident;)+) => {
        $(
            impl<T: $op + Copy, const N: usize> $op for Vector<T, N> {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $method(self, rhs: Self) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l.$method(r))
                }
            }

            impl<T: $assign, const N: usize> $assign for Vector<T, N> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    for (l, r) in self.0.iter_mut().zip(rhs.0) {
                        l.$assign_method(r);
                    }
                }
            }
        )+
    };
}

elementwise! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

// Having both `Vector * Vector` and `Vector * T` rules out a blanket `Mul<U> where T: Mul<U>`.
macro_rules! scalar {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident;)+) => {
        $(
            impl<T: $op + Copy, const N: usize> $op<T> for Vector<T, N> {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|l| l.$method(rhs))
                }
            }

            impl<T: $assign + Copy, const N: usize> $assign<T> for Vector<T, N> {
                #[inline]
                fn $assign_method(&mut self, rhs: T) {
                    for l in &mut self.0 {
                        l.$assign_method(rhs);
                    }
                }
            }
        )+
    };
}

scalar! {
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}
