use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{approx::ApproxEq, traits::Number, Matrix, Vector};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T: ApproxEq, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: T::Tolerance) -> bool {
        self.0.as_flattened().abs_diff_eq(other.0.as_flattened(), tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: T::Tolerance) -> bool {
        self.0.as_flattened().rel_diff_eq(other.0.as_flattened(), tolerance)
    }

    fn scaled_diff_eq(&self, other: &Self, tolerance: T::Tolerance) -> bool {
        self.0.as_flattened().scaled_diff_eq(other.0.as_flattened(), tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps: u32) -> bool {
        self.0.as_flattened().ulps_diff_eq(other.0.as_flattened(), ulps)
    }
}

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Matrix, storing the product in `self`.
impl<T, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = *self * rhs;
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize> Add for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize> AddAssign for Matrix<T, R, C>
where
    T: Number,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize> Sub for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize> SubAssign for Matrix<T, R, C>
where
    T: Number,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}
