use std::{
    fmt,
    ops::{Index, IndexMut, Neg},
};

use itertools::Itertools;

use crate::{approx::ApproxEq, Error, Float, Number, Result, Vector, Zero};

/// A vector whose length is only known at runtime.
///
/// # Examples
///
/// ```
/// # use lina::*;
/// let a = SlowVector::from(vec![1.0, 2.0, 3.0]);
/// let b = SlowVector::from(vec![4.0, 5.0, 6.0]);
/// assert_eq!(a.dot(&b)?, 32.0);
///
/// let c = SlowVector::from(vec![1.0, 2.0]);
/// assert_eq!(a.try_add(&c), Err(Error::VectorSize { expected: 3, found: 2 }));
/// # Ok::<_, Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SlowVector<T> {
    elems: Vec<T>,
}

impl<T> SlowVector<T> {
    pub fn new(elems: Vec<T>) -> Self {
        Self { elems }
    }

    /// Creates a vector of length `len` with every element set to zero.
    pub fn zeros(len: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self::new(vec![T::ZERO; len])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elems.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elems
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }

    pub(crate) fn check_len(&self, other: &Self) -> Result<()> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(Error::VectorSize {
                expected: self.len(),
                found: other.len(),
            })
        }
    }

    fn try_zip_with<U>(
        &self,
        other: &Self,
        mut f: impl FnMut(&T, &T) -> U,
    ) -> Result<SlowVector<U>> {
        self.check_len(other)?;
        Ok(SlowVector::new(
            self.iter().zip_eq(other.iter()).map(|(a, b)| f(a, b)).collect(),
        ))
    }
}

impl<T: Number> SlowVector<T> {
    /// Adds `other` to `self` element-wise.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.try_zip_with(other, |&a, &b| a + b)
    }

    /// Subtracts `other` from `self` element-wise.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.try_zip_with(other, |&a, &b| a - b)
    }

    /// Multiplies `self` and `other` element-wise.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.try_zip_with(other, |&a, &b| a * b)
    }

    /// Divides `self` by `other` element-wise.
    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.try_zip_with(other, |&a, &b| a / b)
    }

    /// Multiplies every element by `factor`.
    pub fn scale(&self, factor: T) -> Self {
        Self::new(self.iter().map(|&a| a * factor).collect())
    }

    /// Computes the dot product of `self` and `other`.
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_len(other)?;
        Ok(self
            .iter()
            .zip_eq(other.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b))
    }

    pub fn length2(&self) -> T {
        self.iter().fold(T::ZERO, |acc, &a| acc + a * a)
    }
}

impl<T: Float> SlowVector<T> {
    pub fn length(&self) -> T {
        self.length2().sqrt()
    }

    /// Returns a vector pointing in the same direction with length one.
    ///
    /// The zero vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length == T::ZERO {
            self.clone()
        } else {
            self.scale(T::ONE / length)
        }
    }
}

impl<T: Number> Neg for SlowVector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.elems.into_iter().map(|a| -a).collect())
    }
}

impl<T> Index<usize> for SlowVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elems[index]
    }
}

impl<T> IndexMut<usize> for SlowVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elems[index]
    }
}

impl<T> From<Vec<T>> for SlowVector<T> {
    fn from(elems: Vec<T>) -> Self {
        Self::new(elems)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for SlowVector<T> {
    fn from(v: Vector<T, N>) -> Self {
        Self::new(v.into_array().into())
    }
}

impl<T, const N: usize> TryFrom<SlowVector<T>> for Vector<T, N> {
    type Error = Error;

    fn try_from(v: SlowVector<T>) -> Result<Self> {
        let found = v.len();
        let array: [T; N] = v
            .into_vec()
            .try_into()
            .map_err(|_| Error::VectorSize { expected: N, found })?;
        Ok(array.into())
    }
}

/// Vectors of different lengths never compare equal.
impl<T: ApproxEq> ApproxEq for SlowVector<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), tolerance)
    }

    fn scaled_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.as_slice().scaled_diff_eq(other.as_slice(), tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, tolerance: u32) -> bool {
        self.as_slice().ulps_diff_eq(other.as_slice(), tolerance)
    }
}

impl<T: fmt::Debug> fmt::Debug for SlowVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SlowVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().format(", "))
    }
}
