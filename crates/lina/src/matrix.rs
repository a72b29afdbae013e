use std::{array, fmt};

use itertools::Itertools;

use crate::{error::Result, Float, Number, One, Vector, Zero};

mod mat2;
mod mat3;
mod mat4;
mod ops;
mod projection;

pub use projection::FieldOfView;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A matrix with `R` rows and `C` columns, stored column by column.
///
/// The memory layout is `C` arrays of `R` elements each, with no padding, which is what graphics
/// APIs expect for uniform data. A `Mat4f` can be uploaded with [`bytemuck::bytes_of`] directly.
///
/// Elements are addressed as `m[(row, col)]`, regardless of the storage order:
///
/// ```
/// # use lina::*;
/// let mut m = Mat2f::IDENTITY;
/// m[(0, 1)] = 5.0;
/// assert_eq!(m.row(0), [1.0, 5.0]);
/// assert_eq!(m.column(1), [5.0, 1.0]);
/// assert_eq!(m.as_slice(), &[1.0, 0.0, 5.0, 1.0]);
/// ```
///
/// Out-of-range indices panic. Use [`Matrix::get`] for a checked lookup.
///
/// Matrices are built with [`Matrix::from_rows`], [`Matrix::from_columns`] or
/// [`Matrix::from_fn`], or with one of the transform builders on [`Mat2`], [`Mat3`] and [`Mat4`]
/// (`from_rotation`, `from_scaling`, `from_translation`, [`Matrix::perspective`], ...).
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

/// Operations shared by the square matrix types ([`Mat2`], [`Mat3`] and [`Mat4`]).
///
/// Each dimension implements these with closed-form cofactor formulas.
pub trait SquareMatrix: Sized {
    /// The element type.
    type Elem;

    /// Returns the identity matrix.
    fn identity() -> Self;

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    fn determinant(&self) -> Self::Elem;

    /// Returns the adjugate of the matrix (the transpose of its cofactor matrix).
    #[doc(alias = "adjugate")]
    fn adjoint(&self) -> Self;

    /// Computes the inverse of the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`][crate::Error::SingularMatrix] if the determinant is
    /// exactly zero. Matrices that are merely close to singular are still inverted.
    fn invert(&self) -> Result<Self>;

    /// Replaces `self` with its inverse.
    ///
    /// On error, `self` is left unchanged.
    fn invert_in_place(&mut self) -> Result<()> {
        *self = self.invert()?;
        Ok(())
    }

    /// Resets `self` to the identity matrix.
    fn set_identity(&mut self) {
        *self = Self::identity();
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The all-zero matrix.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Ones on the main diagonal, zeros elsewhere.
    ///
    /// For non-square matrices, the diagonal stops at the smaller dimension.
    pub const IDENTITY: Self = {
        let mut columns = [[T::ZERO; R]; C];
        let mut i = 0;
        while i < R && i < C {
            columns[i][i] = T::ONE;
            i += 1;
        }
        Self(columns)
    };
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix from `R` rows of `C` elements each.
    ///
    /// This reads the same way the matrix is written on paper:
    ///
    /// ```
    /// # use lina::*;
    /// let shear = Mat2f::from_rows([
    ///     [1.0, 0.5],
    ///     [0.0, 1.0],
    /// ]);
    /// assert_eq!(shear * vec2(0.0, 2.0), vec2(1.0, 2.0));
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Matrix::<T, C, R>::from_columns(rows).transpose()
    }

    /// Builds a matrix from `C` columns of `R` elements each, matching the storage order.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Builds a matrix by calling `cb(row, col)` for every element.
    ///
    /// ```
    /// # use lina::*;
    /// let checkerboard = Matrix::<u8, 2, 3>::from_fn(|row, col| ((row + col) % 2) as u8);
    /// assert_eq!(checkerboard.row(0), [0, 1, 0]);
    /// assert_eq!(checkerboard.row(1), [1, 0, 1]);
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies `f` to every element.
    pub fn map<U, F>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Combines `self` and `other` element by element.
    pub(crate) fn zip_with<U, V, F>(self, other: Matrix<U, R, C>, mut f: F) -> Matrix<V, R, C>
    where
        U: Copy,
        V: Copy,
        F: FnMut(T, U) -> V,
    {
        Matrix::from_fn(|row, col| f(self[(row, col)], other[(row, col)]))
    }

    /// Returns column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= C`.
    pub fn column(&self, col: usize) -> Vector<T, R> {
        self.0[col].into()
    }

    /// Overwrites column `col`.
    pub fn set_column<U: Into<Vector<T, R>>>(&mut self, col: usize, column: U) {
        self.0[col] = column.into().into_array();
    }

    /// Returns row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    pub fn row(&self, row: usize) -> Vector<T, C> {
        Vector::from_fn(|col| self.0[col][row])
    }

    /// Consumes the matrix, returning its columns.
    pub fn into_columns(self) -> [[T; R]; C] {
        self.0
    }

    /// Returns all elements, column after column.
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the transposed matrix, turning rows into columns.
    ///
    /// ```
    /// # use lina::*;
    /// let wide = Matrix::from_rows([[1, 2, 3]]);
    /// let tall = wide.transpose();
    /// assert_eq!(tall.column(0), [1, 2, 3]);
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        Matrix::from_fn(|row, col| self.0[row][col])
    }

    /// Returns the element at `(row, col)`, or [`None`] when either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col)?.get(row)
    }

    /// Mutable version of [`Matrix::get`].
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col)?.get_mut(row)
    }

    /// Copies `self` into the top-left corner of a matrix of a different size.
    ///
    /// Rows and columns that do not fit are dropped. New elements are zero.
    ///
    /// ```
    /// # use lina::*;
    /// let m4 = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
    /// let m3: Mat3f = m4.resize();
    /// assert_eq!(m3, Mat3f::IDENTITY);
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Zero,
    {
        Matrix::from_fn(|row, col| self.get(row, col).copied().unwrap_or(T::ZERO))
    }

    /// Returns `self + other * scale`.
    pub fn multiply_scalar_and_add(self, other: Self, scale: T) -> Self
    where
        T: Number,
    {
        self + other * scale
    }

    /// Returns the Frobenius norm: the square root of the sum of all squared elements.
    #[doc(alias = "frobenius_norm")]
    pub fn frob(&self) -> T
    where
        T: Float,
    {
        self.as_slice()
            .iter()
            .fold(T::ZERO, |acc, &elem| acc + elem * elem)
            .sqrt()
    }
}

impl<T: Copy, const N: usize> Matrix<T, N, N> {
    /// Returns the elements on the main diagonal.
    pub fn into_diagonal(self) -> Vector<T, N> {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Builds a diagonal matrix, for example a non-uniform scaling.
    ///
    /// ```
    /// # use lina::*;
    /// let scale = Mat3f::from_diagonal([2.0, 3.0, 1.0]);
    /// assert_eq!(scale * vec3(1.0, 1.0, 1.0), vec3(2.0, 3.0, 1.0));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the sum of the diagonal elements.
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }

    /// Transposes a square matrix without making a copy.
    pub fn transpose_mut(&mut self) {
        for col in 1..N {
            for row in 0..col {
                let upper = self.0[col][row];
                self.0[col][row] = self.0[row][col];
                self.0[row][col] = upper;
            }
        }
    }
}

impl<T: Default + Copy, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

/// Lists the rows, so the output reads like the matrix on paper.
impl<T: fmt::Debug + Copy, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..R).map(|row| self.row(row).into_array()))
            .finish()
    }
}

/// Writes the elements in storage order, eg. `mat2(1, 0, 0, 1)`.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if R == C {
            write!(f, "mat{R}(")?;
        } else {
            write!(f, "mat{R}x{C}(")?;
        }
        write!(f, "{})", self.0.iter().flatten().format(", "))
    }
}
