use crate::{
    error::{Error, Result},
    Float, Mat2, Matrix, Number, SquareMatrix, Vec2,
};

impl<T: Number> SquareMatrix for Mat2<T> {
    type Elem = T;

    fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    fn adjoint(&self) -> Self {
        let [[a, c], [b, d]] = self.0;
        Matrix::from_columns([[d, -c], [-b, a]])
    }

    /// Inverts this 2x2 matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let m = Mat2f::from_diagonal([2.0, 2.0]);
    /// assert_eq!(m.invert()?, Mat2f::from_diagonal([0.5, 0.5]));
    /// assert_eq!(Mat2f::ZERO.invert(), Err(Error::SingularMatrix));
    /// # Ok::<_, Error>(())
    /// ```
    fn invert(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return Err(Error::SingularMatrix);
        }

        Ok(self.adjoint() * (T::ONE / det))
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Creates a matrix that scales by the components of `v`.
    pub fn from_scaling(v: Vec2<T>) -> Self {
        Self::from_diagonal(v)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// use std::f32::consts::PI;
    ///
    /// let rot = Mat2f::from_rotation(PI / 2.0);
    /// assert_approx_eq!(rot * Vec2f::X, Vec2f::Y);
    /// ```
    pub fn from_rotation(radians: T) -> Self
    where
        T: Float,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([[cos, sin], [-sin, cos]])
    }

    /// Applies a counterclockwise rotation after the transform described by `self`.
    ///
    /// This is equivalent to `self * Mat2::from_rotation(radians)`.
    pub fn rotate(self, radians: T) -> Self
    where
        T: Float,
    {
        self * Self::from_rotation(radians)
    }

    /// Scales the columns of `self` by the components of `v`.
    ///
    /// This is equivalent to `self * Mat2::from_scaling(v)`.
    pub fn scale(self, v: Vec2<T>) -> Self {
        Self::from_columns([self.column(0) * v.x, self.column(1) * v.y])
    }
}
