use crate::{
    error::{Error, Result},
    Float, Mat3, Mat4, Matrix, Number, Quat, SquareMatrix, Vec2,
};

impl<T: Number> SquareMatrix for Mat3<T> {
    type Elem = T;

    fn identity() -> Self {
        Self::IDENTITY
    }

    fn determinant(&self) -> T {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.0;
        a00 * (a22 * a11 - a12 * a21)
            + a01 * (-(a22 * a10) + a12 * a20)
            + a02 * (a21 * a10 - a11 * a20)
    }

    fn adjoint(&self) -> Self {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.0;

        #[rustfmt::skip]
        let adj = Matrix::from_columns([
            [a11 * a22 - a12 * a21, a02 * a21 - a01 * a22, a01 * a12 - a02 * a11],
            [a12 * a20 - a10 * a22, a00 * a22 - a02 * a20, a02 * a10 - a00 * a12],
            [a10 * a21 - a11 * a20, a01 * a20 - a00 * a21, a00 * a11 - a01 * a10],
        ]);
        adj
    }

    fn invert(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return Err(Error::SingularMatrix);
        }

        Ok(self.adjoint() * (T::ONE / det))
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Creates a 2D scaling matrix (in homogeneous coordinates).
    pub fn from_scaling(v: Vec2<T>) -> Self {
        Self::from_diagonal([v.x, v.y, T::ONE])
    }

    /// Creates a 2D translation matrix (in homogeneous coordinates).
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let m = Mat3f::from_translation(vec2(1.0, 2.0));
    /// assert_eq!(m * vec3(0.0, 0.0, 1.0), vec3(1.0, 2.0, 1.0));
    /// ```
    pub fn from_translation(v: Vec2<T>) -> Self {
        let mut m = Self::IDENTITY;
        m.set_column(2, v.extend(T::ONE));
        m
    }

    /// Creates a 2D rotation matrix (in homogeneous coordinates) for a counterclockwise rotation
    /// around the Z axis.
    pub fn from_rotation(radians: T) -> Self
    where
        T: Float,
    {
        let (s, c) = radians.sin_cos();

        #[rustfmt::skip]
        let m = Self::from_columns([
            [c, s, T::ZERO],
            [-s, c, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ]);
        m
    }

    /// Creates a rotation matrix from a unit quaternion.
    pub fn from_quat(q: Quat<T>) -> Self {
        let two = T::ONE + T::ONE;
        let (x2, y2, z2) = (q.x * two, q.y * two, q.z * two);
        let xx = q.x * x2;
        let yx = q.y * x2;
        let yy = q.y * y2;
        let zx = q.z * x2;
        let zy = q.z * y2;
        let zz = q.z * z2;
        let wx = q.w * x2;
        let wy = q.w * y2;
        let wz = q.w * z2;

        #[rustfmt::skip]
        let m = Self::from_columns([
            [T::ONE - yy - zz, yx + wz, zx - wy],
            [yx - wz, T::ONE - xx - zz, zy + wx],
            [zx + wy, zy - wx, T::ONE - xx - yy],
        ]);
        m
    }

    /// Returns the upper-left 3x3 part of a 4x4 matrix.
    pub fn from_mat4(m: Mat4<T>) -> Self {
        m.resize()
    }

    /// Computes the *normal matrix* of a 4x4 transform: the transpose of the inverse of its
    /// upper-left 3x3 part.
    ///
    /// Transforming surface normals with this matrix keeps them perpendicular to the transformed
    /// surface, even if the transform scales non-uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if `m` is not invertible.
    pub fn normal_from_mat4(m: Mat4<T>) -> Result<Self> {
        Ok(Self::from_mat4(m.invert()?).transpose())
    }

    /// Creates a 2D projection matrix that maps pixel coordinates in a `width` by `height` area
    /// (with the origin in the top left corner and Y pointing down) to clip space.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let m = Mat3f::projection(200.0, 100.0);
    /// assert_eq!(vec2(0.0, 0.0).transform_mat3(m), vec2(-1.0, 1.0));
    /// assert_eq!(vec2(200.0, 100.0).transform_mat3(m), vec2(1.0, -1.0));
    /// ```
    pub fn projection(width: T, height: T) -> Self {
        let two = T::ONE + T::ONE;

        #[rustfmt::skip]
        let m = Self::from_columns([
            [two / width, T::ZERO, T::ZERO],
            [T::ZERO, -two / height, T::ZERO],
            [-T::ONE, T::ONE, T::ONE],
        ]);
        m
    }

    /// Applies a 2D translation after the transform described by `self`.
    ///
    /// This is equivalent to `self * Mat3::from_translation(v)`.
    pub fn translate(self, v: Vec2<T>) -> Self {
        let mut m = self;
        m.set_column(
            2,
            self.column(0) * v.x + self.column(1) * v.y + self.column(2),
        );
        m
    }

    /// Applies a 2D rotation after the transform described by `self`.
    ///
    /// This is equivalent to `self * Mat3::from_rotation(radians)`.
    pub fn rotate(self, radians: T) -> Self
    where
        T: Float,
    {
        self * Self::from_rotation(radians)
    }

    /// Applies a 2D scaling after the transform described by `self`.
    ///
    /// This is equivalent to `self * Mat3::from_scaling(v)`.
    pub fn scale(self, v: Vec2<T>) -> Self {
        let mut m = self;
        m.set_column(0, self.column(0) * v.x);
        m.set_column(1, self.column(1) * v.y);
        m
    }
}

impl<T: Float> Quat<T> {
    /// Converts this unit quaternion to a 3x3 rotation matrix.
    pub fn to_mat3(self) -> Mat3<T> {
        Mat3::from_quat(self)
    }
}
