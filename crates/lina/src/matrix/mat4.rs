use crate::{
    error::{Error, Result},
    vec3, DualQuat, Float, Mat3, Mat4, Matrix, Number, Quat, SquareMatrix, Vec3,
};

impl<T: Number> SquareMatrix for Mat4<T> {
    type Elem = T;

    fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the determinant, computed from the 2x2 sub-determinants of the upper and lower
    /// halves of the matrix.
    fn determinant(&self) -> T {
        let SubDeterminants { b, .. } = SubDeterminants::new(self);
        b[0] * b[11] - b[1] * b[10] + b[2] * b[9] + b[3] * b[8] - b[4] * b[7] + b[5] * b[6]
    }

    fn adjoint(&self) -> Self {
        SubDeterminants::new(self).adjoint()
    }

    /// Inverts this 4x4 matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let m = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
    /// let inv = m.invert()?;
    /// assert_eq!(inv, Mat4f::from_translation(vec3(-1.0, -2.0, -3.0)));
    /// # Ok::<_, Error>(())
    /// ```
    fn invert(&self) -> Result<Self> {
        let sub = SubDeterminants::new(self);
        let b = sub.b;
        let det = b[0] * b[11] - b[1] * b[10] + b[2] * b[9] + b[3] * b[8] - b[4] * b[7]
            + b[5] * b[6];
        if det == T::ZERO {
            return Err(Error::SingularMatrix);
        }

        Ok(sub.adjoint() * (T::ONE / det))
    }
}

/// The twelve 2x2 sub-determinants of the first two and last two columns of a 4x4 matrix, which
/// the determinant and adjugate are built from.
struct SubDeterminants<T> {
    a: [[T; 4]; 4],
    b: [T; 12],
}

impl<T: Number> SubDeterminants<T> {
    fn new(m: &Mat4<T>) -> Self {
        let a = m.0;
        let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] =
            a;

        let b = [
            a00 * a11 - a01 * a10,
            a00 * a12 - a02 * a10,
            a00 * a13 - a03 * a10,
            a01 * a12 - a02 * a11,
            a01 * a13 - a03 * a11,
            a02 * a13 - a03 * a12,
            a20 * a31 - a21 * a30,
            a20 * a32 - a22 * a30,
            a20 * a33 - a23 * a30,
            a21 * a32 - a22 * a31,
            a21 * a33 - a23 * a31,
            a22 * a33 - a23 * a32,
        ];
        Self { a, b }
    }

    fn adjoint(&self) -> Mat4<T> {
        let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] =
            self.a;
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.b;

        Matrix::from_columns([
            [
                a11 * b11 - a12 * b10 + a13 * b09,
                a02 * b10 - a01 * b11 - a03 * b09,
                a31 * b05 - a32 * b04 + a33 * b03,
                a22 * b04 - a21 * b05 - a23 * b03,
            ],
            [
                a12 * b08 - a10 * b11 - a13 * b07,
                a00 * b11 - a02 * b08 + a03 * b07,
                a32 * b02 - a30 * b05 - a33 * b01,
                a20 * b05 - a22 * b02 + a23 * b01,
            ],
            [
                a10 * b10 - a11 * b08 + a13 * b06,
                a01 * b08 - a00 * b10 - a03 * b06,
                a30 * b04 - a31 * b02 + a33 * b00,
                a21 * b02 - a20 * b04 - a23 * b00,
            ],
            [
                a11 * b07 - a10 * b09 - a12 * b06,
                a00 * b09 - a01 * b07 + a02 * b06,
                a31 * b01 - a30 * b03 - a32 * b00,
                a20 * b03 - a21 * b01 + a22 * b00,
            ],
        ])
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Creates a 3D scaling matrix.
    pub fn from_scaling(v: Vec3<T>) -> Self {
        Self::from_diagonal(v.extend(T::ONE))
    }

    /// Creates a 3D translation matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let m = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
    /// ```
    pub fn from_translation(v: Vec3<T>) -> Self {
        let mut m = Self::IDENTITY;
        m.set_column(3, v.extend(T::ONE));
        m
    }

    /// Creates a rotation matrix from a unit quaternion.
    pub fn from_quat(q: Quat<T>) -> Self {
        let mut m: Self = Mat3::from_quat(q).resize();
        m[(3, 3)] = T::ONE;
        m
    }

    /// Creates a matrix that rotates by `q` and then translates by `v`.
    ///
    /// This is equivalent to `Mat4::from_translation(v) * Mat4::from_quat(q)`.
    pub fn from_rotation_translation(q: Quat<T>, v: Vec3<T>) -> Self {
        let mut m = Self::from_quat(q);
        m.set_column(3, v.extend(T::ONE));
        m
    }

    /// Creates a matrix that scales by `s`, rotates by `q`, and then translates by `v`.
    ///
    /// This is equivalent to
    /// `Mat4::from_translation(v) * Mat4::from_quat(q) * Mat4::from_scaling(s)`.
    pub fn from_rotation_translation_scale(q: Quat<T>, v: Vec3<T>, s: Vec3<T>) -> Self {
        Self::from_rotation_translation(q, v).scale(s)
    }

    /// Like [`Matrix::from_rotation_translation_scale`], but scales and rotates around the
    /// pivot point `origin` instead of the coordinate origin.
    ///
    /// This is equivalent to
    /// `T(v) * T(origin) * R(q) * S(s) * T(-origin)`.
    pub fn from_rotation_translation_scale_origin(
        q: Quat<T>,
        v: Vec3<T>,
        s: Vec3<T>,
        origin: Vec3<T>,
    ) -> Self {
        let rs = Mat3::from_quat(q).scale3(s);
        let mut m: Self = rs.resize();
        m.set_column(3, (v + origin - rs * origin).extend(T::ONE));
        m
    }

    /// Creates a matrix from a dual quaternion describing a rigid transform.
    ///
    /// The real part of `dq` does not need to be normalized.
    pub fn from_dual_quat(dq: DualQuat<T>) -> Self {
        let real = dq.real();
        let two = T::ONE + T::ONE;
        let mut t = (dq.dual() * real.conjugate()).xyz() * two;
        let length2 = real.length2();
        if length2 != T::ZERO {
            t = t / length2;
        }
        Self::from_rotation_translation(real, t)
    }

    /// Applies a translation after the transform described by `self`.
    ///
    /// This is equivalent to `self * Mat4::from_translation(v)`.
    pub fn translate(self, v: Vec3<T>) -> Self {
        let mut m = self;
        m.set_column(
            3,
            self.column(0) * v.x + self.column(1) * v.y + self.column(2) * v.z + self.column(3),
        );
        m
    }

    /// Applies a scaling after the transform described by `self`.
    ///
    /// This is equivalent to `self * Mat4::from_scaling(v)`.
    pub fn scale(self, v: Vec3<T>) -> Self {
        let mut m = self;
        m.set_column(0, self.column(0) * v.x);
        m.set_column(1, self.column(1) * v.y);
        m.set_column(2, self.column(2) * v.z);
        m
    }

    /// Returns the translation component of an affine transform (the XYZ part of the last
    /// column).
    pub fn translation(&self) -> Vec3<T> {
        self.column(3).truncate()
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Scales the columns of a 3D linear transform.
    fn scale3(self, v: Vec3<T>) -> Self {
        Self::from_columns([
            self.column(0) * v.x,
            self.column(1) * v.y,
            self.column(2) * v.z,
        ])
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Creates a matrix that rotates by `radians` around `axis`.
    ///
    /// `axis` does not need to be normalized. Returns [`None`] if `axis` has (almost) zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// use std::f32::consts::PI;
    ///
    /// let m = Mat4f::from_rotation(vec3(0.0, 0.0, 2.0), PI / 2.0).unwrap();
    /// assert_approx_eq!(m, Mat4f::from_z_rotation(PI / 2.0));
    /// assert!(Mat4f::from_rotation(Vec3f::ZERO, 1.0).is_none());
    /// ```
    pub fn from_rotation(axis: Vec3<T>, radians: T) -> Option<Self> {
        let length = axis.length();
        if length < T::EPSILON {
            return None;
        }
        let [x, y, z] = (axis / length).into_array();
        let (s, c) = radians.sin_cos();
        let t = T::ONE - c;
        let o = T::ZERO;

        #[rustfmt::skip]
        let m = Self::from_columns([
            [x * x * t + c, y * x * t + z * s, z * x * t - y * s, o],
            [x * y * t - z * s, y * y * t + c, z * y * t + x * s, o],
            [x * z * t + y * s, y * z * t - x * s, z * z * t + c, o],
            [o, o, o, T::ONE],
        ]);
        Some(m)
    }

    /// Creates a matrix that rotates by `radians` around the X axis.
    pub fn from_x_rotation(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let m = Self::from_columns([
            [l, o, o, o],
            [o, c, s, o],
            [o, -s, c, o],
            [o, o, o, l],
        ]);
        m
    }

    /// Creates a matrix that rotates by `radians` around the Y axis.
    pub fn from_y_rotation(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let m = Self::from_columns([
            [c, o, -s, o],
            [o, l, o, o],
            [s, o, c, o],
            [o, o, o, l],
        ]);
        m
    }

    /// Creates a matrix that rotates by `radians` around the Z axis.
    pub fn from_z_rotation(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let m = Self::from_columns([
            [c, s, o, o],
            [-s, c, o, o],
            [o, o, l, o],
            [o, o, o, l],
        ]);
        m
    }

    /// Applies a rotation around `axis` after the transform described by `self`.
    ///
    /// Returns [`None`] if `axis` has (almost) zero length.
    pub fn rotate(self, axis: Vec3<T>, radians: T) -> Option<Self> {
        Some(self * Self::from_rotation(axis, radians)?)
    }

    /// Applies a rotation around the X axis after the transform described by `self`.
    pub fn rotate_x(self, radians: T) -> Self {
        self * Self::from_x_rotation(radians)
    }

    /// Applies a rotation around the Y axis after the transform described by `self`.
    pub fn rotate_y(self, radians: T) -> Self {
        self * Self::from_y_rotation(radians)
    }

    /// Applies a rotation around the Z axis after the transform described by `self`.
    pub fn rotate_z(self, radians: T) -> Self {
        self * Self::from_z_rotation(radians)
    }

    /// Returns the scaling factors of a transform matrix (the lengths of its first three
    /// columns).
    ///
    /// Shear is not detected; the result is only meaningful for matrices composed of translation,
    /// rotation and scaling.
    pub fn scaling(&self) -> Vec3<T> {
        vec3(
            self.column(0).truncate().length(),
            self.column(1).truncate().length(),
            self.column(2).truncate().length(),
        )
    }

    /// Returns the rotation of a transform matrix as a unit quaternion.
    ///
    /// The scaling returned by [`Matrix::scaling`] is removed from the basis vectors before
    /// converting them.
    pub fn rotation(&self) -> Quat<T> {
        let s = self.scaling().inverse();
        Quat::from_mat3(Mat3::from_mat4(*self).scale3(s))
    }

    /// Decomposes a transform matrix into its translation, rotation and scaling.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let q = Quatf::from_rotation_y(1.0);
    /// let m = Mat4f::from_rotation_translation_scale(q, vec3(1.0, 2.0, 3.0), vec3(2.0, 2.0, 2.0));
    /// let (translation, rotation, scaling) = m.decompose();
    /// assert_approx_eq!(translation, vec3(1.0, 2.0, 3.0));
    /// assert_approx_eq!(rotation, q).abs(1e-6);
    /// assert_approx_eq!(scaling, vec3(2.0, 2.0, 2.0)).abs(1e-6);
    /// ```
    pub fn decompose(&self) -> (Vec3<T>, Quat<T>, Vec3<T>) {
        (self.translation(), self.rotation(), self.scaling())
    }
}

impl<T: Float> Quat<T> {
    /// Converts this unit quaternion to a 4x4 rotation matrix.
    pub fn to_mat4(self) -> Mat4<T> {
        Mat4::from_quat(self)
    }
}
