mod ops;

use crate::{vec4, Float, Mat3, Number, One, Vec3, Vector, Zero};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component, where `w` is the real part.
///
/// Multiplying two quaternions with `*` computes their Hamilton product, which composes the
/// rotations they represent: `(a * b) * v` rotates `v` by `b` first, then by `a`.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

/// A quaternion with [`f32`] elements.
pub type Quatf = Quat<f32>;

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

/// The order in which the elementary rotations of [`Quat::from_euler`] are applied.
///
/// The name lists the axes in the order they appear in the quaternion product: `Xyz` builds
/// `qx * qy * qz`, which applies the Z rotation first when rotating a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EulerOrder {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    #[default]
    Zyx,
}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };

    /// The zero quaternion, which is also what [`Quat::invert`] returns for it.
    pub const ZERO: Self = Self { vec: Vector::ZERO };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub const fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub const fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Returns the components of this quaternion as a 4-dimensional [`Vector`].
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns the imaginary part of this quaternion as a 3-dimensional [`Vector`].
    pub fn xyz(self) -> Vec3<T> {
        self.vec.truncate()
    }
}

impl<T: Number> Quat<T> {
    fn from_xyz_w(xyz: Vec3<T>, w: T) -> Self {
        Self::from_vec(xyz.extend(w))
    }

    /// Computes the dot product of `self` and `other`, treating both as 4D vectors.
    pub fn dot(self, other: Self) -> T {
        self.vec.dot(other.vec)
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it. When using quaternions to model rotations, it
    /// is advisable to ensure that quaternions are always of length one.
    pub fn length2(&self) -> T {
        self.vec.length2()
    }

    /// Returns the conjugate of this quaternion (the quaternion with a negated imaginary part).
    ///
    /// For unit quaternions, this is the same as the inverse, but cheaper to compute.
    pub fn conjugate(self) -> Self {
        Self::from_xyz_w(-self.xyz(), self.w)
    }

    /// Computes the inverse of this quaternion.
    ///
    /// The zero quaternion has no inverse; inverting it yields the zero quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let q = Quatf::from_components(1.0, 2.0, 3.0, 4.0);
    /// assert_approx_eq!(q * q.invert(), Quatf::IDENTITY).abs(1e-6);
    /// assert_eq!(Quatf::ZERO.invert(), Quatf::ZERO);
    /// ```
    pub fn invert(self) -> Self {
        let length2 = self.length2();
        let inv = if length2 == T::ZERO {
            T::ZERO
        } else {
            T::ONE / length2
        };
        Self::from_vec(self.conjugate().vec * inv)
    }

    /// Linearly interpolates between `self` and `other`, component-wise.
    ///
    /// The result is generally not normalized.
    pub fn lerp(self, other: Self, t: T) -> Self {
        Self::from_vec(self.vec.lerp(other.vec, t))
    }

    /// Resets `self` to the identity quaternion.
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }
}

impl<T: Float> Quat<T> {
    /// Creates a quaternion representing a rotation of `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        let (sin, cos) = (radians * T::half()).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a quaternion representing a rotation of `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        let (sin, cos) = (radians * T::half()).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a quaternion representing a rotation of `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        let (sin, cos) = (radians * T::half()).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion representing a rotation of `radians` around `axis`.
    ///
    /// `axis` must be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// use std::f32::consts::PI;
    ///
    /// let q = Quatf::from_axis_angle(Vec3f::Y, PI / 2.0);
    /// assert_approx_eq!(q, Quatf::from_rotation_y(PI / 2.0));
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        let (sin, cos) = (radians * T::half()).sin_cos();
        Self::from_xyz_w(axis * sin, cos)
    }

    /// Returns the rotation axis and angle (in radians) of this unit quaternion.
    ///
    /// If the rotation angle is (close to) zero, the axis is arbitrary, and the X axis is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let q = Quatf::from_axis_angle(Vec3f::Z, 0.7);
    /// let (axis, angle) = q.axis_angle();
    /// assert_approx_eq!(axis, Vec3f::Z).abs(1e-6);
    /// assert_approx_eq!(angle, 0.7).abs(1e-6);
    ///
    /// assert_eq!(Quatf::IDENTITY.axis_angle(), (Vec3f::X, 0.0));
    /// ```
    pub fn axis_angle(self) -> (Vec3<T>, T) {
        let radians = self.w.clamp(-T::ONE, T::ONE).acos() * T::two();
        let sin = (radians * T::half()).sin();
        if sin > T::EPSILON {
            (self.xyz() / sin, radians)
        } else {
            (Vec3::X, radians)
        }
    }

    /// Returns the angle (in radians) of the rotation that takes the unit quaternion `self` to
    /// `other`.
    pub fn angle_to(self, other: Self) -> T {
        let dot = self.dot(other);
        (T::two() * dot * dot - T::ONE).clamp(-T::ONE, T::ONE).acos()
    }

    /// Creates a quaternion from Euler angles (in radians) around the X, Y and Z axes, applied in
    /// the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let q = Quatf::from_euler(0.1, 0.2, 0.3, EulerOrder::Xyz);
    /// let expected = Quatf::from_rotation_x(0.1)
    ///     * Quatf::from_rotation_y(0.2)
    ///     * Quatf::from_rotation_z(0.3);
    /// assert_approx_eq!(q, expected).abs(1e-6);
    /// ```
    #[doc(alias = "euler")]
    pub fn from_euler(x: T, y: T, z: T, order: EulerOrder) -> Self {
        let (sx, cx) = (x * T::half()).sin_cos();
        let (sy, cy) = (y * T::half()).sin_cos();
        let (sz, cz) = (z * T::half()).sin_cos();

        // Each sign pattern below is the expanded product of the three elementary rotations.
        let (a, b, c, d) = (
            sx * cy * cz,
            cx * sy * cz,
            cx * cy * sz,
            cx * cy * cz,
        );
        let (e, f, g, h) = (
            cx * sy * sz,
            sx * cy * sz,
            sx * sy * cz,
            sx * sy * sz,
        );

        #[rustfmt::skip]
        let q = match order {
            EulerOrder::Xyz => (a + e, b - f, c + g, d - h),
            EulerOrder::Xzy => (a - e, b - f, c + g, d + h),
            EulerOrder::Yxz => (a + e, b - f, c - g, d + h),
            EulerOrder::Yzx => (a + e, b + f, c - g, d - h),
            EulerOrder::Zxy => (a - e, b + f, c + g, d - h),
            EulerOrder::Zyx => (a - e, b + f, c - g, d + h),
        };
        Self::from_components(q.0, q.1, q.2, q.3)
    }

    /// Creates a quaternion from a 3x3 rotation matrix.
    ///
    /// Uses Ken Shoemake's algorithm, which picks the numerically most stable formula depending
    /// on the trace and the largest diagonal element of `m`.
    pub fn from_mat3(m: Mat3<T>) -> Self {
        let trace = m.trace();
        let at = |i: usize| m[(i % 3, i / 3)];

        if trace > T::ZERO {
            let root = (trace + T::ONE).sqrt();
            let w = T::half() * root;
            let root = T::half() / root;
            Self::from_components(
                (at(5) - at(7)) * root,
                (at(6) - at(2)) * root,
                (at(1) - at(3)) * root,
                w,
            )
        } else {
            let mut i = 0;
            if at(4) > at(0) {
                i = 1;
            }
            if at(8) > at(i * 3 + i) {
                i = 2;
            }
            let j = (i + 1) % 3;
            let k = (i + 2) % 3;

            let root = (at(i * 3 + i) - at(j * 3 + j) - at(k * 3 + k) + T::ONE).sqrt();
            let mut q = [T::ZERO; 4];
            q[i] = T::half() * root;
            let root = T::half() / root;
            q[3] = (at(j * 3 + k) - at(k * 3 + j)) * root;
            q[j] = (at(j * 3 + i) + at(i * 3 + j)) * root;
            q[k] = (at(k * 3 + i) + at(i * 3 + k)) * root;
            Self::from_vec(q.into())
        }
    }

    /// Creates a quaternion from the orthonormal basis of a view: the direction the viewer looks
    /// in, and the directions to its right and upwards.
    pub fn from_axes(view: Vec3<T>, right: Vec3<T>, up: Vec3<T>) -> Self {
        Self::from_mat3(Mat3::from_rows([right, up, -view])).normalize()
    }

    /// Computes the shortest-arc rotation that takes the unit vector `from` to the unit vector
    /// `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let q = Quatf::rotation_to(Vec3f::X, Vec3f::Y);
    /// assert_approx_eq!(q * Vec3f::X, Vec3f::Y).abs(1e-6);
    ///
    /// // Opposite directions still produce a valid half-turn.
    /// let q = Quatf::rotation_to(Vec3f::X, -Vec3f::X);
    /// assert_approx_eq!(q * Vec3f::X, -Vec3f::X).abs(1e-6);
    /// ```
    pub fn rotation_to(from: Vec3<T>, to: Vec3<T>) -> Self {
        let dot = from.dot(to);
        let threshold = T::from_f64(0.999999);

        if dot < -threshold {
            let mut axis = Vec3::X.cross(from);
            if axis.length() < T::from_f64(0.000001) {
                axis = Vec3::Y.cross(from);
            }
            log::trace!(
                "rotation_to: {:?} and {:?} point in opposite directions, rotating around {:?}",
                from,
                to,
                axis,
            );
            Self::from_axis_angle(axis.normalize(), T::PI)
        } else if dot > threshold {
            Self::IDENTITY
        } else {
            Self::from_xyz_w(from.cross(to), T::ONE + dot).normalize()
        }
    }

    /// Returns a uniformly distributed random unit quaternion, drawn from a generator seeded by
    /// fastrand's thread-local one.
    pub fn random() -> Self {
        Self::random_with(&mut fastrand::Rng::new())
    }

    /// Returns a uniformly distributed random unit quaternion.
    pub fn random_with(rng: &mut fastrand::Rng) -> Self {
        let u1 = T::from_f64(rng.f64());
        let u2 = T::from_f64(rng.f64()) * T::two() * T::PI;
        let u3 = T::from_f64(rng.f64()) * T::two() * T::PI;
        let a = (T::ONE - u1).sqrt();
        let b = u1.sqrt();
        Self::from_components(a * u2.sin(), a * u2.cos(), b * u3.sin(), b * u3.cos())
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it. When using quaternions to model rotations, it is
    /// advisable to ensure that quaternions are always of length one.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// The zero quaternion is returned unchanged.
    pub fn normalize(self) -> Self {
        Self::from_vec(self.vec.normalize())
    }

    /// Returns `self` with the W component recomputed from X, Y and Z, so that the quaternion has
    /// unit length.
    pub fn calculate_w(self) -> Self {
        let xyz = self.xyz();
        Self::from_xyz_w(xyz, (T::ONE - xyz.length2()).abs().sqrt())
    }

    /// Spherical linear interpolation between the unit quaternions `self` and `other`.
    ///
    /// The interpolation follows the shorter arc. If the quaternions are very close, this falls
    /// back to a normalized linear interpolation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// use std::f32::consts::PI;
    ///
    /// let a = Quatf::IDENTITY;
    /// let b = Quatf::from_rotation_z(PI / 2.0);
    /// assert_approx_eq!(a.slerp(b, 0.5), Quatf::from_rotation_z(PI / 4.0)).abs(1e-6);
    /// ```
    pub fn slerp(self, other: Self, t: T) -> Self {
        let mut cos = self.dot(other);
        let mut other = other;
        if cos < T::ZERO {
            cos = -cos;
            other = -other;
        }

        if T::ONE - cos > T::EPSILON {
            let omega = cos.clamp(-T::ONE, T::ONE).acos();
            let sin = omega.sin();
            let scale0 = ((T::ONE - t) * omega).sin() / sin;
            let scale1 = (t * omega).sin() / sin;
            Self::from_vec(self.vec * scale0 + other.vec * scale1)
        } else {
            self.lerp(other, t).normalize()
        }
    }

    /// Spherical quadrangle interpolation between `self` and `d`, with control points `b` and `c`.
    pub fn sqlerp(self, b: Self, c: Self, d: Self, t: T) -> Self {
        let outer = self.slerp(d, t);
        let inner = b.slerp(c, t);
        outer.slerp(inner, T::two() * t * (T::ONE - t))
    }

    /// Computes the exponential of this quaternion.
    pub fn exp(self) -> Self {
        let v = self.xyz();
        let r = v.length();
        let et = self.w.exp();
        let s = if r > T::ZERO {
            et * r.sin() / r
        } else {
            T::ZERO
        };
        Self::from_xyz_w(v * s, et * r.cos())
    }

    /// Computes the natural logarithm of this quaternion.
    pub fn ln(self) -> Self {
        let v = self.xyz();
        let r = v.length();
        let t = if r > T::ZERO {
            r.atan2(self.w) / r
        } else {
            T::ZERO
        };
        Self::from_xyz_w(v * t, T::half() * self.length2().ln())
    }

    /// Raises this unit quaternion to the power `exponent`.
    ///
    /// For rotations, this scales the rotation angle by `exponent`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let q = Quatf::from_rotation_x(0.5);
    /// assert_approx_eq!(q.pow(2.0), Quatf::from_rotation_x(1.0)).abs(1e-6);
    /// ```
    pub fn pow(self, exponent: T) -> Self {
        Self::from_vec(self.ln().vec * exponent).exp()
    }

    /// Applies a rotation around the X axis after the rotation described by `self`.
    pub fn rotate_x(self, radians: T) -> Self {
        self * Self::from_rotation_x(radians)
    }

    /// Applies a rotation around the Y axis after the rotation described by `self`.
    pub fn rotate_y(self, radians: T) -> Self {
        self * Self::from_rotation_y(radians)
    }

    /// Applies a rotation around the Z axis after the rotation described by `self`.
    pub fn rotate_z(self, radians: T) -> Self {
        self * Self::from_rotation_z(radians)
    }

    /// Rotates the vector `v` by this unit quaternion.
    pub fn rotate_vec(self, v: Vec3<T>) -> Vec3<T> {
        v.transform_quat(self)
    }
}
