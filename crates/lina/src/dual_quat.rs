//! Dual quaternions.

use std::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub},
};

use crate::{approx::ApproxEq, Float, Mat4, Number, One, Quat, Vec3, Zero};

/// A dual quaternion `real + ε·dual` describing a rigid transform.
///
/// The real part is a unit quaternion holding the rotation, while the dual part holds
/// `0.5 * t * real`, where `t` is the translation written as a pure quaternion.
///
/// Like [`Quat`], dual quaternions compose with `*`: `(a * b).transform_point(p)` applies `b`
/// first, then `a`.
///
/// # Examples
///
/// ```
/// # use lina::*;
/// use std::f32::consts::PI;
///
/// let dq = DualQuatf::from_rotation_translation(Quatf::from_rotation_z(PI / 2.0), vec3(1.0, 0.0, 0.0));
/// assert_approx_eq!(dq.transform_point(vec3(1.0, 0.0, 0.0)), vec3(1.0, 1.0, 0.0)).abs(1e-6);
/// assert_approx_eq!(dq.translation(), vec3(1.0, 0.0, 0.0)).abs(1e-6);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct DualQuat<T> {
    real: Quat<T>,
    dual: Quat<T>,
}

/// A dual quaternion with [`f32`] elements.
pub type DualQuatf = DualQuat<f32>;

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for DualQuat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for DualQuat<T> {}

impl<T: Zero + One> DualQuat<T> {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        real: Quat::IDENTITY,
        dual: Quat::ZERO,
    };

    /// The dual quaternion with all components set to zero.
    pub const ZERO: Self = Self {
        real: Quat::ZERO,
        dual: Quat::ZERO,
    };
}

impl<T: Copy> DualQuat<T> {
    pub const fn from_parts(real: Quat<T>, dual: Quat<T>) -> Self {
        Self { real, dual }
    }

    /// Returns the real part, which holds the rotation.
    pub fn real(&self) -> Quat<T> {
        self.real
    }

    /// Returns the dual part, which holds the translation.
    pub fn dual(&self) -> Quat<T> {
        self.dual
    }

    pub fn set_real(&mut self, real: Quat<T>) {
        self.real = real;
    }

    pub fn set_dual(&mut self, dual: Quat<T>) {
        self.dual = dual;
    }
}

impl<T: Number> DualQuat<T> {
    fn pure(v: Vec3<T>) -> Quat<T> {
        Quat::from_vec(v.extend(T::ZERO))
    }

    fn half_pure(v: Vec3<T>) -> Quat<T> {
        let two = T::ONE + T::ONE;
        Self::pure(v / two)
    }

    /// Creates a dual quaternion that only translates by `v`.
    pub fn from_translation(v: Vec3<T>) -> Self {
        Self::from_parts(Quat::IDENTITY, Self::half_pure(v))
    }

    /// Creates a dual quaternion that only rotates by the unit quaternion `q`.
    pub fn from_rotation(q: Quat<T>) -> Self {
        Self::from_parts(q, Quat::ZERO)
    }

    /// Creates a dual quaternion that rotates by `q` and then translates by `t`.
    pub fn from_rotation_translation(q: Quat<T>, t: Vec3<T>) -> Self {
        Self::from_parts(q, Self::half_pure(t) * q)
    }

    /// Returns the translation of this (normalized) dual quaternion.
    pub fn translation(&self) -> Vec3<T> {
        let two = T::ONE + T::ONE;
        (self.dual * self.real.conjugate()).xyz() * two
    }

    /// Computes the dot product of the real parts of `self` and `other`.
    pub fn dot(&self, other: &Self) -> T {
        self.real.dot(other.real)
    }

    /// Returns the squared length of the real part.
    pub fn length2(&self) -> T {
        self.real.length2()
    }

    /// Conjugates both the real and the dual part.
    ///
    /// For a normalized dual quaternion this is the inverse transform.
    pub fn conjugate(self) -> Self {
        Self::from_parts(self.real.conjugate(), self.dual.conjugate())
    }

    /// Computes the inverse transform.
    ///
    /// A dual quaternion whose real part is zero has no inverse; it is mapped to
    /// [`DualQuat::ZERO`].
    pub fn invert(self) -> Self {
        let real = self.real.invert();
        let dual = -(real * self.dual * real);
        Self::from_parts(real, dual)
    }

    /// Linearly interpolates between `self` and `other`, taking the shorter path between the
    /// rotations.
    ///
    /// The result is generally not normalized.
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: PartialOrd,
    {
        let mt = T::ONE - t;
        let t = if self.dot(&other) < T::ZERO { -t } else { t };
        self * mt + other * t
    }

    /// Appends a translation by `v` in the local frame of `self`.
    ///
    /// This is equivalent to `self * DualQuat::from_translation(v)`.
    pub fn translate(self, v: Vec3<T>) -> Self {
        Self::from_parts(self.real, self.dual + self.real * Self::half_pure(v))
    }

    /// Appends the rotation `q`, which is applied before the transform described by `self`.
    pub fn rotate_by_quat_append(self, q: Quat<T>) -> Self {
        Self::from_parts(self.real * q, self.dual * q)
    }

    /// Prepends the rotation `q`, which is applied after the transform described by `self`.
    pub fn rotate_by_quat_prepend(self, q: Quat<T>) -> Self {
        Self::from_parts(q * self.real, q * self.dual)
    }

    /// Applies the transform to the point `p`.
    pub fn transform_point(&self, p: Vec3<T>) -> Vec3<T> {
        self.real * p + self.translation()
    }
}

impl<T: Float> DualQuat<T> {
    /// Creates a dual quaternion from a rigid transform matrix.
    ///
    /// Any scaling contained in `m` is discarded.
    pub fn from_mat4(m: Mat4<T>) -> Self {
        Self::from_rotation_translation(m.rotation(), m.translation())
    }

    pub fn length(&self) -> T {
        self.real.length()
    }

    /// Normalizes the real part to unit length and makes the dual part orthogonal to it.
    ///
    /// A dual quaternion with a zero real part is returned unchanged.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length == T::ZERO {
            return self;
        }

        let real = self.real * (T::ONE / length);
        let dual = self.dual * (T::ONE / length);
        let dual = dual - real * real.dot(dual);
        Self::from_parts(real, dual)
    }

    /// Appends a rotation around the local X axis.
    pub fn rotate_x(self, radians: T) -> Self {
        self.rotate_by_quat_append(Quat::from_rotation_x(radians))
    }

    /// Appends a rotation around the local Y axis.
    pub fn rotate_y(self, radians: T) -> Self {
        self.rotate_by_quat_append(Quat::from_rotation_y(radians))
    }

    /// Appends a rotation around the local Z axis.
    pub fn rotate_z(self, radians: T) -> Self {
        self.rotate_by_quat_append(Quat::from_rotation_z(radians))
    }

    /// Appends a rotation of `radians` around `axis`, which does not need to be normalized.
    ///
    /// If `axis` has (close to) zero length, `self` is returned unchanged.
    pub fn rotate_around_axis(self, axis: Vec3<T>, radians: T) -> Self {
        if axis.length() < T::EPSILON {
            return self;
        }
        self.rotate_by_quat_append(Quat::from_axis_angle(axis.normalize(), radians))
    }
}

/// Dual quaternion product.
impl<T: Number> Mul for DualQuat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_parts(
            self.real * rhs.real,
            self.real * rhs.dual + self.dual * rhs.real,
        )
    }
}

impl<T: Number> MulAssign for DualQuat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Scales both parts.
impl<T: Number> Mul<T> for DualQuat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_parts(self.real * rhs, self.dual * rhs)
    }
}

impl<T: Number> Add for DualQuat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_parts(self.real + rhs.real, self.dual + rhs.dual)
    }
}

impl<T: Number> AddAssign for DualQuat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Number> Sub for DualQuat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_parts(self.real - rhs.real, self.dual - rhs.dual)
    }
}

impl<T: Number> Neg for DualQuat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_parts(-self.real, -self.dual)
    }
}

impl<T: ApproxEq> ApproxEq for DualQuat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.real.abs_diff_eq(&other.real, tolerance)
            && self.dual.abs_diff_eq(&other.dual, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.real.rel_diff_eq(&other.real, tolerance)
            && self.dual.rel_diff_eq(&other.dual, tolerance)
    }

    fn scaled_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.real.scaled_diff_eq(&other.real, tolerance)
            && self.dual.scaled_diff_eq(&other.dual, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, tolerance: u32) -> bool {
        self.real.ulps_diff_eq(&other.real, tolerance)
            && self.dual.ulps_diff_eq(&other.dual, tolerance)
    }
}

impl<T: fmt::Debug> fmt::Debug for DualQuat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualQuat")
            .field("real", &self.real)
            .field("dual", &self.dual)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use crate::{assert_approx_eq, vec3, Mat4f, Quatf, Vec3f};

    use super::*;

    fn sample() -> DualQuatf {
        let q = Quatf::from_axis_angle(vec3(1.0, 2.0, 2.0).normalize(), 0.8);
        DualQuatf::from_rotation_translation(q, vec3(3.0, -1.0, 0.5))
    }

    #[test]
    fn identity() {
        let p = vec3(1.0, 2.0, 3.0);
        assert_eq!(DualQuatf::IDENTITY.transform_point(p), p);
        assert_eq!(DualQuatf::IDENTITY.translation(), Vec3f::ZERO);
        assert_eq!(DualQuatf::IDENTITY * sample(), sample());
        assert_eq!(sample() * DualQuatf::IDENTITY, sample());
    }

    #[test]
    fn accessors() {
        let mut dq = DualQuatf::IDENTITY;
        let q = Quatf::from_rotation_y(0.3);
        dq.set_real(q);
        dq.set_dual(Quatf::from_components(1.0, 0.0, 0.0, 0.0));
        assert_eq!(dq.real(), q);
        assert_eq!(dq.dual(), Quatf::from_components(1.0, 0.0, 0.0, 0.0));
        assert_eq!(DualQuat::from_parts(dq.real(), dq.dual()), dq);
    }

    #[test]
    fn rotation_translation() {
        let q = Quatf::from_rotation_z(FRAC_PI_2);
        let t = vec3(1.0, 2.0, 3.0);
        let dq = DualQuatf::from_rotation_translation(q, t);
        assert_eq!(dq.real(), q);
        assert_approx_eq!(dq.translation(), t).abs(1e-6);
        assert_approx_eq!(dq.transform_point(Vec3f::X), vec3(1.0, 3.0, 3.0)).abs(1e-6);

        let dq = DualQuatf::from_translation(t);
        assert_eq!(dq.translation(), t);
        assert_eq!(dq.transform_point(Vec3f::ZERO), t);

        let dq = DualQuatf::from_rotation(q);
        assert_eq!(dq.translation(), Vec3f::ZERO);
        assert_approx_eq!(dq.transform_point(Vec3f::X), Vec3f::Y).abs(1e-6);
    }

    #[test]
    fn composition() {
        let a = sample();
        let b = DualQuatf::from_rotation_translation(Quatf::from_rotation_x(1.2), vec3(0.0, 4.0, 1.0));
        let p = vec3(0.5, -2.0, 1.5);
        assert_approx_eq!((a * b).transform_point(p), a.transform_point(b.transform_point(p)))
            .abs(1e-5);
        assert_approx_eq!(Mat4f::from_dual_quat(a * b), Mat4f::from_dual_quat(a) * Mat4f::from_dual_quat(b))
            .abs(1e-5);

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn invert() {
        let dq = sample();
        assert_approx_eq!(dq * dq.invert(), DualQuatf::IDENTITY).abs(1e-6);
        assert_approx_eq!(dq.invert() * dq, DualQuatf::IDENTITY).abs(1e-6);
        assert_approx_eq!(dq.invert(), dq.conjugate()).abs(1e-6);

        let p = vec3(1.0, 1.0, -1.0);
        assert_approx_eq!(dq.invert().transform_point(dq.transform_point(p)), p).abs(1e-5);

        assert_eq!(DualQuatf::ZERO.invert(), DualQuatf::ZERO);
    }

    #[test]
    fn normalize() {
        let dq = sample();
        let scaled = dq * 3.0;
        assert_approx_eq!(scaled.length(), 3.0).abs(1e-6);
        let n = scaled.normalize();
        assert_approx_eq!(n, dq).abs(1e-6);
        assert_approx_eq!(n.length(), 1.0).abs(1e-6);
        assert_approx_eq!(n.real().dot(n.dual()), 0.0).abs(1e-6);

        assert_eq!(DualQuatf::ZERO.normalize(), DualQuatf::ZERO);
    }

    #[test]
    fn translate() {
        let dq = DualQuatf::from_rotation(Quatf::from_rotation_z(FRAC_PI_2));
        let moved = dq.translate(Vec3f::X);
        assert_approx_eq!(moved, dq * DualQuatf::from_translation(Vec3f::X)).abs(1e-6);
        // The translation happens in the rotated frame.
        assert_approx_eq!(moved.translation(), Vec3f::Y).abs(1e-6);
    }

    #[test]
    fn rotate() {
        let t = vec3(1.0, 2.0, 3.0);
        let dq = DualQuatf::from_translation(t);

        let rx = dq.rotate_x(0.4);
        assert_approx_eq!(rx, dq * DualQuatf::from_rotation(Quatf::from_rotation_x(0.4))).abs(1e-6);
        assert_approx_eq!(rx.translation(), t).abs(1e-6);
        let ry = dq.rotate_y(0.4);
        assert_approx_eq!(ry.real(), Quatf::from_rotation_y(0.4));
        let rz = dq.rotate_z(0.4);
        assert_approx_eq!(rz.real(), Quatf::from_rotation_z(0.4));

        let q = Quatf::from_rotation_z(FRAC_PI_2);
        let prepended = dq.rotate_by_quat_prepend(q);
        assert_approx_eq!(prepended, DualQuatf::from_rotation(q) * dq).abs(1e-6);
        assert_approx_eq!(prepended.translation(), vec3(-2.0, 1.0, 3.0)).abs(1e-6);

        let appended = dq.rotate_by_quat_append(q);
        assert_approx_eq!(appended.translation(), t).abs(1e-6);
    }

    #[test]
    fn rotate_around_axis() {
        let dq = sample();
        assert_eq!(dq.rotate_around_axis(Vec3f::ZERO, 1.0), dq);

        let rotated = dq.rotate_around_axis(vec3(0.0, 0.0, 5.0), 0.6);
        assert_approx_eq!(rotated, dq.rotate_z(0.6)).abs(1e-6);
    }

    #[test]
    fn from_mat4() {
        let q = Quatf::from_axis_angle(vec3(0.0, 0.6, 0.8), 0.9);
        let t = vec3(-1.0, 0.5, 7.0);
        let m = Mat4f::from_rotation_translation(q, t);
        let dq = DualQuatf::from_mat4(m);
        assert_approx_eq!(dq, DualQuatf::from_rotation_translation(q, t)).abs(1e-5);
        assert_approx_eq!(Mat4f::from_dual_quat(dq), m).abs(1e-5);
    }

    #[test]
    fn lerp() {
        let a = sample();
        let b = DualQuatf::from_translation(vec3(2.0, 0.0, 0.0));
        assert_approx_eq!(a.lerp(b, 0.0), a);
        assert_approx_eq!(a.lerp(b, 1.0), b);

        // Interpolation follows the shorter path even if `b` is negated.
        let mid = a.lerp(b, 0.5).normalize();
        let mid_neg = a.lerp(-b, 0.5).normalize();
        assert_approx_eq!(mid, mid_neg).abs(1e-6);
    }

    #[test]
    fn sum_and_difference() {
        let a = sample();
        let mut b = a;
        b += a;
        assert_eq!(b, a * 2.0);
        assert_eq!(b - a, a);
        assert_eq!(a + (-a), DualQuatf::ZERO);
    }
}
