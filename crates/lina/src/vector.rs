use std::{array, fmt};

use itertools::Itertools;

use crate::{
    traits::{Float, Number},
    Mat2, Mat3, Mat4, MinMax, One, Quat, Zero,
};

mod ops;
mod view;

pub(crate) use view::XYZW;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// A column vector of `N` elements.
///
/// Vectors are small [`Copy`] values laid out exactly like `[T; N]`. Operations consume their
/// operands and return a fresh vector, so updating a vector with a function of itself is a
/// plain assignment (`a = a.lerp(b, t)`) or a compound operator (`a += b`).
///
/// ```
/// # use lina::*;
/// let mut position = vec3(1.0, 2.0, 3.0);
/// position += Vec3f::Y * 0.5;
/// position.z = 0.0;
/// assert_eq!(position, [1.0, 2.5, 0.0]);
/// assert_eq!(position.truncate(), vec2(1.0, 2.5));
/// ```
///
/// Elements can be read as named fields (`x`, `y`, `z`, `w`), by index, or as a slice through
/// [`AsRef`]. The [`vec2`], [`vec3`] and [`vec4`] functions, [`Vector::splat`],
/// [`Vector::from_fn`] and the `From<[T; N]>` impl create vectors. Vectors of [`Pod`] elements
/// are [`Pod`] themselves and can be cast to bytes for vertex buffers.
///
/// [`Pod`]: bytemuck::Pod
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The origin.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// `(1, 0)`
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// `(0, 1)`
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// `(1, 0, 0)`
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// `(0, 1, 0)`
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// `(0, 0, 1)`
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// `(1, 0, 0, 0)`
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// `(0, 1, 0, 0)`
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// `(0, 0, 1, 0)`
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// `(0, 0, 0, 1)`
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns a vector with every element set to `elem`.
    ///
    /// ```
    /// # use lina::*;
    /// assert_eq!(Vec4f::splat(0.5), vec4(0.5, 0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector by calling `cb` with each index in turn.
    ///
    /// ```
    /// # use lina::*;
    /// let powers = Vec4f::from_fn(|i| (1 << i) as f32);
    /// assert_eq!(powers, vec4(1.0, 2.0, 4.0, 8.0));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies `f` to every element.
    ///
    /// ```
    /// # use lina::*;
    /// let texel = vec3(0.5, 1.0, 0.0).map(|c| (c * 255.0) as u8);
    /// assert_eq!(texel, vec3(127, 255, 0));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    pub fn zip<U: Copy>(self, other: Vector<U, N>) -> Vector<(T, U), N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| (self.0[i], other.0[i]))
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Resets every element of `self` to zero.
    pub fn set_zero(&mut self)
    where
        T: Zero + Copy,
    {
        self.0 = [T::ZERO; N];
    }

    /// Returns the squared Euclidean length, avoiding the square root.
    ///
    /// ```
    /// # use lina::*;
    /// assert_eq!(vec3(1, 2, 2).length2(), 9);
    /// ```
    #[doc(alias = "squared_magnitude")]
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the Euclidean length.
    #[doc(alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Float,
    {
        self.length2().sqrt()
    }

    /// Returns the squared distance between the points `self` and `other`.
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        (other - self).length2()
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// ```
    /// # use lina::*;
    /// assert_eq!(vec3(1.0, 1.0, 1.0).distance(vec3(1.0, 4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Float,
    {
        self.distance2(other).sqrt()
    }

    /// Scales `self` to unit length.
    ///
    /// The zero vector has no direction and is returned as-is.
    ///
    /// ```
    /// # use lina::*;
    /// assert_eq!(vec2(0.0, -3.0).normalize(), vec2(0.0, -1.0));
    /// assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Float,
    {
        let length2 = self.length2();
        if length2 > T::ZERO {
            self * (T::ONE / length2.sqrt())
        } else {
            self
        }
    }

    /// Returns the sum of the element-wise products of `self` and `other`.
    ///
    /// For unit vectors this is the cosine of the angle between them, so its sign tells whether
    /// two directions face the same way.
    ///
    /// ```
    /// # use lina::*;
    /// let facing = vec3(0.0, 0.0, -1.0);
    /// assert!(facing.dot(vec3(0.0, 0.0, -1.0)) > 0.0);
    /// assert_eq!(facing.dot(Vec3f::X), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i] * other.0[i])
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// If either vector has zero length, the angle is reported as a right angle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec3f::Y.angle(Vec3f::X), TAU / 4.0);
    /// assert_approx_eq!(Vec3f::Y.angle(-Vec3f::Y), TAU / 2.0);
    /// ```
    pub fn angle(self, other: Self) -> T
    where
        T: Float,
    {
        let magnitude = (self.length2() * other.length2()).sqrt();
        let cosine = if magnitude == T::ZERO {
            T::ZERO
        } else {
            self.dot(other) / magnitude
        };
        cosine.clamp(-T::ONE, T::ONE).acos()
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// `t` is not clamped: values outside `0..=1` extrapolate along the line through both points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let a = vec2(0.0, 10.0);
    /// let b = vec2(4.0, 20.0);
    /// assert_eq!(a.lerp(b, 0.5), vec2(2.0, 15.0));
    /// assert_eq!(a.lerp(b, 2.0), vec2(8.0, 30.0));
    /// ```
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (other - self) * t
    }

    /// Computes `self + other * scale` (a fused "multiply and add").
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// assert_eq!(vec2(1, 1).scale_and_add(vec2(2, 3), 10), vec2(21, 31));
    /// ```
    pub fn scale_and_add(self, other: Self, scale: T) -> Self
    where
        T: Number,
    {
        self + other * scale
    }

    /// Element-wise reciprocal.
    ///
    /// Zero elements become infinite; this is not treated as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// assert_eq!(vec2(2.0, 0.0).inverse(), vec2(0.5, f32::INFINITY));
    /// ```
    pub fn inverse(self) -> Self
    where
        T: Number,
    {
        self.map(|elem| T::ONE / elem)
    }

    /// Element-wise [`floor`][f32::floor].
    pub fn floor(self) -> Self
    where
        T: Float,
    {
        self.map(Float::floor)
    }

    /// Element-wise [`ceil`][f32::ceil].
    pub fn ceil(self) -> Self
    where
        T: Float,
    {
        self.map(Float::ceil)
    }

    /// Element-wise [`round`][f32::round].
    pub fn round(self) -> Self
    where
        T: Float,
    {
        self.map(Float::round)
    }

    /// Picks the smaller of each pair of elements.
    ///
    /// For floats, a NaN element loses against any number.
    ///
    /// ```
    /// # use lina::*;
    /// let lo = vec3(0.0, 5.0, f32::NAN).min(vec3(1.0, -5.0, 2.0));
    /// assert_eq!(lo, vec3(0.0, -5.0, 2.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Picks the larger of each pair of elements.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Clamps each element into the range given by the matching elements of `min` and `max`.
    ///
    /// ```
    /// # use lina::*;
    /// let clamped = vec2(-4.0, 9.0).clamp(Vec2f::ZERO, Vec2f::splat(1.0));
    /// assert_eq!(clamped, vec2(0.0, 1.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Performs a cubic Hermite interpolation between `self` and `d`, with control points `b`
    /// and `c`.
    pub fn hermite(self, b: Self, c: Self, d: Self, t: T) -> Self
    where
        T: Float,
    {
        let two = T::two();
        let three = two + T::ONE;
        let t2 = t * t;
        let f1 = t2 * (two * t - three) + T::ONE;
        let f2 = t2 * (t - two) + t;
        let f3 = t2 * (t - T::ONE);
        let f4 = t2 * (three - two * t);
        self * f1 + b * f2 + c * f3 + d * f4
    }

    /// Performs a cubic Bézier interpolation between `self` and `d`, with control points `b` and
    /// `c`.
    pub fn bezier(self, b: Self, c: Self, d: Self, t: T) -> Self
    where
        T: Float,
    {
        let three = T::two() + T::ONE;
        let inv = T::ONE - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        let f1 = inv2 * inv;
        let f2 = three * t * inv2;
        let f3 = three * t2 * inv;
        let f4 = t2 * t;
        self * f1 + b * f2 + c * f3 + d * f4
    }
}

impl<T> Vector<T, 2> {
    /// Adds a Z coordinate.
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        vec3(x, y, z)
    }

    /// Computes the cross product of `self` and `other`, treating both as 3D vectors in the XY
    /// plane.
    ///
    /// Only the Z component of the result can be non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// assert_eq!(vec2(1, 0).cross(vec2(0, 1)), vec3(0, 0, 1));
    /// ```
    pub fn cross(self, other: Self) -> Vector<T, 3>
    where
        T: Number,
    {
        vec3(T::ZERO, T::ZERO, self.perp_dot(other))
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is equivalent to the Z coordinate of the cross product of `self` and `other`
    /// (extended with Z=0 in the third dimension).
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        let [ax, ay] = self.into_array();
        let [bx, by] = other.into_array();
        ax * by - ay * bx
    }

    /// Rotates the point `self` counterclockwise around `origin`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// use std::f32::consts::PI;
    ///
    /// let v = vec2(2.0, 1.0).rotate(vec2(1.0, 1.0), PI / 2.0);
    /// assert_approx_eq!(v, vec2(1.0, 2.0));
    /// ```
    pub fn rotate(self, origin: Self, radians: T) -> Self
    where
        T: Float,
    {
        let [px, py] = (self - origin).into_array();
        let (s, c) = radians.sin_cos();
        vec2(px * c - py * s, px * s + py * c) + origin
    }

    /// Transforms `self` by a 2x2 matrix.
    pub fn transform_mat2(self, m: Mat2<T>) -> Self
    where
        T: Number,
    {
        m * self
    }

    /// Transforms the point `self` by a 3x3 affine 2D transformation matrix.
    ///
    /// The vector is treated as having a third component of 1, so the translation part of `m` is
    /// applied.
    pub fn transform_mat3(self, m: Mat3<T>) -> Self
    where
        T: Number,
    {
        let [x, y] = self.into_array();
        vec2(
            m[(0, 0)] * x + m[(0, 1)] * y + m[(0, 2)],
            m[(1, 0)] * x + m[(1, 1)] * y + m[(1, 2)],
        )
    }

    /// Transforms the point `self` by a 4x4 matrix, treating it as `(x, y, 0, 1)`.
    pub fn transform_mat4(self, m: Mat4<T>) -> Self
    where
        T: Number,
    {
        let [x, y] = self.into_array();
        vec2(
            m[(0, 0)] * x + m[(0, 1)] * y + m[(0, 3)],
            m[(1, 0)] * x + m[(1, 1)] * y + m[(1, 3)],
        )
    }

    /// Returns a vector with a uniformly random direction and length `magnitude`, drawn from a
    /// generator seeded by fastrand's thread-local one.
    pub fn random(magnitude: T) -> Self
    where
        T: Float,
    {
        Self::random_with(&mut fastrand::Rng::new(), magnitude)
    }

    /// Returns a vector with a uniformly random direction and length `magnitude`.
    pub fn random_with(rng: &mut fastrand::Rng, magnitude: T) -> Self
    where
        T: Float,
    {
        let angle = T::from_f64(rng.f64()) * T::two() * T::PI;
        let (s, c) = angle.sin_cos();
        vec2(c * magnitude, s * magnitude)
    }
}

impl<T> Vector<T, 3> {
    /// Drops the Z coordinate.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Adds a W coordinate, eg. `1` for a point or `0` for a direction.
    ///
    /// ```
    /// # use lina::*;
    /// let point = vec3(4.0, 5.0, 6.0).extend(1.0);
    /// assert_eq!(point.truncate(), vec3(4.0, 5.0, 6.0));
    /// ```
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }

    /// Returns the right-handed cross product `self × other`.
    ///
    /// The result is perpendicular to both inputs and flips sign when they are swapped.
    ///
    /// ```
    /// # use lina::*;
    /// assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
    /// assert_eq!(Vec3f::X.cross(Vec3f::Z), -Vec3f::Y);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Rotates the point `self` around the X axis through `origin`.
    pub fn rotate_x(self, origin: Self, radians: T) -> Self
    where
        T: Float,
    {
        let [px, py, pz] = (self - origin).into_array();
        let (s, c) = radians.sin_cos();
        vec3(px, py * c - pz * s, py * s + pz * c) + origin
    }

    /// Rotates the point `self` around the Y axis through `origin`.
    pub fn rotate_y(self, origin: Self, radians: T) -> Self
    where
        T: Float,
    {
        let [px, py, pz] = (self - origin).into_array();
        let (s, c) = radians.sin_cos();
        vec3(pz * s + px * c, py, pz * c - px * s) + origin
    }

    /// Rotates the point `self` around the Z axis through `origin`.
    pub fn rotate_z(self, origin: Self, radians: T) -> Self
    where
        T: Float,
    {
        let [px, py, pz] = (self - origin).into_array();
        let (s, c) = radians.sin_cos();
        vec3(px * c - py * s, px * s + py * c, pz) + origin
    }

    /// Transforms `self` by a 3x3 matrix.
    pub fn transform_mat3(self, m: Mat3<T>) -> Self
    where
        T: Number,
    {
        m * self
    }

    /// Transforms the point `self` by a 4x4 matrix, treating it as `(x, y, z, 1)`.
    ///
    /// The result is divided by the resulting W coordinate (perspective divide), unless that
    /// coordinate is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let m = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(Vec3f::ZERO.transform_mat4(m), vec3(1.0, 2.0, 3.0));
    /// ```
    pub fn transform_mat4(self, m: Mat4<T>) -> Self
    where
        T: Number,
    {
        let [x, y, z, w] = (m * self.extend(T::ONE)).into_array();
        let w = if w == T::ZERO { T::ONE } else { w };
        vec3(x / w, y / w, z / w)
    }

    /// Rotates `self` by the quaternion `q`.
    ///
    /// This computes the sandwich product `q * v * q⁻¹` for unit quaternions, using the expansion
    /// `v + 2w(q×v) + 2(q×(q×v))`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// use std::f32::consts::PI;
    ///
    /// let q = Quatf::from_rotation_z(PI / 2.0);
    /// assert_approx_eq!(Vec3f::X.transform_quat(q), Vec3f::Y);
    /// ```
    pub fn transform_quat(self, q: Quat<T>) -> Self
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        let qv = vec3(q.x, q.y, q.z);
        let uv = qv.cross(self);
        let uuv = qv.cross(uv);
        self + uv * (q.w * two) + uuv * two
    }

    /// Returns a vector with a uniformly random direction and length `magnitude`, drawn from a
    /// generator seeded by fastrand's thread-local one.
    pub fn random(magnitude: T) -> Self
    where
        T: Float,
    {
        Self::random_with(&mut fastrand::Rng::new(), magnitude)
    }

    /// Returns a vector with a uniformly random direction and length `magnitude`.
    ///
    /// Uses Marsaglia's method: a point is drawn from the unit disk and projected onto the
    /// sphere.
    pub fn random_with(rng: &mut fastrand::Rng, magnitude: T) -> Self
    where
        T: Float,
    {
        let two = T::two();
        let (x1, x2, s) = sample_unit_disk(rng);
        let r = two * (T::ONE - s).sqrt();
        vec3(x1 * r, x2 * r, T::ONE - two * s) * magnitude
    }
}

impl<T> Vector<T, 4> {
    /// Drops the W coordinate without dividing by it.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }

    /// Computes the 4-dimensional cross product of `self`, `v` and `w`.
    ///
    /// The result is perpendicular to all three inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// assert_eq!(Vec4f::X.cross(Vec4f::Y, Vec4f::Z), -Vec4f::W);
    /// ```
    pub fn cross(self, v: Self, w: Self) -> Self
    where
        T: Number,
    {
        let [v0, v1, v2, v3] = v.into_array();
        let [w0, w1, w2, w3] = w.into_array();
        let a = v0 * w1 - v1 * w0;
        let b = v0 * w2 - v2 * w0;
        let c = v0 * w3 - v3 * w0;
        let d = v1 * w2 - v2 * w1;
        let e = v1 * w3 - v3 * w1;
        let f = v2 * w3 - v3 * w2;
        let [g, h, i, j] = self.into_array();

        vec4(
            h * f - i * e + j * d,
            -(g * f) + i * c - j * b,
            g * e - h * c + j * a,
            -(g * d) + h * b - i * a,
        )
    }

    /// Transforms `self` by a 4x4 matrix.
    pub fn transform_mat4(self, m: Mat4<T>) -> Self
    where
        T: Number,
    {
        m * self
    }

    /// Rotates the XYZ part of `self` by the quaternion `q`, leaving W unchanged.
    pub fn transform_quat(self, q: Quat<T>) -> Self
    where
        T: Number,
    {
        let [x, y, z, w] = self.into_array();
        vec3(x, y, z).transform_quat(q).extend(w)
    }

    /// Returns a vector with a uniformly random direction and length `magnitude`, drawn from a
    /// generator seeded by fastrand's thread-local one.
    pub fn random(magnitude: T) -> Self
    where
        T: Float,
    {
        Self::random_with(&mut fastrand::Rng::new(), magnitude)
    }

    /// Returns a vector with a uniformly random direction and length `magnitude`.
    ///
    /// Uses Marsaglia's method for the 3-sphere: two independent points are drawn from the unit
    /// disk and combined.
    pub fn random_with(rng: &mut fastrand::Rng, magnitude: T) -> Self
    where
        T: Float,
    {
        let (v1, v2, s1) = sample_unit_disk(rng);
        let (v3, v4, s2) = sample_unit_disk::<T>(rng);
        let d = ((T::ONE - s1) / s2).sqrt();
        vec4(v1, v2, v3 * d, v4 * d) * magnitude
    }
}

/// Rejection-samples a point strictly inside the unit disk, excluding the origin.
///
/// Returns the point's coordinates and its squared distance from the origin.
fn sample_unit_disk<T: Float>(rng: &mut fastrand::Rng) -> (T, T, T) {
    loop {
        let a = T::from_f64(rng.f64() * 2.0 - 1.0);
        let b = T::from_f64(rng.f64() * 2.0 - 1.0);
        let s = a * a + b * b;
        if s < T::ONE && s > T::ZERO {
            return (a, b, s);
        }
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

/// Formats as a tuple, eg. `(1.0, 0.0)`.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?})", self.0.iter().format(", "))
    }
}

/// Formats with the dimension as a prefix, eg. `vec2(1, 0)`.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vec{N}({})", self.0.iter().format(", "))
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Shorthand for a [`Vec2`].
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Shorthand for a [`Vec3`].
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Shorthand for a [`Vec4`].
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{PI, TAU};

    use crate::{assert_approx_eq, ApproxEq, Mat2f, Mat3f, Mat4f, Quatf};

    use super::*;

    #[test]
    fn field_and_index_access() {
        let mut v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!((v.x, v.y, v.z, v.w), (1.0, 2.0, 3.0, 4.0));
        v.z = -3.0;
        assert_eq!(v[2], -3.0);
        v[3] = 0.0;
        assert_eq!(v.w, 0.0);
        assert_eq!(v.as_slice(), &[1.0, 2.0, -3.0, 0.0]);
        assert_eq!(<[f32; 4]>::from(v), [1.0, 2.0, -3.0, 0.0]);

        v.set_zero();
        assert_eq!(v, Vec4f::ZERO);
        assert_eq!(Vec3f::default(), Vec3f::ZERO);
    }

    #[test]
    fn formatting() {
        assert_eq!(Vec4f::W.to_string(), "vec4(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", vec2(0.5f32, -1.0)), "(0.5, -1.0)");
        assert_eq!(vec3(1, 2, 3).to_string(), "vec3(1, 2, 3)");
    }

    #[test]
    fn min_max_clamp() {
        let a = vec3(1.0, -2.0, 3.0);
        let b = vec3(0.0, 4.0, 3.0);
        assert_eq!(a.min(b), vec3(0.0, -2.0, 3.0));
        assert_eq!(a.max(b), vec3(1.0, 4.0, 3.0));
        assert_eq!(a.clamp(Vec3f::splat(-1.0), Vec3f::splat(2.0)), vec3(1.0, -1.0, 2.0));
    }

    #[test]
    fn arithmetic() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 5.0, 6.0);
        assert_eq!(a + b, vec3(5.0, 7.0, 9.0));
        assert_eq!(a - b, vec3(-3.0, -3.0, -3.0));
        assert_eq!(a * b, vec3(4.0, 10.0, 18.0));
        assert_eq!(b / a, vec3(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, vec3(2.0, 4.0, 6.0));
        assert_eq!(-a, vec3(-1.0, -2.0, -3.0));
        assert_eq!(a.scale_and_add(b, 0.5), vec3(3.0, 4.5, 6.0));
        assert_eq!(vec3(-1.5, 0.5, 2.5).floor(), vec3(-2.0, 0.0, 2.0));
        assert_eq!(vec3(-1.5, 0.5, 2.1).ceil(), vec3(-1.0, 1.0, 3.0));
        assert_eq!(vec3(-1.6, 0.4, 2.5).round(), vec3(-2.0, 0.0, 3.0));
    }

    #[test]
    fn inverse_of_zero_is_infinite() {
        let inv = vec3(0.0f32, -0.0, 4.0).inverse();
        assert_eq!(inv, vec3(f32::INFINITY, f32::NEG_INFINITY, 0.25));
    }

    #[test]
    fn dot() {
        assert_eq!(vec4(1, 0, 2, -1).dot(vec4(3, 7, 1, 5)), 0);
        assert_eq!(vec3(2, -1, 4).dot(vec3(2, -1, 4)), 21);
        assert_eq!(Vec2f::Y.dot(-Vec2f::Y), -1.0);
    }

    #[test]
    fn cross() {
        assert_eq!(Vec3f::X.cross(Vec3f::Y), vec3(0.0, 0.0, 1.0));
        assert_eq!(vec2(2, 3).cross(vec2(4, 5)), vec3(0, 0, 2 * 5 - 3 * 4));

        let u = vec4(1.0, 2.0, 3.0, 4.0);
        let v = vec4(-1.0, 0.5, 2.0, 0.0);
        let w = vec4(3.0, -2.0, 1.0, 1.0);
        let c = u.cross(v, w);
        assert_approx_eq!(c.dot(u), 0.0).abs(1e-4);
        assert_approx_eq!(c.dot(v), 0.0).abs(1e-4);
        assert_approx_eq!(c.dot(w), 0.0).abs(1e-4);
    }

    #[test]
    fn length_and_distance() {
        assert_eq!(vec3(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(vec3(2.0, 3.0, 6.0).length2(), 49.0);
        assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
        assert_eq!(vec2(1.0, 1.0).distance2(vec2(4.0, 5.0)), 25.0);
    }

    #[test]
    fn normalize() {
        assert_approx_eq!(vec3(3.0, 0.0, 4.0).normalize(), vec3(0.6, 0.0, 0.8));
        assert_approx_eq!(vec4(1.0, 1.0, 1.0, 1.0).normalize().length(), 1.0);
        assert_eq!(Vec2f::ZERO.normalize(), Vec2f::ZERO);
        assert_eq!(Vec4f::ZERO.normalize(), Vec4f::ZERO);
    }

    #[test]
    fn angle() {
        assert_approx_eq!(Vec3f::Y.angle(Vec3f::X), TAU / 4.0);
        assert_approx_eq!(Vec3f::Y.angle(Vec3f::Y), 0.0);
        assert_approx_eq!(vec2(0.0, 2.0).angle(vec2(-3.0, 0.0)), TAU / 4.0);
        assert_approx_eq!(vec2(1.0, 1.0).angle(vec2(1.0, -1.0)), TAU / 4.0);
        assert_approx_eq!(Vec3f::ZERO.angle(Vec3f::X), TAU / 4.0);
    }

    #[test]
    fn interpolation() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 5.0, 6.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, -1.0), vec3(-2.0, -1.0, 0.0));

        let c = vec3(7.0, 8.0, 9.0);
        let d = vec3(10.0, 11.0, 12.0);
        assert_approx_eq!(a.bezier(b, c, d, 0.0), a);
        assert_approx_eq!(a.bezier(b, c, d, 1.0), d);
        assert_approx_eq!(a.hermite(b, c, d, 0.0), a);
        assert_approx_eq!(a.hermite(b, c, d, 1.0), d);
        // Collinear, evenly spaced control points trace the straight line.
        assert_approx_eq!(a.bezier(b, c, d, 0.5), vec3(5.5, 6.5, 7.5)).abs(1e-5);
    }

    #[test]
    fn rotate() {
        let origin = vec3(0.0, 1.0, 0.0);
        let v = vec3(0.0, 1.0, 1.0).rotate_x(origin, PI / 2.0);
        assert_approx_eq!(v, vec3(0.0, 0.0, 0.0)).abs(1e-6);
        let v = vec3(1.0, 0.0, 0.0).rotate_y(Vec3f::ZERO, PI / 2.0);
        assert_approx_eq!(v, vec3(0.0, 0.0, -1.0)).abs(1e-6);
        let v = vec3(1.0, 0.0, 0.0).rotate_z(Vec3f::ZERO, PI / 2.0);
        assert_approx_eq!(v, vec3(0.0, 1.0, 0.0)).abs(1e-6);
        let v = vec2(1.0, 0.0).rotate(Vec2f::ZERO, PI);
        assert_approx_eq!(v, vec2(-1.0, 0.0)).abs(1e-6);
    }

    #[test]
    fn transform_matrices() {
        let m2 = Mat2f::from_columns([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(vec2(1.0, 1.0).transform_mat2(m2), vec2(4.0, 6.0));

        let m3 = Mat3f::from_translation(vec2(5.0, -1.0));
        assert_eq!(vec2(1.0, 1.0).transform_mat3(m3), vec2(6.0, 0.0));
        assert_eq!(vec3(1.0, 1.0, 0.0).transform_mat3(m3), vec3(1.0, 1.0, 0.0));

        let m4 = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
        assert_eq!(vec2(1.0, 1.0).transform_mat4(m4), vec2(2.0, 3.0));
        assert_eq!(vec3(1.0, 1.0, 1.0).transform_mat4(m4), vec3(2.0, 3.0, 4.0));
        assert_eq!(vec4(1.0, 1.0, 1.0, 0.0).transform_mat4(m4), vec4(1.0, 1.0, 1.0, 0.0));

        // Perspective divide by W.
        let scale_w = Mat4f::from_diagonal([1.0, 1.0, 1.0, 2.0]);
        assert_eq!(vec3(2.0, 4.0, 6.0).transform_mat4(scale_w), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn transform_quat_matches_matrix() {
        let q = Quatf::from_axis_angle(vec3(1.0, 2.0, 3.0).normalize(), 0.7);
        let m = Mat3f::from_quat(q);
        let v = vec3(-2.0, 0.5, 4.0);
        assert_approx_eq!(v.transform_quat(q), v.transform_mat3(m)).abs(1e-5);

        let v4 = v.extend(7.0);
        assert_approx_eq!(v4.transform_quat(q), (m * v).extend(7.0)).abs(1e-5);
    }

    #[test]
    fn random() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..100 {
            assert_approx_eq!(Vec2f::random_with(&mut rng, 2.0).length(), 2.0).abs(1e-5);
            assert_approx_eq!(Vec3f::random_with(&mut rng, 3.0).length(), 3.0).abs(1e-5);
            assert_approx_eq!(Vec4f::random_with(&mut rng, 0.5).length(), 0.5).abs(1e-5);
            assert!(Vec3::<f64>::random(1.0).length().approx_eq(&1.0));
        }

        // Same seed, same sequence.
        let a = Vec3f::random_with(&mut fastrand::Rng::with_seed(7), 1.0);
        let b = Vec3f::random_with(&mut fastrand::Rng::with_seed(7), 1.0);
        assert_eq!(a, b);
    }
}
