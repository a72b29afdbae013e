use std::{
    fmt,
    ops::{Add, AddAssign, Deref, DerefMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{approx::ApproxEq, vector::XYZW, Number, Quat, Vec3};

/// Gives `q.x`, `q.y`, `q.z` and `q.w` through the underlying vector.
impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    fn deref(&self) -> &XYZW<T> {
        &self.vec
    }
}

impl<T> DerefMut for Quat<T> {
    fn deref_mut(&mut self) -> &mut XYZW<T> {
        &mut self.vec
    }
}

/// Hamilton product. The rotation of `rhs` is applied first.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (ax, ay, az, aw) = (self.x, self.y, self.z, self.w);
        let (bx, by, bz, bw) = (rhs.x, rhs.y, rhs.z, rhs.w);

        #[rustfmt::skip]
        let q = Quat::from_components(
            ax * bw + aw * bx + ay * bz - az * by,
            ay * bw + aw * by + az * bx - ax * bz,
            az * bw + aw * bz + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        );
        q
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector.
impl<T: Number> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        rhs.transform_quat(self)
    }
}

/// Scales every component.
impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Quat::from_vec(self.into_vec() * rhs)
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Quat::from_vec(self.into_vec() + rhs.into_vec())
    }
}

impl<T: Number> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Quat::from_vec(self.into_vec() - rhs.into_vec())
    }
}

impl<T: Number> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Quat::from_vec(-self.into_vec())
    }
}

impl<T: PartialEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, tolerance)
    }

    fn scaled_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.vec.scaled_diff_eq(&other.vec, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, tolerance: u32) -> bool {
        self.vec.ulps_diff_eq(&other.vec, tolerance)
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quat({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
