use super::ApproxEq;

macro_rules! float_approx_eq {
    ($($ty:ty),+) => {
        $(
            impl ApproxEq for $ty {
                type Tolerance = Self;

                fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
                        return self == other;
                    }

                    let diff = (self - other).abs();
                    diff <= abs_tolerance
                }

                fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        return self == other;
                    }

                    let abs_diff = (self - other).abs();
                    let largest = Self::max(self.abs(), other.abs());

                    abs_diff <= largest * rel_tolerance
                }

                fn scaled_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        return self == other;
                    }

                    let abs_diff = (self - other).abs();
                    let largest = Self::max(1.0, Self::max(self.abs(), other.abs()));

                    abs_diff <= largest * tolerance
                }

                fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
                    if self.is_sign_negative() != other.is_sign_negative() {
                        return self == other; // `-0.0` == `+0.0`
                    }

                    if self.is_nan() || other.is_nan() {
                        return false;
                    }

                    let diff = self.to_bits().abs_diff(other.to_bits());
                    diff <= ulps_tolerance.into()
                }
            }
        )+
    };
}
float_approx_eq!(f32, f64);

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &U, abs_tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &U, rel_tolerance: Self::Tolerance) -> bool {
        T::rel_diff_eq(self, other, rel_tolerance)
    }

    fn scaled_diff_eq(&self, other: &U, tolerance: Self::Tolerance) -> bool {
        T::scaled_diff_eq(self, other, tolerance)
    }

    fn ulps_diff_eq(&self, other: &U, ulps_tolerance: u32) -> bool {
        T::ulps_diff_eq(self, other, ulps_tolerance)
    }
}

/// Slices of different lengths are never equal.
impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], abs_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], rel_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }

    fn scaled_diff_eq(&self, other: &[U], tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.scaled_diff_eq(b, tolerance))
    }

    fn ulps_diff_eq(&self, other: &[U], ulps_tolerance: u32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], rel_tolerance: Self::Tolerance) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }

    fn scaled_diff_eq(&self, other: &[U; N], tolerance: Self::Tolerance) -> bool {
        self.as_slice().scaled_diff_eq(other.as_slice(), tolerance)
    }

    fn ulps_diff_eq(&self, other: &[U; N], ulps_tolerance: u32) -> bool {
        self.as_slice()
            .ulps_diff_eq(other.as_slice(), ulps_tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<Vec<U>> for Vec<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Vec<U>, abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Vec<U>, rel_tolerance: Self::Tolerance) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }

    fn scaled_diff_eq(&self, other: &Vec<U>, tolerance: Self::Tolerance) -> bool {
        self.as_slice().scaled_diff_eq(other.as_slice(), tolerance)
    }

    fn ulps_diff_eq(&self, other: &Vec<U>, ulps_tolerance: u32) -> bool {
        self.as_slice()
            .ulps_diff_eq(other.as_slice(), ulps_tolerance)
    }
}
