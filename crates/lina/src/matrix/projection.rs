//! Camera projection and view matrices.
//!
//! All builders follow the OpenGL conventions: right-handed view space with the camera looking
//! down the negative Z axis, and X/Y clip coordinates in `-1..=1`.

use crate::{Float, Matrix, Vec3};

/// The field of view of an asymmetric viewing frustum, as four angles in degrees measured from the
/// view direction.
///
/// This is the format used by VR runtimes to describe per-eye projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfView<T> {
    pub up_degrees: T,
    pub down_degrees: T,
    pub left_degrees: T,
    pub right_degrees: T,
}

impl<T> FieldOfView<T> {
    pub fn new(up_degrees: T, down_degrees: T, left_degrees: T, right_degrees: T) -> Self {
        Self {
            up_degrees,
            down_degrees,
            left_degrees,
            right_degrees,
        }
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Creates a perspective projection for the frustum with the given bounds.
    ///
    /// `left`, `right`, `bottom` and `top` describe the frustum's cross section at the near plane.
    pub fn frustum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::two();
        let rl = T::ONE / (right - left);
        let tb = T::ONE / (top - bottom);
        let nf = T::ONE / (near - far);
        let o = T::ZERO;

        #[rustfmt::skip]
        let m = Self::from_columns([
            [near * two * rl, o, o, o],
            [o, near * two * tb, o, o],
            [(right + left) * rl, (top + bottom) * tb, (far + near) * nf, -T::ONE],
            [o, o, far * near * two * nf, o],
        ]);
        m
    }

    /// Creates a symmetric perspective projection.
    ///
    /// `fovy` is the vertical field of view in radians. If `far` is [`None`] or infinite, the far
    /// plane is placed at infinity.
    ///
    /// Depth is mapped to `-1..=1` (near to far).
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let proj = Mat4f::perspective(FRAC_PI_2, 1.0, 1.0, Some(10.0));
    /// let near = vec3(0.0, 0.0, -1.0).transform_mat4(proj);
    /// let far = vec3(0.0, 0.0, -10.0).transform_mat4(proj);
    /// assert_approx_eq!(near, vec3(0.0, 0.0, -1.0)).abs(1e-6);
    /// assert_approx_eq!(far, vec3(0.0, 0.0, 1.0)).abs(1e-6);
    /// ```
    pub fn perspective(fovy: T, aspect: T, near: T, far: Option<T>) -> Self {
        let two = T::two();
        let f = T::ONE / (fovy / two).tan();
        let (z, w) = match far.filter(|far| far.to_f64().is_finite()) {
            Some(far) => {
                let nf = T::ONE / (near - far);
                ((far + near) * nf, two * far * near * nf)
            }
            None => (-T::ONE, -two * near),
        };
        let o = T::ZERO;

        #[rustfmt::skip]
        let m = Self::from_columns([
            [f / aspect, o, o, o],
            [o, f, o, o],
            [o, o, z, -T::ONE],
            [o, o, w, o],
        ]);
        m
    }

    /// Creates a perspective projection from an asymmetric field of view.
    ///
    /// Unlike [`Matrix::perspective`], depth is mapped to `0..=1` (near to far).
    pub fn perspective_from_fov(fov: FieldOfView<T>, near: T, far: T) -> Self {
        let tan = |degrees: T| T::from_f64(lina_utils::radians(degrees.to_f64())).tan();
        let up = tan(fov.up_degrees);
        let down = tan(fov.down_degrees);
        let left = tan(fov.left_degrees);
        let right = tan(fov.right_degrees);
        let x_scale = T::two() / (left + right);
        let y_scale = T::two() / (up + down);
        let o = T::ZERO;

        #[rustfmt::skip]
        let m = Self::from_columns([
            [x_scale, o, o, o],
            [o, y_scale, o, o],
            [
                -((left - right) * x_scale * T::half()),
                (up - down) * y_scale * T::half(),
                far / (near - far),
                -T::ONE,
            ],
            [o, o, far * near / (near - far), o],
        ]);
        m
    }

    /// Creates an orthographic projection for the given view volume.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let proj = Mat4f::ortho(0.0, 2.0, 0.0, 2.0, 0.0, 2.0);
    /// assert_eq!(vec3(2.0, 2.0, -2.0).transform_mat4(proj), vec3(1.0, 1.0, 1.0));
    /// assert_eq!(vec3(0.0, 0.0, 0.0).transform_mat4(proj), vec3(-1.0, -1.0, -1.0));
    /// ```
    pub fn ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::two();
        let lr = T::ONE / (left - right);
        let bt = T::ONE / (bottom - top);
        let nf = T::ONE / (near - far);
        let o = T::ZERO;

        #[rustfmt::skip]
        let m = Self::from_columns([
            [-two * lr, o, o, o],
            [o, -two * bt, o, o],
            [o, o, two * nf, o],
            [(left + right) * lr, (top + bottom) * bt, (far + near) * nf, T::ONE],
        ]);
        m
    }

    /// Creates a view matrix for a camera at `eye` looking at `center`.
    ///
    /// `up` does not need to be normalized or perpendicular to the view direction. If `eye` and
    /// `center` (almost) coincide, there is no view direction, and the identity matrix is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lina::*;
    /// let view = Mat4f::look_at(vec3(0.0, 0.0, 5.0), Vec3f::ZERO, Vec3f::Y);
    /// assert_eq!(view, Mat4f::from_translation(vec3(0.0, 0.0, -5.0)));
    /// ```
    pub fn look_at(eye: Vec3<T>, center: Vec3<T>, up: Vec3<T>) -> Self {
        let delta = eye - center;
        if delta.as_array().iter().all(|d| d.abs() < T::EPSILON) {
            log::trace!("look_at: eye {:?} coincides with center, using identity", eye);
            return Self::IDENTITY;
        }

        let z = delta.normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x).normalize();

        Self::from_rows([
            x.extend(-x.dot(eye)),
            y.extend(-y.dot(eye)),
            z.extend(-z.dot(eye)),
            Vec3::ZERO.extend(T::ONE),
        ])
    }

    /// Creates a transform that places an object at `eye` and orients it towards `target`.
    ///
    /// This is the inverse of [`Matrix::look_at`]: it maps view space back to world space.
    pub fn target_to(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self {
        let z = (eye - target).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x);

        Self::from_columns([
            x.extend(T::ZERO),
            y.extend(T::ZERO),
            z.extend(T::ZERO),
            eye.extend(T::ONE),
        ])
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use crate::{assert_approx_eq, test::init_logger, vec3, Mat4f, SquareMatrix, Vec3f};

    use super::FieldOfView;

    #[test]
    fn frustum_matches_perspective() {
        let frustum = Mat4f::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        let perspective = Mat4f::perspective(FRAC_PI_2, 1.0, 1.0, Some(10.0));
        assert_approx_eq!(frustum, perspective).abs(1e-6);
    }

    #[test]
    fn infinite_perspective() {
        let proj = Mat4f::perspective(FRAC_PI_2, 2.0, 0.5, None);
        assert_eq!(proj[(2, 2)], -1.0);
        assert_eq!(proj[(2, 3)], -1.0);
        assert_eq!(proj[(3, 2)], -1.0);
        assert_approx_eq!(proj[(0, 0)], 0.5).abs(1e-6);

        // The near plane still maps to -1.
        let near = vec3(0.0, 0.0, -0.5).transform_mat4(proj);
        assert_approx_eq!(near.z, -1.0);

        let unbounded = Mat4f::perspective(FRAC_PI_2, 2.0, 0.5, Some(f32::INFINITY));
        assert_eq!(unbounded, proj);
    }

    #[test]
    fn perspective_from_fov() {
        let fov = FieldOfView::new(45.0, 45.0, 45.0, 45.0);
        let proj = Mat4f::perspective_from_fov(fov, 1.0, 10.0);
        assert_approx_eq!(proj[(0, 0)], 1.0).abs(1e-6);
        assert_approx_eq!(proj[(1, 1)], 1.0).abs(1e-6);
        assert_approx_eq!(proj[(0, 2)], 0.0).abs(1e-6);
        assert_eq!(proj[(3, 3)], 0.0);

        let near = vec3(0.0, 0.0, -1.0).transform_mat4(proj);
        let far = vec3(0.0, 0.0, -10.0).transform_mat4(proj);
        assert_approx_eq!(near.z, 0.0).abs(1e-6);
        assert_approx_eq!(far.z, 1.0).abs(1e-6);

        // Asymmetric frustums shift the center of projection.
        let fov = FieldOfView::new(30.0, 30.0, 20.0, 40.0);
        let proj = Mat4f::perspective_from_fov(fov, 1.0, 10.0);
        assert!(proj[(0, 2)] > 0.0);
        assert_approx_eq!(proj[(1, 2)], 0.0).abs(1e-6);
    }

    #[test]
    fn ortho() {
        let proj = Mat4f::ortho(-2.0, 2.0, -1.0, 1.0, 0.1, 100.0);
        let p = vec3(2.0, -1.0, -0.1).transform_mat4(proj);
        assert_approx_eq!(p, vec3(1.0, -1.0, -1.0)).abs(1e-6);
        let p = vec3(0.0, 0.0, -100.0).transform_mat4(proj);
        assert_approx_eq!(p, vec3(0.0, 0.0, 1.0)).abs(1e-6);
    }

    #[test]
    fn look_at() {
        init_logger();

        let eye = vec3(1.0, 2.0, 3.0);
        let view = Mat4f::look_at(eye, Vec3f::ZERO, Vec3f::Y);
        assert_approx_eq!(eye.transform_mat4(view), Vec3f::ZERO).abs(1e-6);
        // The center ends up straight ahead, along -Z.
        let center = Vec3f::ZERO.transform_mat4(view);
        assert_approx_eq!(center, vec3(0.0, 0.0, -eye.length())).abs(1e-5);

        let target_to = Mat4f::target_to(eye, Vec3f::ZERO, Vec3f::Y);
        assert_approx_eq!(target_to, view.invert().unwrap()).abs(1e-5);
    }

    #[test]
    fn look_at_degenerate() {
        init_logger();

        let eye = vec3(1.0, 1.0, 1.0);
        assert_eq!(Mat4f::look_at(eye, eye, Vec3f::Y), Mat4f::IDENTITY);
        assert_eq!(
            Mat4f::look_at(eye, eye + vec3(1e-8, 0.0, 0.0), Vec3f::Y),
            Mat4f::IDENTITY
        );
    }
}
