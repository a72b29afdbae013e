//! Algebraic properties checked against randomly generated inputs.

use std::f32::consts::PI;

use lina::*;
use rayon::prelude::*;

const ITERATIONS: usize = 200;

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0x5eed)
}

fn random_matrix<const N: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, N, N> {
    Matrix::from_fn(|_, _| rng.f64() * 2.0 - 1.0)
}

/// Returns a random matrix whose determinant is not too close to zero.
fn random_invertible<const N: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, N, N>
where
    Matrix<f64, N, N>: SquareMatrix<Elem = f64>,
{
    loop {
        let m = random_matrix(rng);
        if m.determinant().abs() > 0.1 {
            return m;
        }
    }
}

macro_rules! square_matrix_properties {
    ($($name:ident: $n:literal),+ $(,)?) => {
        $(
            mod $name {
                use super::*;

                #[test]
                fn identity_is_neutral() {
                    let mut rng = rng();
                    for _ in 0..ITERATIONS {
                        let m = random_matrix::<$n>(&mut rng);
                        assert_eq!(Matrix::<f64, $n, $n>::identity() * m, m);
                        assert_eq!(m * Matrix::<f64, $n, $n>::identity(), m);
                    }
                }

                #[test]
                fn inverse_round_trip() -> anyhow::Result<()> {
                    let mut rng = rng();
                    for _ in 0..ITERATIONS {
                        let m = random_invertible::<$n>(&mut rng);
                        let inv = m.invert()?;
                        assert_approx_eq!(inv.invert()?, m).abs(1e-9);
                        assert_approx_eq!(m * inv, Matrix::identity()).abs(1e-9);

                        let mut in_place = m;
                        in_place.invert_in_place()?;
                        assert_eq!(in_place, inv);
                    }
                    Ok(())
                }

                #[test]
                fn failed_inversion_leaves_value_untouched() {
                    let mut m = random_matrix::<$n>(&mut rng());
                    m.set_column(0, Vector::<f64, $n>::ZERO);
                    let before = m;
                    assert_eq!(m.invert_in_place(), Err(Error::SingularMatrix));
                    assert_eq!(m, before);
                }

                #[test]
                fn transpose_is_involution() {
                    let mut rng = rng();
                    for _ in 0..ITERATIONS {
                        let m = random_matrix::<$n>(&mut rng);
                        assert_eq!(m.transpose().transpose(), m);

                        let mut aliased = m;
                        aliased.transpose_mut();
                        assert_eq!(aliased, m.transpose());
                        aliased.transpose_mut();
                        assert_eq!(aliased, m);
                    }
                }

                #[test]
                fn aliasing_is_harmless() {
                    let mut rng = rng();
                    for _ in 0..ITERATIONS {
                        let a = random_matrix::<$n>(&mut rng);
                        let b = random_matrix::<$n>(&mut rng);
                        let fresh = a * b;

                        let mut lhs = a;
                        lhs *= b;
                        let mut rhs = b;
                        rhs = a * rhs;
                        assert_eq!(lhs, fresh);
                        assert_eq!(rhs, fresh);

                        let mut sum = a;
                        sum += b;
                        assert_eq!(sum, a + b);
                        let mut difference = a;
                        difference -= b;
                        assert_eq!(difference, a - b);
                    }
                }

                #[test]
                fn determinant_is_multiplicative() {
                    let mut rng = rng();
                    for _ in 0..ITERATIONS {
                        let a = random_matrix::<$n>(&mut rng);
                        let b = random_matrix::<$n>(&mut rng);
                        assert_approx_eq!(
                            (a * b).determinant(),
                            a.determinant() * b.determinant()
                        )
                        .abs(1e-12);
                    }
                }

                #[test]
                fn adjoint_scales_identity() {
                    let mut rng = rng();
                    for _ in 0..ITERATIONS {
                        let m = random_matrix::<$n>(&mut rng);
                        let expected = Matrix::<f64, $n, $n>::identity() * m.determinant();
                        assert_approx_eq!(m * m.adjoint(), expected).abs(1e-12);
                    }
                }

                #[test]
                fn matches_slow_matrix() -> anyhow::Result<()> {
                    let mut rng = rng();
                    for _ in 0..ITERATIONS / 10 {
                        let m = random_invertible::<$n>(&mut rng);
                        let slow = SlowMatrix::from(m);
                        assert_approx_eq!(slow.determinant()?, m.determinant()).abs(1e-12);
                        assert_approx_eq!(slow.invert()?, SlowMatrix::from(m.invert()?)).abs(1e-9);
                        assert_approx_eq!(slow.adjoint()?, SlowMatrix::from(m.adjoint())).abs(1e-12);
                    }
                    Ok(())
                }
            }
        )+
    };
}

square_matrix_properties! {
    mat2: 2,
    mat3: 3,
    mat4: 4,
}

#[test]
fn quaternion_normalize_yields_unit_length() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = Quatf::from_components(
            rng.f32() * 4.0 - 2.0,
            rng.f32() * 4.0 - 2.0,
            rng.f32() * 4.0 - 2.0,
            rng.f32() * 4.0 - 2.0,
        );
        if q.length() < 0.01 {
            continue;
        }
        assert_approx_eq!(q.normalize().length(), 1.0).abs(1e-6);
    }
}

#[test]
fn slerp_properties() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = Quatf::random_with(&mut rng);
        let b = Quatf::random_with(&mut rng);
        let t = rng.f32();

        assert_approx_eq!(a.slerp(a, t), a).abs(1e-6);
        assert_approx_eq!(a.slerp(b, 0.0), a).abs(1e-6);

        // Rotations only: `b` and `-b` are the same, and slerp picks whichever is closer to `a`.
        let end = a.slerp(b, 1.0);
        let expected = if a.dot(b) < 0.0 { -b } else { b };
        assert_approx_eq!(end, expected).abs(1e-5);

        assert_approx_eq!(a.slerp(b, t).length(), 1.0).abs(1e-5);
    }
}

#[test]
fn rotation_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let axis = Vec3f::random_with(&mut rng, 1.0);
        let angle = rng.f32() * 2.0 * PI;
        let magnitude = rng.f32() * 10.0;
        let v = Vec3f::random_with(&mut rng, magnitude);

        let forward = Quatf::from_axis_angle(axis, angle);
        let backward = Quatf::from_axis_angle(axis, -angle);
        assert_approx_eq!(backward * (forward * v), v).abs(1e-4);
        assert_approx_eq!(Mat3f::from_quat(forward) * v, forward * v).abs(1e-4);
    }
}

#[test]
fn dual_quat_matches_matrix() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = Quatf::random_with(&mut rng);
        let t = Vec3f::random_with(&mut rng, 5.0);
        let p = Vec3f::random_with(&mut rng, 2.0);

        let dq = DualQuatf::from_rotation_translation(q, t);
        let m = Mat4f::from_rotation_translation(q, t);
        assert_approx_eq!(dq.transform_point(p).extend(1.0), m * p.extend(1.0)).abs(1e-4);
        assert_approx_eq!(dq.invert().transform_point(dq.transform_point(p)), p).abs(1e-4);
    }
}

#[test]
fn parallel_batch_transform() {
    let mut rng = rng();
    let m = Mat4f::from_rotation_translation_scale(
        Quatf::random_with(&mut rng),
        vec3(1.0, -2.0, 0.5),
        vec3(2.0, 2.0, 2.0),
    );
    let points: Vec<Vec3f> = (0..10_000)
        .map(|_| Vec3f::random_with(&mut rng, 3.0))
        .collect();

    let sequential: Vec<Vec3f> = points.iter().map(|&p| p.transform_mat4(m)).collect();

    // Every output slot is written by exactly one task.
    let mut parallel = vec![Vec3f::ZERO; points.len()];
    parallel
        .par_iter_mut()
        .zip(points.par_iter())
        .for_each(|(out, &p)| *out = p.transform_mat4(m));

    assert_eq!(parallel, sequential);
}

#[test]
fn identity_determinant() {
    assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
}

#[test]
fn invert_scaled_identity() -> anyhow::Result<()> {
    let m = Mat2f::from_columns([[2.0, 0.0], [0.0, 2.0]]);
    assert_eq!(m.invert()?, Mat2f::from_columns([[0.5, 0.0], [0.0, 0.5]]));
    Ok(())
}

#[test]
fn invert_zero_matrix_fails() {
    assert_eq!(Mat2f::ZERO.invert(), Err(Error::SingularMatrix));
    assert_eq!(Mat3f::ZERO.invert(), Err(Error::SingularMatrix));
    assert_eq!(Mat4f::ZERO.invert(), Err(Error::SingularMatrix));
    assert_eq!(Quatf::ZERO.invert(), Quatf::ZERO);
    assert_eq!(DualQuatf::ZERO.invert(), DualQuatf::ZERO);
}

#[test]
fn ragged_slow_matrix_fails() {
    let err = SlowMatrix::from_columns(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]).unwrap_err();
    assert_eq!(
        err,
        Error::PartialMatrix {
            column: 1,
            expected: 2,
            found: 3
        }
    );
    assert_eq!(err.to_string(), "column 1 has 3 elements, expected 2");
}

#[test]
fn dot_and_cross() {
    assert_eq!(vec3(1.0, 0.0, 0.0).dot(vec3(0.0, 1.0, 0.0)), 0.0);
    assert_eq!(
        vec3(1.0, 0.0, 0.0).cross(vec3(0.0, 1.0, 0.0)),
        vec3(0.0, 0.0, 1.0)
    );
}

#[test]
fn slerp_identity() {
    assert_approx_eq!(
        Quatf::IDENTITY.slerp(Quatf::IDENTITY, 0.5),
        Quatf::IDENTITY
    );
}

#[test]
fn tolerance_equality() {
    assert!(approx_equals(&1.0, &(1.0 + 1e-8)));
    assert!(!approx_equals(&1.0, &1.001));
    assert!(approx_equals(&1e6, &(1e6 + 0.05)));
    assert!(approx_equals(&vec3(1.0, 2.0, 3.0), &vec3(1.0, 2.0, 3.0 + 1e-7)));
    assert!(exact_equals(&0.5, &0.5));
    assert!(!exact_equals(&0.5, &(0.5 + 1e-7)));
}
