//! Vector-space utilities: cross product, projection, change of basis.

use crate::config::EPS;
use crate::error::{LinalgError, Result};
use crate::linalg::blas::{dot_product, matrix_mult, scal};
use crate::linalg::elimination::inverse;
use crate::matrix::Matrix;
use crate::validate::{ensure_square, validate_vector};

/// Determinant of `[[a, b], [c, d]]`.
#[inline]
fn det2(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a * d - b * c
}

/// Cross product of two 3-vectors.
///
/// Each component is a signed 2x2 determinant of the other two coordinates.
///
/// ```
/// # use echelon_core::linalg::cross;
/// assert_eq!(cross(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]).unwrap(), [0.0, 0.0, 1.0]);
/// ```
pub fn cross(v1: &[f64], v2: &[f64]) -> Result<[f64; 3]> {
    validate_vector(v1)?;
    validate_vector(v2)?;
    let (&[x1, y1, z1], &[x2, y2, z2]) = (v1, v2) else {
        return Err(LinalgError::Shape {
            reason: "cross product requires 3-dimensional vectors",
        });
    };
    Ok([
        det2(y1, z1, y2, z2),
        -det2(x1, z1, x2, z2),
        det2(x1, y1, x2, y2),
    ])
}

/// Orthogonal projection of `a` onto the line spanned by `v`:
/// `(a . v / v . v) * v`.
///
/// ```
/// # use echelon_core::linalg::projection;
/// assert_eq!(projection(&[2.0, 3.0], &[1.0, 0.0]).unwrap(), vec![2.0, 0.0]);
/// ```
pub fn projection(a: &[f64], v: &[f64]) -> Result<Vec<f64>> {
    validate_vector(a)?;
    validate_vector(v)?;

    let v_dot_v = dot_product(v, v)?;
    if v_dot_v.abs() < EPS {
        return Err(LinalgError::ZeroVector);
    }

    let mut proj = v.to_vec();
    scal(dot_product(a, v)? / v_dot_v, &mut proj)?;
    Ok(proj)
}

/// Change-of-basis matrix from `old_basis` coordinates to `new_basis`
/// coordinates: `inverse(new_basis) @ old_basis`.
pub fn change_of_basis(old_basis: &Matrix, new_basis: &Matrix) -> Result<Matrix> {
    let n_old = ensure_square(old_basis)?;
    let n_new = ensure_square(new_basis)?;
    if n_old != n_new {
        return Err(LinalgError::Shape {
            reason: "bases must have the same dimension",
        });
    }
    matrix_mult(&inverse(new_basis)?, old_basis)
}
