//! Determinant, inverse and linear solve by Gaussian elimination with
//! partial pivoting.
//!
//! At step `i` the row at or below `i` with the largest `|a[r][i]|` is
//! swapped into place before eliminating. A pivot below [`EPS`] means the
//! matrix is singular: [`det`] reports `0.0`, [`inverse`] fails with
//! [`LinalgError::SingularMatrix`].

use log::debug;

use crate::config::EPS;
use crate::error::{LinalgError, Result};
use crate::linalg::blas::matrix_times_vector;
use crate::matrix::Matrix;
use crate::validate::{ensure_square, validate_vector};

/// Index of the row in `start..n` with the largest magnitude in `col`.
fn partial_pivot(a: &Matrix, start: usize, col: usize) -> usize {
    let mut best = start;
    for r in (start + 1)..a.nrows() {
        if a[(r, col)].abs() > a[(best, col)].abs() {
            best = r;
        }
    }
    best
}

/// Determinant of a square matrix.
///
/// Singular input yields exactly `0.0` rather than an error.
///
/// ```
/// # use echelon_core::matrix::Matrix;
/// # use echelon_core::linalg::det;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert!((det(&a).unwrap() - -2.0).abs() < 1e-12);
/// let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
/// assert_eq!(det(&singular).unwrap(), 0.0);
/// ```
pub fn det(m: &Matrix) -> Result<f64> {
    let n = ensure_square(m)?;
    let mut a = m.clone();
    let mut det = 1.0;

    for i in 0..n {
        let pivot_row = partial_pivot(&a, i, i);
        if pivot_row != i {
            a.swap_rows(i, pivot_row);
            det = -det;
        }

        let pivot = a[(i, i)];
        if pivot.abs() < EPS {
            debug!("det: pivot {pivot:e} at step {i} is below tolerance, matrix is singular");
            return Ok(0.0);
        }

        for r in (i + 1)..n {
            let factor = a[(r, i)] / pivot;
            a.sub_row_multiple(r, i, factor);
        }

        det *= pivot;
    }

    Ok(det)
}

/// Inverse of a square matrix by Gauss-Jordan elimination on `[A | I]`.
///
/// ```
/// # use echelon_core::matrix::Matrix;
/// # use echelon_core::linalg::inverse;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let inv = inverse(&a).unwrap();
/// let expected = Matrix::from_rows(&[[-2.0, 1.0], [1.5, -0.5]]).unwrap();
/// assert!(inv.approx_eq(&expected, 1e-12));
/// ```
pub fn inverse(m: &Matrix) -> Result<Matrix> {
    let n = ensure_square(m)?;

    let mut aug = Matrix::zeros(n, 2 * n);
    for i in 0..n {
        aug.row_mut(i)[..n].copy_from_slice(m.row(i));
        aug[(i, n + i)] = 1.0;
    }

    for i in 0..n {
        let pivot_row = partial_pivot(&aug, i, i);
        aug.swap_rows(i, pivot_row);

        let pivot = aug[(i, i)];
        if pivot.abs() < EPS {
            return Err(LinalgError::SingularMatrix);
        }

        for x in aug.row_mut(i) {
            *x /= pivot;
        }

        for r in 0..n {
            if r != i {
                let factor = aug[(r, i)];
                aug.sub_row_multiple(r, i, factor);
            }
        }
    }

    let data: Vec<f64> = aug.rows().flat_map(|row| row[n..].iter().copied()).collect();
    Matrix::from_vec(data, n, n)
}

/// Solve `Ax = b` as `inverse(A) @ b`.
///
/// ```
/// # use echelon_core::matrix::Matrix;
/// # use echelon_core::linalg::solve_system;
/// let a = Matrix::from_rows(&[[2.0, 0.0], [0.0, 2.0]]).unwrap();
/// assert_eq!(solve_system(&a, &[4.0, 6.0]).unwrap(), vec![2.0, 3.0]);
/// ```
pub fn solve_system(a: &Matrix, b: &[f64]) -> Result<Vec<f64>> {
    let n = ensure_square(a)?;
    let len = validate_vector(b)?;
    if n != len {
        return Err(LinalgError::DimensionMismatch {
            expected: vec![n],
            got: vec![len],
        });
    }
    matrix_times_vector(&inverse(a)?, b)
}

impl Matrix {
    pub fn det(&self) -> Result<f64> {
        det(self)
    }

    pub fn inverse(&self) -> Result<Matrix> {
        inverse(self)
    }

    /// Solve `self * x = b`.
    pub fn solve(&self, b: &[f64]) -> Result<Vec<f64>> {
        solve_system(self, b)
    }
}
