//! Elementary operations on vectors and matrices, grouped by BLAS level.
//!
//! Every function validates its operands first and returns [`Result`] on
//! empty or incompatible inputs. Inputs are borrowed and never modified,
//! except for the explicit in-place L1 updates [`axpy`] and [`scal`].

use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;
use crate::validate::{ensure_square, validate_vector};

// ======================================================================
// BLAS Level 1: vector operations, O(n)
// ======================================================================

/// Inner (dot) product: `sum(x_i * y_i)`.
///
/// ```
/// # use echelon_core::linalg::dot_product;
/// let d = dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(d, 32.0);
/// ```
pub fn dot_product(x: &[f64], y: &[f64]) -> Result<f64> {
    check_vectors(x, y)?;
    Ok(x.iter().zip(y).map(|(a, b)| a * b).sum())
}

/// Euclidean norm: `sqrt(sum(x_i^2))`.
///
/// ```
/// # use echelon_core::linalg::magnitude;
/// assert_eq!(magnitude(&[3.0, 4.0]).unwrap(), 5.0);
/// ```
pub fn magnitude(x: &[f64]) -> Result<f64> {
    validate_vector(x)?;
    Ok(x.iter().map(|v| v * v).sum::<f64>().sqrt())
}

/// `y = alpha * x + y` (in-place update of `y`).
pub fn axpy(alpha: f64, x: &[f64], y: &mut [f64]) -> Result<()> {
    check_vectors(x, y)?;
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi += alpha * xi;
    }
    Ok(())
}

/// Scale a vector in place: `x = alpha * x`.
pub fn scal(alpha: f64, x: &mut [f64]) -> Result<()> {
    validate_vector(x)?;
    for v in x {
        *v *= alpha;
    }
    Ok(())
}

// ======================================================================
// BLAS Level 2: matrix-vector operations, O(n^2)
// ======================================================================

/// Matrix-vector product `A @ x`: the vector of row-wise dot products.
///
/// ```
/// # use echelon_core::matrix::Matrix;
/// # use echelon_core::linalg::matrix_times_vector;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(matrix_times_vector(&a, &[5.0, 6.0]).unwrap(), vec![17.0, 39.0]);
/// ```
pub fn matrix_times_vector(a: &Matrix, x: &[f64]) -> Result<Vec<f64>> {
    let len = validate_vector(x)?;
    if a.ncols() != len {
        return Err(LinalgError::DimensionMismatch {
            expected: vec![a.ncols()],
            got: vec![len],
        });
    }
    a.rows().map(|row| dot_product(row, x)).collect()
}

// ======================================================================
// BLAS Level 3: matrix-matrix operations, O(n^3)
// ======================================================================

/// Matrix-matrix product `A @ B`.
///
/// `A` is `m x k`, `B` must be `k x n`; the result is `m x n`.
///
/// ```
/// # use echelon_core::matrix::Matrix;
/// # use echelon_core::linalg::matrix_mult;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
/// let c = matrix_mult(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn matrix_mult(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let (m, k) = a.shape();
    let (kb, n) = b.shape();
    if kb != k {
        return Err(LinalgError::DimensionMismatch {
            expected: vec![k, n],
            got: vec![kb, n],
        });
    }

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let mut c = vec![0.0; m * n];

    // ijk loop order (row-major friendly for A and C)
    for i in 0..m {
        let a_row = i * k;
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a_data[a_row + p] * b_data[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }

    Matrix::from_vec(c, m, n)
}

// ======================================================================
// Structural operations
// ======================================================================

/// Transpose: the `ncols x nrows` matrix with `T[j][i] = M[i][j]`.
#[must_use]
pub fn transpose(m: &Matrix) -> Matrix {
    let (rows, cols) = m.shape();
    let src = m.as_slice();
    let mut out = Matrix::zeros(cols, rows);
    for r in 0..rows {
        for c in 0..cols {
            out[(c, r)] = src[r * cols + c];
        }
    }
    out
}

/// Sum of the diagonal entries of a square matrix.
pub fn trace(m: &Matrix) -> Result<f64> {
    ensure_square(m)?;
    Ok(m.diagonal().iter().sum())
}

// ======================================================================
// Convenience methods on Matrix
// ======================================================================

impl Matrix {
    /// Matrix-vector multiply: returns `self @ x`.
    pub fn matvec(&self, x: &[f64]) -> Result<Vec<f64>> {
        matrix_times_vector(self, x)
    }

    /// Matrix-matrix multiply: returns `self @ other`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        matrix_mult(self, other)
    }

    #[must_use]
    pub fn transpose(&self) -> Matrix {
        transpose(self)
    }

    pub fn trace(&self) -> Result<f64> {
        trace(self)
    }
}

// ======================================================================
// Internal helpers
// ======================================================================

fn check_vectors(x: &[f64], y: &[f64]) -> Result<()> {
    let len_x = validate_vector(x)?;
    let len_y = validate_vector(y)?;
    if len_x != len_y {
        return Err(LinalgError::DimensionMismatch {
            expected: vec![len_x],
            got: vec![len_y],
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn mat(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    // ------------------------------------------------------------------
    // BLAS L1
    // ------------------------------------------------------------------

    #[test]
    fn test_dot_basic() {
        assert_eq!(dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
    }

    #[test]
    fn test_dot_length_mismatch() {
        let err = dot_product(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    }

    #[test]
    fn test_dot_empty() {
        let err = dot_product(&[], &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_magnitude() {
        assert!((magnitude(&[3.0, 4.0]).unwrap() - 5.0).abs() < 1e-12);
        assert_eq!(magnitude(&[0.0, 0.0, 0.0]).unwrap(), 0.0);
        assert_eq!(magnitude(&[-7.0]).unwrap(), 7.0);
    }

    #[test]
    fn test_magnitude_numpy_reference() {
        // >>> np.linalg.norm([1, 2, 3, 4, 5])
        // 7.416198487095663
        let n = magnitude(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((n - 7.416_198_487_095_663).abs() < 1e-12);
    }

    #[test]
    fn test_axpy_and_scal() {
        let mut y = vec![10.0, 20.0, 30.0];
        axpy(2.0, &[1.0, 2.0, 3.0], &mut y).unwrap();
        assert_eq!(y, vec![12.0, 24.0, 36.0]);
        scal(0.5, &mut y).unwrap();
        assert_eq!(y, vec![6.0, 12.0, 18.0]);
        assert!(axpy(1.0, &[1.0], &mut y).is_err());
    }

    // ------------------------------------------------------------------
    // BLAS L2
    // ------------------------------------------------------------------

    #[test]
    fn test_matvec_rectangular() {
        let a = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(a.matvec(&[1.0, 0.0, 1.0]).unwrap(), vec![4.0, 10.0]);
    }

    #[test]
    fn test_matvec_dimension_mismatch() {
        let a = mat(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let err = matrix_times_vector(&a, &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
        let err = matrix_times_vector(&a, &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    // ------------------------------------------------------------------
    // BLAS L3
    // ------------------------------------------------------------------

    #[test]
    fn test_matmul_rectangular() {
        // Row 0: 1*7+2*9+3*11 = 58, 1*8+2*10+3*12 = 64
        // Row 1: 4*7+5*9+6*11 = 139, 4*8+5*10+6*12 = 154
        let a = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = mat(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_matmul_identity() {
        let a = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        assert_eq!(matrix_mult(&a, &Matrix::eye(3)).unwrap(), a);
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a = mat(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = mat(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        let err = matrix_mult(&a, &b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    }

    // ------------------------------------------------------------------
    // Structural
    // ------------------------------------------------------------------

    #[test]
    fn test_transpose() {
        let a = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.to_rows(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_trace() {
        let a = mat(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(trace(&a).unwrap(), 5.0);
        let wide = mat(&[&[1.0, 2.0, 3.0]]);
        assert_eq!(wide.trace().unwrap_err().kind(), ErrorKind::Shape);
    }
}
