//! LU decomposition without row interchanges (Doolittle).
//!
//! Decomposes a square matrix `A` into `A = LU` where:
//! - `L` is lower triangular with unit diagonal
//! - `U` is upper triangular
//!
//! There is no pivoting, so any matrix that needs a row swap to reach a
//! nonzero pivot is rejected with [`LinalgError::ZeroPivot`].

use crate::config::EPS;
use crate::error::{LinalgError, Result};
use crate::linalg::blas::dot_product;
use crate::matrix::Matrix;
use crate::validate::{ensure_square, validate_vector};

/// Result of an LU decomposition.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    l: Matrix,
    u: Matrix,
}

impl LuDecomposition {
    /// Factor a square matrix as `A = LU`.
    ///
    /// Row `i` of `U` is `A[i][j]` minus the dot product of the known part of
    /// `L`'s row `i` with `U`'s column `j`; column `i` of `L` below the
    /// diagonal is computed the same way and divided by `U[i][i]`.
    ///
    /// ```
    /// # use echelon_core::matrix::Matrix;
    /// # use echelon_core::linalg::decomp::LuDecomposition;
    /// let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 2.0]]).unwrap();
    /// let lu = LuDecomposition::decompose(&a).unwrap();
    /// assert_eq!(lu.l().to_rows(), vec![vec![1.0, 0.0], vec![0.5, 1.0]]);
    /// assert_eq!(lu.u().to_rows(), vec![vec![2.0, 1.0], vec![0.0, 1.5]]);
    /// ```
    pub fn decompose(a: &Matrix) -> Result<Self> {
        let n = ensure_square(a)?;
        let mut l = Matrix::zeros(n, n);
        let mut u = Matrix::zeros(n, n);

        for i in 0..n {
            for j in i..n {
                let sum: f64 = (0..i).map(|k| l[(i, k)] * u[(k, j)]).sum();
                u[(i, j)] = a[(i, j)] - sum;
            }

            let pivot = u[(i, i)];
            if pivot.abs() < EPS {
                return Err(LinalgError::ZeroPivot { index: i });
            }

            l[(i, i)] = 1.0;
            for j in (i + 1)..n {
                let sum: f64 = (0..i).map(|k| l[(j, k)] * u[(k, i)]).sum();
                l[(j, i)] = (a[(j, i)] - sum) / pivot;
            }
        }

        Ok(Self { l, u })
    }

    /// The unit lower triangular factor `L`.
    pub fn l(&self) -> &Matrix {
        &self.l
    }

    /// The upper triangular factor `U`.
    pub fn u(&self) -> &Matrix {
        &self.u
    }

    /// Consume the decomposition, returning `(L, U)`.
    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.l, self.u)
    }

    /// `det(A) = product(diag(U))`, since `det(L) = 1`.
    pub fn det(&self) -> f64 {
        self.u.diagonal().iter().product()
    }

    /// Solve `Ax = b` by forward substitution on `L` then back substitution
    /// on `U`.
    pub fn solve(&self, b: &[f64]) -> Result<Vec<f64>> {
        let n = self.u.nrows();
        let len = validate_vector(b)?;
        if len != n {
            return Err(LinalgError::DimensionMismatch {
                expected: vec![n],
                got: vec![len],
            });
        }

        // Ly = b
        let mut y = vec![0.0; n];
        for i in 0..n {
            let known = if i == 0 {
                0.0
            } else {
                dot_product(&self.l.row(i)[..i], &y[..i])?
            };
            y[i] = b[i] - known;
        }

        // Ux = y
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let known = if i + 1 == n {
                0.0
            } else {
                dot_product(&self.u.row(i)[i + 1..], &x[i + 1..])?
            };
            x[i] = (y[i] - known) / self.u[(i, i)];
        }

        Ok(x)
    }
}

/// LU decomposition of a square matrix, returned as the pair `(L, U)`.
pub fn lu(a: &Matrix) -> Result<(Matrix, Matrix)> {
    Ok(LuDecomposition::decompose(a)?.into_parts())
}
