//! QR decomposition via classical Gram-Schmidt.
//!
//! Decomposes an `m x n` matrix `A` with linearly independent columns into
//! `A = QR` where:
//! - `Q` is `m x n` with orthonormal columns
//! - `R` is `n x n` upper triangular with a positive diagonal

use crate::config::EPS;
use crate::error::{LinalgError, Result};
use crate::linalg::blas::{axpy, dot_product, magnitude};
use crate::matrix::Matrix;

/// Result of a Gram-Schmidt QR decomposition.
#[derive(Debug, Clone)]
pub struct QrDecomposition {
    q: Matrix,
    r: Matrix,
}

impl QrDecomposition {
    /// Orthonormalize the columns of `a` in order.
    ///
    /// Column `i` has its projections onto the previous orthonormal columns
    /// removed (the coefficients fill `R`'s column `i` above the diagonal);
    /// the length of what remains is `R[i][i]`. A remainder shorter than
    /// [`EPS`] means the column is dependent and the decomposition fails
    /// with [`LinalgError::RankDeficient`].
    ///
    /// ```
    /// # use echelon_core::matrix::Matrix;
    /// # use echelon_core::linalg::decomp::QrDecomposition;
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    /// let qr = QrDecomposition::decompose(&a).unwrap();
    /// assert_eq!(qr.q().shape(), (3, 2));
    /// assert_eq!(qr.r().shape(), (2, 2));
    /// let back = qr.q().matmul(qr.r()).unwrap();
    /// assert!(back.approx_eq(&a, 1e-10));
    /// ```
    pub fn decompose(a: &Matrix) -> Result<Self> {
        let (m, n) = a.shape();
        let columns: Vec<Vec<f64>> = a.columns().collect();
        let mut q_cols: Vec<Vec<f64>> = Vec::with_capacity(n);
        let mut r = Matrix::zeros(n, n);

        for (i, col) in columns.iter().enumerate() {
            let mut v = col.clone();
            for (j, qj) in q_cols.iter().enumerate() {
                let coeff = dot_product(qj, col)?;
                r[(j, i)] = coeff;
                axpy(-coeff, qj, &mut v)?;
            }

            let norm = magnitude(&v)?;
            if norm < EPS {
                return Err(LinalgError::RankDeficient { column: i });
            }
            r[(i, i)] = norm;

            for x in &mut v {
                *x /= norm;
            }
            q_cols.push(v);
        }

        let q = Matrix::from_columns(&q_cols)?;
        debug_assert_eq!(q.shape(), (m, n));
        Ok(Self { q, r })
    }

    /// The factor `Q` (`m x n`, orthonormal columns).
    pub fn q(&self) -> &Matrix {
        &self.q
    }

    /// The factor `R` (`n x n`, upper triangular).
    pub fn r(&self) -> &Matrix {
        &self.r
    }

    /// Consume the decomposition, returning `(Q, R)`.
    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.q, self.r)
    }
}

/// QR decomposition, returned as the pair `(Q, R)`.
pub fn qr(a: &Matrix) -> Result<(Matrix, Matrix)> {
    Ok(QrDecomposition::decompose(a)?.into_parts())
}
