//! Eigenvalues by unshifted QR iteration, eigenvectors by null space of the
//! shifted matrix, and diagonalization `A = P D P^-1`.
//!
//! The iteration only settles for matrices whose QR sequence converges to
//! (near-)diagonal form, e.g. real symmetric matrices with distinct
//! eigenvalues. Complex or defective spectra are not handled: the iteration
//! stalls or runs out of steps and returns whatever diagonal it reached.

use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{EPS, EigenOptions};
use crate::error::{LinalgError, Result};
use crate::linalg::blas::{magnitude, matrix_mult};
use crate::linalg::decomp::qr::QrDecomposition;
use crate::linalg::elimination::inverse;
use crate::linalg::subspace::null_space;
use crate::matrix::Matrix;
use crate::validate::ensure_square;

/// An eigenvalue with a basis of its eigenspace.
///
/// The basis is empty when no eigenvector could be extracted numerically,
/// and has more than one vector for a repeated eigenvalue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EigenPair {
    pub value: f64,
    pub basis: Vec<Vec<f64>>,
}

/// `A = P D P^-1`: columns of `P` are eigenvectors, `D` holds the matching
/// eigenvalues on its diagonal.
#[derive(Debug, Clone)]
pub struct Diagonalization {
    p: Matrix,
    d: Matrix,
    p_inv: Matrix,
}

impl Diagonalization {
    pub fn p(&self) -> &Matrix {
        &self.p
    }

    pub fn d(&self) -> &Matrix {
        &self.d
    }

    pub fn p_inv(&self) -> &Matrix {
        &self.p_inv
    }

    /// Consume the result, returning `(P, D, P^-1)`.
    pub fn into_parts(self) -> (Matrix, Matrix, Matrix) {
        (self.p, self.d, self.p_inv)
    }

    /// `P D P^-1`, which approximates the original matrix.
    pub fn reconstruct(&self) -> Result<Matrix> {
        matrix_mult(&matrix_mult(&self.p, &self.d)?, &self.p_inv)
    }
}

/// Eigenvalues of a square matrix with the default [`EigenOptions`].
///
/// ```
/// # use echelon_core::matrix::Matrix;
/// # use echelon_core::linalg::eigenvalues;
/// let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 2.0]]).unwrap();
/// let mut vals = eigenvalues(&a).unwrap();
/// vals.sort_by(f64::total_cmp);
/// assert!((vals[0] - 1.0).abs() < 1e-8);
/// assert!((vals[1] - 3.0).abs() < 1e-8);
/// ```
pub fn eigenvalues(m: &Matrix) -> Result<Vec<f64>> {
    eigenvalues_with(m, &EigenOptions::default())
}

/// Eigenvalues by the unshifted QR algorithm.
///
/// Repeats `A <- RQ` where `QR = A`. After each step the new diagonal is
/// compared entrywise with the previous one; when every change is below
/// `opts.tol` the new diagonal is returned. If `opts.max_iter` steps pass
/// without convergence, the last diagonal is returned anyway.
///
/// Fails with [`LinalgError::RankDeficient`] if an iterate is singular,
/// since Gram-Schmidt cannot factor it.
pub fn eigenvalues_with(m: &Matrix, opts: &EigenOptions) -> Result<Vec<f64>> {
    ensure_square(m)?;
    let mut a = m.clone();

    for iter in 0..opts.max_iter {
        let (q, r) = QrDecomposition::decompose(&a)?.into_parts();
        let next = matrix_mult(&r, &q)?;

        let converged = next
            .diagonal()
            .iter()
            .zip(a.diagonal())
            .all(|(new, old)| (new - old).abs() < opts.tol);
        a = next;

        if converged {
            debug!("eigenvalues: QR iteration converged after {} steps", iter + 1);
            return Ok(a.diagonal());
        }
    }

    warn!(
        "eigenvalues: QR iteration did not converge in {} steps, returning last diagonal",
        opts.max_iter
    );
    Ok(a.diagonal())
}

/// Basis of the eigenspace of `m` for `eigenvalue`: the null space of
/// `m - eigenvalue * I`.
///
/// An approximate eigenvalue often leaves the shifted matrix numerically
/// nonsingular; the result is then empty.
///
/// ```
/// # use echelon_core::matrix::Matrix;
/// # use echelon_core::linalg::eigenvector;
/// let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 2.0]]).unwrap();
/// assert_eq!(eigenvector(&a, 3.0).unwrap(), vec![vec![1.0, 1.0]]);
/// assert!(eigenvector(&a, 5.0).unwrap().is_empty());
/// ```
pub fn eigenvector(m: &Matrix, eigenvalue: f64) -> Result<Vec<Vec<f64>>> {
    let n = ensure_square(m)?;
    let mut shifted = m.clone();
    for i in 0..n {
        shifted[(i, i)] -= eigenvalue;
    }

    let mut basis = Vec::new();
    for v in null_space(&shifted) {
        if magnitude(&v)? > EPS {
            basis.push(v);
        }
    }
    Ok(basis)
}

/// Pair each eigenvalue of `m` with a basis of its eigenspace.
///
/// One pair per entry of [`eigenvalues`], in the same order. A repeated
/// eigenvalue appears once per repetition, each time with the full basis.
pub fn eigenvectors(m: &Matrix) -> Result<Vec<EigenPair>> {
    ensure_square(m)?;
    eigenvalues(m)?
        .into_iter()
        .map(|value| {
            let basis = eigenvector(m, value)?;
            Ok(EigenPair { value, basis })
        })
        .collect()
}

/// Diagonalize a square matrix as `P D P^-1`.
///
/// Every eigenspace basis vector becomes a column of `P`, with its
/// eigenvalue at the same position on `D`'s diagonal. A pair whose value
/// is identical to an earlier pair's has the same basis and is skipped, so
/// an eigenspace contributes its columns once. Fails with
/// [`LinalgError::NotDiagonalizable`] when the number of vectors found is
/// not the matrix size, and with [`LinalgError::SingularMatrix`] when `P`
/// cannot be inverted.
///
/// ```
/// # use echelon_core::matrix::Matrix;
/// # use echelon_core::linalg::diagonalize;
/// let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 2.0]]).unwrap();
/// let diag = diagonalize(&a).unwrap();
/// assert!(diag.reconstruct().unwrap().approx_eq(&a, 1e-6));
/// ```
pub fn diagonalize(m: &Matrix) -> Result<Diagonalization> {
    let n = ensure_square(m)?;

    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(n);
    let mut values: Vec<f64> = Vec::with_capacity(n);
    for pair in eigenvectors(m)? {
        if values.contains(&pair.value) {
            continue;
        }
        for v in pair.basis {
            columns.push(v);
            values.push(pair.value);
        }
    }
    debug!("diagonalize: collected {} eigenvectors for a {n}x{n} matrix", columns.len());

    if columns.len() != n {
        return Err(LinalgError::NotDiagonalizable {
            found: columns.len(),
            required: n,
        });
    }

    let p = Matrix::from_columns(&columns)?;
    let d = Matrix::diag(&values);
    let p_inv = inverse(&p)?;
    Ok(Diagonalization { p, d, p_inv })
}
