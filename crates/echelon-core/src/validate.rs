//! Shape checks run before any kernel touches its inputs.
//!
//! Nested-row input is checked once, when it becomes a [`Matrix`]; after
//! that the non-empty and rectangular invariants hold by construction, and
//! kernels only need [`ensure_square`] and [`validate_vector`].

use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

/// Check that `rows` describes a non-empty rectangular matrix.
///
/// Returns `(num_rows, num_cols)`.
///
/// ```
/// # use echelon_core::validate::validate_matrix;
/// assert_eq!(validate_matrix(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap(), (2, 2));
/// assert!(validate_matrix::<Vec<f64>>(&[]).is_err());
/// assert!(validate_matrix(&[vec![1.0], vec![2.0, 3.0]]).is_err());
/// ```
pub fn validate_matrix<R: AsRef<[f64]>>(rows: &[R]) -> Result<(usize, usize)> {
    let Some(first) = rows.first() else {
        return Err(LinalgError::Shape {
            reason: "matrix cannot be empty",
        });
    };
    let num_cols = first.as_ref().len();
    if num_cols == 0 {
        return Err(LinalgError::Shape {
            reason: "matrix cannot have empty rows",
        });
    }
    if rows.iter().any(|r| r.as_ref().len() != num_cols) {
        return Err(LinalgError::Shape {
            reason: "matrix must have consistent row lengths",
        });
    }
    Ok((rows.len(), num_cols))
}

/// Like [`validate_matrix`], additionally requiring as many rows as columns.
///
/// Returns the side length.
pub fn validate_square_matrix<R: AsRef<[f64]>>(rows: &[R]) -> Result<usize> {
    let (num_rows, num_cols) = validate_matrix(rows)?;
    if num_rows != num_cols {
        return Err(LinalgError::Shape {
            reason: "matrix must be square",
        });
    }
    Ok(num_rows)
}

/// Square-matrix gate for an already constructed [`Matrix`].
pub fn ensure_square(m: &Matrix) -> Result<usize> {
    if !m.is_square() {
        return Err(LinalgError::Shape {
            reason: "matrix must be square",
        });
    }
    Ok(m.nrows())
}

/// Check that `v` has at least one element. Returns its length.
pub fn validate_vector(v: &[f64]) -> Result<usize> {
    if v.is_empty() {
        return Err(LinalgError::Shape {
            reason: "vector cannot be empty",
        });
    }
    Ok(v.len())
}
