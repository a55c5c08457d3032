//! Bases for the four fundamental subspaces, read off the RREF.
//!
//! Every basis is returned as a list of vectors. Column-space vectors have
//! length `nrows` (they are columns of the original matrix); null-space and
//! row-space vectors have length `ncols`.

use super::echelon::{leading_columns, rref};
use crate::config::EPS;
use crate::matrix::Matrix;

/// Basis of the null space of `m`, one vector per free column.
///
/// Each vector has `1` in its free position and, for every pivot row, the
/// negated RREF coefficient of that free column in the pivot position. When
/// there are no free columns the trivial basis `[[0, ..., 0]]` is returned.
///
/// ```
/// # use echelon_core::matrix::Matrix;
/// # use echelon_core::linalg::null_space;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
/// assert_eq!(null_space(&a), vec![vec![-2.0, 1.0]]);
/// ```
pub fn null_space(m: &Matrix) -> Vec<Vec<f64>> {
    let num_cols = m.ncols();
    let reduced = rref(m);
    let pivots = leading_columns(&reduced);

    let basis: Vec<Vec<f64>> = (0..num_cols)
        .filter(|j| !pivots.contains(j))
        .map(|free| {
            let mut v = vec![0.0; num_cols];
            v[free] = 1.0;
            for (i, &p) in pivots.iter().enumerate() {
                v[p] = -reduced[(i, free)];
            }
            v
        })
        .collect();

    if basis.is_empty() {
        vec![vec![0.0; num_cols]]
    } else {
        basis
    }
}

/// Basis of the column space: the pivot columns of the original matrix.
///
/// ```
/// # use echelon_core::matrix::Matrix;
/// # use echelon_core::linalg::col_space;
/// let a = Matrix::from_rows(&[[1.0, 2.0, 0.0], [2.0, 4.0, 1.0]]).unwrap();
/// assert_eq!(col_space(&a), vec![vec![1.0, 2.0], vec![0.0, 1.0]]);
/// ```
pub fn col_space(m: &Matrix) -> Vec<Vec<f64>> {
    leading_columns(&rref(m))
        .into_iter()
        .map(|j| m.column(j))
        .collect()
}

/// Basis of the row space: the nonzero rows of the RREF.
pub fn row_space(m: &Matrix) -> Vec<Vec<f64>> {
    rref(m)
        .rows()
        .filter(|row| row.iter().any(|x| x.abs() > EPS))
        .map(<[f64]>::to_vec)
        .collect()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::linalg::matrix_times_vector;

    fn mat(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_null_space_vectors_are_annihilated() {
        let a = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        let basis = null_space(&a);
        assert_eq!(basis.len(), 1);
        for v in &basis {
            let av = matrix_times_vector(&a, v).unwrap();
            assert!(av.iter().all(|x| x.abs() < 1e-10));
        }
        // Free column is the last one, so its entry is exactly 1.
        assert_eq!(basis[0][2], 1.0);
    }

    #[test]
    fn test_null_space_multiple_free_columns() {
        let a = mat(&[&[1.0, 2.0, 0.0, 3.0]]);
        let basis = null_space(&a);
        assert_eq!(
            basis,
            vec![
                vec![-2.0, 1.0, 0.0, 0.0],
                vec![-0.0, 0.0, 1.0, 0.0],
                vec![-3.0, 0.0, 0.0, 1.0],
            ]
        );
    }

    #[test]
    fn test_null_space_trivial() {
        let basis = null_space(&Matrix::eye(3));
        assert_eq!(basis, vec![vec![0.0; 3]]);
    }

    #[test]
    fn test_col_space_uses_original_columns() {
        let a = mat(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 7.0], &[3.0, 6.0, 10.0]]);
        let basis = col_space(&a);
        assert_eq!(basis, vec![vec![1.0, 2.0, 3.0], vec![3.0, 7.0, 10.0]]);
    }

    #[test]
    fn test_col_space_vector_length_is_nrows() {
        let a = mat(&[&[1.0, 0.0, 2.0, 1.0], &[0.0, 1.0, 1.0, 1.0]]);
        let basis = col_space(&a);
        assert_eq!(basis.len(), 2);
        assert!(basis.iter().all(|v| v.len() == 2));
    }

    #[test]
    fn test_row_space() {
        let a = mat(&[&[1.0, 2.0], &[2.0, 4.0], &[0.0, 1.0]]);
        let basis = row_space(&a);
        assert_eq!(basis.len(), 2);
        assert!(basis.iter().all(|v| v.len() == 2));
        assert_eq!(basis[0], vec![1.0, 0.0]);
        assert_eq!(basis[1], vec![0.0, 1.0]);
    }

    #[test]
    fn test_row_space_zero_matrix() {
        assert!(row_space(&Matrix::zeros(2, 2)).is_empty());
    }
}
