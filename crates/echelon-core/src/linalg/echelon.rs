//! Gauss-Jordan row reduction and the quantities read off its output.
//!
//! [`rref`] is the shared primitive behind rank, nullity, linear
//! independence and the subspace bases in [`super::subspace`].

use log::trace;

use crate::config::EPS;
use crate::matrix::Matrix;

/// Reduced row-echelon form of `m`.
///
/// Columns are processed left to right with a cursor on the next pivot row.
/// The first entry at or below the cursor with magnitude above [`EPS`]
/// becomes the pivot; columns without one are skipped. The pivot row is
/// scaled so the pivot is exactly `1`, and the column is cleared in every
/// other row, above and below.
///
/// ```
/// # use echelon_core::matrix::Matrix;
/// # use echelon_core::linalg::rref;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
/// let r = rref(&a);
/// assert_eq!(r.to_rows(), vec![vec![1.0, 2.0], vec![0.0, 0.0]]);
/// ```
#[must_use]
pub fn rref(m: &Matrix) -> Matrix {
    let (num_rows, num_cols) = m.shape();
    let mut a = m.clone();
    let mut cursor = 0;

    for c in 0..num_cols {
        let Some(pivot_row) = (cursor..num_rows).find(|&r| a[(r, c)].abs() > EPS) else {
            continue;
        };
        trace!("rref: column {c} pivots on row {pivot_row}");

        a.swap_rows(cursor, pivot_row);

        let pivot = a[(cursor, c)];
        for x in a.row_mut(cursor) {
            *x /= pivot;
        }

        for r in 0..num_rows {
            if r != cursor {
                let factor = a[(r, c)];
                a.sub_row_multiple(r, cursor, factor);
            }
        }

        cursor += 1;
        if cursor >= num_rows {
            break;
        }
    }

    a
}

/// Column index of the leading nonzero entry of each nonzero row of
/// `rref(m)`, in row order.
pub fn pivot_columns(m: &Matrix) -> Vec<usize> {
    leading_columns(&rref(m))
}

pub(crate) fn leading_columns(reduced: &Matrix) -> Vec<usize> {
    reduced
        .rows()
        .filter_map(|row| row.iter().position(|x| x.abs() > EPS))
        .collect()
}

/// Number of rows of `rref(m)` with at least one entry above [`EPS`].
pub fn rank(m: &Matrix) -> usize {
    rref(m)
        .rows()
        .filter(|row| row.iter().any(|x| x.abs() > EPS))
        .count()
}

/// Nullity: `ncols - rank`.
pub fn null(m: &Matrix) -> usize {
    m.ncols() - rank(m)
}

/// Whether the columns of `m` are linearly independent.
pub fn lin_ind(m: &Matrix) -> bool {
    rank(m) == m.ncols()
}

impl Matrix {
    #[must_use]
    pub fn rref(&self) -> Matrix {
        rref(self)
    }

    pub fn rank(&self) -> usize {
        rank(self)
    }
}
