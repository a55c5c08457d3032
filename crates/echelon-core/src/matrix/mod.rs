//! Dense real matrix with contiguous row-major storage.
//!
//! [`Matrix`] is a value type: every kernel in [`crate::linalg`] borrows its
//! inputs and returns a freshly owned result, so a caller's matrix is never
//! modified behind its back. A `Matrix` always has at least one row and one
//! column; the nested-row constructors enforce this through
//! [`validate_matrix`](crate::validate::validate_matrix).

mod create;
mod display;

use core::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::EPS;
use crate::error::{LinalgError, Result};
use crate::validate::validate_matrix;

/// A dense `nrows x ncols` matrix of `f64`.
///
/// Cloning performs a deep copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Matrix {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a matrix from row-major data.
    ///
    /// Fails with a shape error if either dimension is zero or
    /// `rows * cols != data.len()`.
    pub fn from_vec(data: Vec<f64>, nrows: usize, ncols: usize) -> Result<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(LinalgError::Shape {
                reason: "matrix must have at least one row and one column",
            });
        }
        if nrows * ncols != data.len() {
            return Err(LinalgError::Shape {
                reason: "shape product does not match data length",
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix from nested rows.
    ///
    /// ```
    /// # use echelon_core::matrix::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert!(Matrix::from_rows::<Vec<f64>>(&[]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let (nrows, ncols) = validate_matrix(rows)?;
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix whose columns are the given vectors.
    ///
    /// This is how basis vectors are assembled into `P` during
    /// diagonalization.
    pub fn from_columns<C: AsRef<[f64]>>(columns: &[C]) -> Result<Self> {
        let (ncols, nrows) = validate_matrix(columns)?;
        let mut data = vec![0.0; nrows * ncols];
        for (j, col) in columns.iter().enumerate() {
            for (i, &v) in col.as_ref().iter().enumerate() {
                data[i * ncols + j] = v;
            }
        }
        Ok(Self { data, nrows, ncols })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume the matrix and return the underlying row-major `Vec<f64>`.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.nrows && col < self.ncols {
            Some(self.data[row * self.ncols + col])
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= nrows`.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Column `j` copied into a new vector.
    ///
    /// # Panics
    ///
    /// Panics if `j >= ncols`.
    pub fn column(&self, j: usize) -> Vec<f64> {
        assert!(j < self.ncols, "column index {j} out of bounds");
        (0..self.nrows).map(|i| self.data[i * self.ncols + j]).collect()
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.ncols)
    }

    /// Iterate over the columns, each copied into a new vector.
    pub fn columns(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.ncols).map(|j| self.column(j))
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// The main diagonal.
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.nrows.min(self.ncols))
            .map(|i| self.data[i * self.ncols + i])
            .collect()
    }

    // ------------------------------------------------------------------
    // In-place helpers for the elimination kernels
    // ------------------------------------------------------------------

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let start = i * self.ncols;
        &mut self.data[start..start + self.ncols]
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.ncols {
            self.data.swap(a * self.ncols + j, b * self.ncols + j);
        }
    }

    /// `row[target] -= factor * row[source]`, across every column.
    pub(crate) fn sub_row_multiple(&mut self, target: usize, source: usize, factor: f64) {
        let n = self.ncols;
        for j in 0..n {
            let s = self.data[source * n + j];
            self.data[target * n + j] -= factor * s;
        }
    }

    // ------------------------------------------------------------------
    // Map / compare
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new matrix.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Round every element to `decimals` places, flushing values within
    /// [`EPS`] of zero to `0.0` so results print without `-0.0` noise.
    ///
    /// ```
    /// # use echelon_core::matrix::Matrix;
    /// let m = Matrix::from_rows(&[[1.23456, -1e-12]]).unwrap();
    /// assert_eq!(m.round(2).as_slice(), &[1.23, 0.0]);
    /// ```
    #[must_use]
    pub fn round(&self, decimals: i32) -> Matrix {
        let scale = 10f64.powi(decimals);
        self.map(|x| {
            if x.abs() < EPS {
                0.0
            } else {
                (x * scale).round() / scale
            }
        })
    }

    /// Whether `other` has the same shape and every element differs by less
    /// than `tol`.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() < tol)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.nrows,
            self.ncols
        );
        &self.data[row * self.ncols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.nrows,
            self.ncols
        );
        &mut self.data[row * self.ncols + col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(&rows)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.column(2), vec![3.0, 6.0]);
    }

    #[test]
    fn test_from_vec_shape_mismatch() {
        assert!(Matrix::from_vec(vec![1.0, 2.0, 3.0], 2, 3).is_err());
        assert!(Matrix::from_vec(vec![], 0, 0).is_err());
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        let empty: Vec<Vec<f64>> = vec![];
        assert_eq!(
            Matrix::from_rows(&empty).unwrap_err().kind(),
            ErrorKind::Shape
        );
        let empty_row: Vec<Vec<f64>> = vec![vec![]];
        assert_eq!(
            Matrix::from_rows(&empty_row).unwrap_err().kind(),
            ErrorKind::Shape
        );
        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(Matrix::try_from(ragged).is_err());
    }

    #[test]
    fn test_from_columns() {
        let m = Matrix::from_columns(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.to_rows(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    }

    #[test]
    fn test_get_and_index() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(m.get(1, 1), Some(4.0));
        assert_eq!(m.get(2, 0), None);
        m[(0, 1)] = 9.0;
        assert_eq!(m[(0, 1)], 9.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let m = Matrix::eye(2);
        let _ = m[(2, 0)];
    }

    #[test]
    fn test_swap_and_sub_rows() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        m.swap_rows(0, 1);
        assert_eq!(m.as_slice(), &[3.0, 4.0, 1.0, 2.0]);
        m.sub_row_multiple(0, 1, 3.0);
        assert_eq!(m.as_slice(), &[0.0, -2.0, 1.0, 2.0]);
    }

    #[test]
    fn test_diagonal() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.diagonal(), vec![1.0, 5.0]);
    }

    #[test]
    fn test_round() {
        let m = Matrix::from_rows(&[[0.333_333, -2e-11], [1.5, -0.666_666]]).unwrap();
        assert_eq!(m.round(3).as_slice(), &[0.333, 0.0, 1.5, -0.667]);
    }

    #[test]
    fn test_approx_eq() {
        let a = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.0 + 1e-9, 2.0]]).unwrap();
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&b, 1e-12));
        assert!(!a.approx_eq(&Matrix::eye(2), 1.0));
    }
}
