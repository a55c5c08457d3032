//! Matrix creation functions analogous to `np.zeros`, `np.eye`, `np.diag`.

use super::Matrix;

impl Matrix {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    ///
    /// ```
    /// # use echelon_core::matrix::Matrix;
    /// let z = Matrix::zeros(2, 3);
    /// assert_eq!(z.shape(), (2, 3));
    /// assert!(z.as_slice().iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        assert!(nrows > 0 && ncols > 0, "matrix dimensions must be non-zero");
        Self {
            data: vec![0.0; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// # use echelon_core::matrix::Matrix;
    /// let eye = Matrix::eye(3);
    /// assert_eq!(eye[(0, 0)], 1.0);
    /// assert_eq!(eye[(0, 1)], 0.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Create a square diagonal matrix with `values` on the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn diag(values: &[f64]) -> Self {
        let n = values.len();
        let mut m = Self::zeros(n, n);
        for (i, &v) in values.iter().enumerate() {
            m.data[i * n + i] = v;
        }
        m
    }
}
