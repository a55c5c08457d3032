//! Linear algebra operations.
//!
//! All routines are implemented from scratch on dense row-major [`Matrix`]
//! values and plain `f64` slices. No external BLAS/LAPACK bindings.
//!
//! | Module          | Operations                                              |
//! |-----------------|---------------------------------------------------------|
//! | [`blas`]        | `dot_product`, `magnitude`, `matrix_times_vector`, `matrix_mult`, `transpose` |
//! | [`echelon`]     | `rref`, `pivot_columns`, `rank`, `null`, `lin_ind`      |
//! | [`subspace`]    | `null_space`, `col_space`, `row_space`                  |
//! | [`elimination`] | `det`, `inverse`, `solve_system` (partial pivoting)     |
//! | [`space`]       | `cross`, `projection`, `change_of_basis`                |
//! | [`decomp`]      | LU, QR, eigenvalues and diagonalization                 |
//!
//! Every function takes its inputs by reference and returns freshly
//! allocated results; no input is ever modified.
//!
//! [`Matrix`]: crate::matrix::Matrix

pub mod blas;
pub mod decomp;
pub mod echelon;
pub mod elimination;
pub mod space;
pub mod subspace;

pub use blas::{
    axpy, dot_product, magnitude, matrix_mult, matrix_times_vector, scal, trace, transpose,
};
pub use decomp::{
    Diagonalization, EigenPair, LuDecomposition, QrDecomposition, diagonalize, eigenvalues,
    eigenvalues_with, eigenvector, eigenvectors, lu, qr,
};
pub use echelon::{lin_ind, null, pivot_columns, rank, rref};
pub use elimination::{det, inverse, solve_system};
pub use space::{change_of_basis, cross, projection};
pub use subspace::{col_space, null_space, row_space};
