//! `echelon-core`: dense linear algebra over `f64`.
//!
//! Provides a row-major [`Matrix`] type and the classic textbook routines
//! built on it: row reduction, LU and QR factorization, determinants and
//! inverses, subspace bases, and eigenvalues by QR iteration.
//!
//! # Design
//!
//! - Every algorithm is written from scratch; there are no BLAS/LAPACK
//!   bindings. Errors derive from `thiserror` and diagnostics go through
//!   the `log` facade.
//! - Matrices are validated once at construction (non-empty and rectangular),
//!   so the kernels only check what depends on the operation,
//!   such as squareness or matching lengths.
//! - Entries with magnitude below [`EPS`] are treated as zero throughout.
//! - Inputs are never mutated.
//!
//! ```
//! use echelon_core::prelude::*;
//!
//! let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 3.0]]).unwrap();
//! assert!((a.det().unwrap() - 5.0).abs() < 1e-12);
//! assert_eq!(a.rank(), 2);
//! ```

pub mod config;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod validate;

// Re-export key types at crate root for convenience.
pub use config::{EPS, EigenOptions};
pub use error::{ErrorKind, LinalgError, Result};
pub use matrix::Matrix;

/// Items intended for glob-import: `use echelon_core::prelude::*;`
pub mod prelude {
    pub use crate::config::{EPS, EigenOptions};
    pub use crate::error::{ErrorKind, LinalgError, Result};
    pub use crate::linalg::decomp::{Diagonalization, EigenPair, LuDecomposition, QrDecomposition};
    pub use crate::matrix::Matrix;
}
