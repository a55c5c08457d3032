//! # Echelon
//!
//! Dense linear algebra in pure Rust: row reduction, LU and QR
//! factorization, determinants, inverses, subspace bases and eigenvalues.
//!
//! One `use echelon::prelude::*;` gives you the [`Matrix`](crate::core::matrix::Matrix)
//! type, the decomposition types and the error types.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Matrices and all linear algebra routines |
//! | `serde` | `Serialize`/`Deserialize` for matrices, options and eigenpairs |

#[cfg(feature = "core")]
pub use echelon_core as core;

/// Glob-import convenience: `use echelon::prelude::*;`
pub mod prelude {
    #[cfg(feature = "core")]
    pub use echelon_core::linalg;
    #[cfg(feature = "core")]
    pub use echelon_core::prelude::*;
}

#[cfg(all(test, feature = "core"))]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_prelude_reaches_core() {
        let a = Matrix::from_rows(&[[2.0, 0.0], [0.0, 3.0]]).unwrap();
        assert!((a.det().unwrap() - 6.0).abs() < 1e-12);
        assert_eq!(linalg::rank(&a), 2);
    }
}
