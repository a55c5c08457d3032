//! Tolerances and solver options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Magnitudes below this are treated as exactly zero: pivot detection,
/// rank deficiency, singularity and zero-vector checks all use it.
pub const EPS: f64 = 1e-10;

/// Iteration limits for the unshifted QR eigenvalue algorithm.
///
/// ```
/// # use echelon_core::config::EigenOptions;
/// let opts = EigenOptions::default().with_max_iter(50);
/// assert_eq!(opts.max_iter, 50);
/// assert_eq!(opts.tol, 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EigenOptions {
    /// Maximum number of `A <- RQ` steps before giving up.
    pub max_iter: usize,
    /// Convergence threshold on the entrywise change of the diagonal.
    pub tol: f64,
}

impl EigenOptions {
    pub const DEFAULT_MAX_ITER: usize = 1000;
    pub const DEFAULT_TOL: f64 = 1e-10;

    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    #[must_use]
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }
}

impl Default for EigenOptions {
    fn default() -> Self {
        Self {
            max_iter: Self::DEFAULT_MAX_ITER,
            tol: Self::DEFAULT_TOL,
        }
    }
}
