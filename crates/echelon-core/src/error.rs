//! Error taxonomy shared by every kernel in `echelon-core`.

use thiserror::Error;

/// All errors returned by `echelon-core`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    /// Input is empty, ragged, or not square where a square matrix is required.
    #[error("shape error: {reason}")]
    Shape { reason: &'static str },

    /// Operands are individually well-formed but cannot be combined.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// LU without row interchanges hit a zero pivot on the diagonal.
    #[error("zero pivot at position {index}: matrix requires pivoting for LU decomposition")]
    ZeroPivot { index: usize },

    /// Gram-Schmidt found a column dependent on the previous ones.
    #[error("matrix is rank deficient: column {column} is linearly dependent")]
    RankDeficient { column: usize },

    /// Matrix is singular and cannot be inverted.
    #[error("singular matrix")]
    SingularMatrix,

    /// Projection onto the zero vector.
    #[error("cannot project onto the zero vector")]
    ZeroVector,

    /// Too few independent eigenvectors were found to build `P`.
    #[error("matrix is not diagonalizable: found {found} eigenvectors, need {required}")]
    NotDiagonalizable { found: usize, required: usize },
}

/// Coarse category of a [`LinalgError`], for callers that only need to branch
/// on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Shape,
    DimensionMismatch,
    ZeroPivot,
    RankDeficient,
    SingularMatrix,
    ZeroVector,
    NotDiagonalizable,
}

impl LinalgError {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Shape { .. } => ErrorKind::Shape,
            Self::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::ZeroPivot { .. } => ErrorKind::ZeroPivot,
            Self::RankDeficient { .. } => ErrorKind::RankDeficient,
            Self::SingularMatrix => ErrorKind::SingularMatrix,
            Self::ZeroVector => ErrorKind::ZeroVector,
            Self::NotDiagonalizable { .. } => ErrorKind::NotDiagonalizable,
        }
    }
}

/// Convenience alias used throughout `echelon-core`.
pub type Result<T> = std::result::Result<T, LinalgError>;
