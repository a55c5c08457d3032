//! Matrix decompositions.
//!
//! | Decomposition | Module  | Factorization            |
//! |---------------|---------|--------------------------|
//! | LU            | [`lu`]  | `A = LU` (no pivoting)   |
//! | QR            | [`qr`]  | `A = QR` (Gram-Schmidt)  |
//! | Eigen         | [`eig`] | `A = P D P^-1`           |

pub mod eig;
pub mod lu;
pub mod qr;

pub use eig::{
    Diagonalization, EigenPair, diagonalize, eigenvalues, eigenvalues_with, eigenvector,
    eigenvectors,
};
pub use lu::{LuDecomposition, lu};
pub use qr::{QrDecomposition, qr};
