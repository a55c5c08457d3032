//! Known inputs with known answers, exercised through the public API only.

#![allow(clippy::float_cmp)]

use echelon_core::linalg::{
    cross, det, diagonalize, eigenvalues, inverse, lu, matrix_mult, rref, solve_system,
};
use echelon_core::prelude::*;
use echelon_core::validate::{validate_matrix, validate_square_matrix};

fn mat(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

#[test]
fn determinants() {
    assert_eq!(det(&mat(&[&[0.0, 1.0], &[1.0, 0.0]])).unwrap(), -1.0);
    assert!((det(&mat(&[&[1.0, 2.0], &[3.0, 4.0]])).unwrap() + 2.0).abs() < 1e-12);
}

#[test]
fn inverse_of_2x2() {
    let inv = inverse(&mat(&[&[1.0, 2.0], &[3.0, 4.0]])).unwrap();
    assert!(inv.approx_eq(&mat(&[&[-2.0, 1.0], &[1.5, -0.5]]), 1e-12));
}

#[test]
fn singular_inverse_but_zero_determinant() {
    let singular = mat(&[&[1.0, 2.0], &[2.0, 4.0]]);
    assert_eq!(inverse(&singular).unwrap_err(), LinalgError::SingularMatrix);
    assert_eq!(det(&singular).unwrap(), 0.0);
}

#[test]
fn solve_diagonal_system() {
    let a = mat(&[&[2.0, 0.0], &[0.0, 2.0]]);
    assert_eq!(solve_system(&a, &[4.0, 6.0]).unwrap(), vec![2.0, 3.0]);
}

#[test]
fn cross_of_basis_vectors() {
    assert_eq!(cross(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]).unwrap(), [0.0, 0.0, 1.0]);
}

#[test]
fn eigenvalues_of_symmetric_2x2() {
    let mut vals = eigenvalues(&mat(&[&[2.0, 1.0], &[1.0, 2.0]])).unwrap();
    vals.sort_by(f64::total_cmp);
    assert!((vals[0] - 1.0).abs() < 1e-8);
    assert!((vals[1] - 3.0).abs() < 1e-8);
}

#[test]
fn diagonalize_reconstructs_symmetric_matrix() {
    let a = mat(&[&[2.0, 0.0, 0.0], &[0.0, 3.0, 4.0], &[0.0, 4.0, 9.0]]);
    let diag = diagonalize(&a).unwrap();
    let pd = matrix_mult(diag.p(), diag.d()).unwrap();
    let back = matrix_mult(&pd, diag.p_inv()).unwrap();
    assert!(back.approx_eq(&a, 1e-8));
    assert!(diag.reconstruct().unwrap().approx_eq(&a, 1e-8));
}

#[test]
fn empty_input_is_a_shape_error() {
    let empty: [Vec<f64>; 0] = [];
    assert_eq!(validate_matrix(&empty).unwrap_err().kind(), ErrorKind::Shape);
    assert_eq!(Matrix::from_rows(&empty).unwrap_err().kind(), ErrorKind::Shape);

    let empty_row = [Vec::<f64>::new()];
    assert_eq!(Matrix::from_rows(&empty_row).unwrap_err().kind(), ErrorKind::Shape);

    let ragged = [vec![1.0, 2.0], vec![3.0]];
    assert_eq!(Matrix::from_rows(&ragged).unwrap_err().kind(), ErrorKind::Shape);
    assert_eq!(
        validate_square_matrix(&[vec![1.0, 2.0]]).unwrap_err().kind(),
        ErrorKind::Shape
    );
}

#[test]
fn incompatible_product_is_a_dimension_mismatch() {
    let a = mat(&[&[1.0, 2.0, 3.0]]);
    let b = mat(&[&[1.0, 2.0]]);
    assert_eq!(matrix_mult(&a, &b).unwrap_err().kind(), ErrorKind::DimensionMismatch);
}

#[test]
fn lu_failures() {
    let wide = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    assert_eq!(lu(&wide).unwrap_err().kind(), ErrorKind::Shape);
    assert_eq!(
        lu(&mat(&[&[1.0, 1.0], &[1.0, 1.0]])).unwrap_err(),
        LinalgError::ZeroPivot { index: 1 }
    );
}

#[test]
fn rref_of_rank_two_matrix() {
    let a = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
    let expected = mat(&[&[1.0, 0.0, -1.0], &[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0]]);
    assert!(rref(&a).approx_eq(&expected, 1e-12));
    assert_eq!(a.rank(), 2);
}
