//! Integration tests for matrix storage, element-wise arithmetic and truth
//! matrices.

mod common;

use mlmatrix::{Matrix, MatrixError};

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

// ---------------------------------------------------------------------------
// Storage & shape
// ---------------------------------------------------------------------------

#[test]
fn zeros_has_requested_shape() {
    let a = Matrix::zeros(2, 3);
    assert_eq!(a.rows(), 2);
    assert_eq!(a.columns(), 3);
    assert_eq!(a.dimensions(), [2, 3]);
    assert!(!a.is_square());
    assert!(a.iter().all(|&v| v == 0.0));
    assert!(Matrix::square(4).is_square());
}

#[test]
fn from_rows_is_row_major() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(a[(1, 0)], 4.0);
    assert_eq!(a.row_slice(1), &[4.0, 5.0, 6.0]);
}

#[test]
fn from_rows_rejects_empty_and_ragged_tables() {
    let empty: [&[f64]; 0] = [];
    assert!(matches!(
        Matrix::from_rows(&empty),
        Err(MatrixError::NullArgument { .. })
    ));
    assert!(matches!(
        Matrix::from_rows(&[&[1.0, 2.0][..], &[3.0][..]]),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn from_shape_vec_checks_length() {
    assert!(Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0]).is_err());
    let a = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(a[(1, 1)], 4.0);
}

#[test]
fn clone_is_deep() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let mut b = a.clone();
    b[(0, 0)] = 9.0;
    assert_eq!(a[(0, 0)], 1.0);
    assert_ne!(a, b);
}

#[test]
fn fill_overwrites_everything() {
    let mut a = Matrix::zeros(3, 2);
    a.fill(7.5);
    assert!(a.iter().all(|&v| v == 7.5));
}

#[test]
fn equality_is_exact() {
    let a = m(&[&[0.1 + 0.2]]);
    let b = m(&[&[0.3]]);
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
    assert_ne!(Matrix::zeros(1, 2), Matrix::zeros(2, 1));
}

#[test]
fn display_prints_one_row_per_line() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    assert_eq!(a.to_string(), "[1, 2]\n[3, 4]\n");
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn add_and_subtract_matrices() -> anyhow::Result<()> {
    common::init_logging();
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[10.0, 20.0], &[30.0, 40.0]]);
    assert_eq!(a.add_matrix(&b)?, m(&[&[11.0, 22.0], &[33.0, 44.0]]));
    assert_eq!(b.sub_matrix(&a)?, m(&[&[9.0, 18.0], &[27.0, 36.0]]));
    assert_eq!(&a + &b, a.add_matrix(&b)?);
    assert_eq!(&b - &a, b.sub_matrix(&a)?);
    Ok(())
}

#[test]
fn add_requires_equal_shapes() {
    let a = Matrix::zeros(2, 2);
    let row = Matrix::zeros(1, 2);
    assert!(matches!(
        a.add_matrix(&row),
        Err(MatrixError::DimensionMismatch { .. })
    ));
    assert!(a.sub_matrix(&row).is_err());
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn add_operator_panics_on_mismatch() {
    let _ = &Matrix::zeros(2, 2) + &Matrix::zeros(3, 2);
}

#[test]
fn scalar_operations_preserve_shape() {
    let a = m(&[&[1.0, -2.0, 3.0]]);
    assert_eq!(a.add_scalar(1.0), m(&[&[2.0, -1.0, 4.0]]));
    assert_eq!(&a - 1.0, m(&[&[0.0, -3.0, 2.0]]));
    assert_eq!(&a / 2.0, m(&[&[0.5, -1.0, 1.5]]));
    assert_eq!(-&a, m(&[&[-1.0, 2.0, -3.0]]));
}

#[test]
fn scalar_multiplication_commutes() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    assert_eq!(2.0 * &a, &a * 2.0);
    assert_eq!(2.0 * a.clone(), a.mul_scalar(2.0));
}

#[test]
fn element_op_broadcasts_row_vectors() -> anyhow::Result<()> {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let row = m(&[&[10.0, 20.0, 30.0]]);
    let out = a.element_op(&row, |x, y| x + y)?;
    assert_eq!(out, m(&[&[11.0, 22.0, 33.0], &[14.0, 25.0, 36.0]]));
    Ok(())
}

#[test]
fn element_op_broadcasts_column_vectors() -> anyhow::Result<()> {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let col = m(&[&[2.0], &[3.0]]);
    assert_eq!(
        a.element_mul(&col)?,
        m(&[&[2.0, 4.0, 6.0], &[12.0, 15.0, 18.0]])
    );
    assert_eq!(
        a.element_div(&col)?,
        m(&[&[0.5, 1.0, 1.5], &[4.0 / 3.0, 5.0 / 3.0, 2.0]])
    );
    Ok(())
}

#[test]
fn element_op_rejects_unrelated_shapes() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(3, 2);
    assert!(matches!(
        a.element_op(&b, |x, y| x * y),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn exp_and_log_invert_each_other() {
    let a = m(&[&[0.5, 1.0], &[2.0, 3.0]]);
    let back = a.element_log().element_exp();
    common::assert_close(&back, &a, 1e-12);
    assert_eq!(a.element_pow(2.0), m(&[&[0.25, 1.0], &[4.0, 9.0]]));
    assert_eq!(m(&[&[-4.0, 9.0]]).element_abs().element_sqrt(), m(&[&[2.0, 3.0]]));
}

// ---------------------------------------------------------------------------
// Truth matrices
// ---------------------------------------------------------------------------

#[test]
fn scalar_relations_produce_truth_matrices() {
    let a = m(&[&[0.2, 0.5, 0.9]]);
    assert_eq!(a.ge_scalar(0.5), m(&[&[0.0, 1.0, 1.0]]));
    assert_eq!(a.gt_scalar(0.5), m(&[&[0.0, 0.0, 1.0]]));
    assert_eq!(a.lt_scalar(0.5), m(&[&[1.0, 0.0, 0.0]]));
    assert_eq!(a.le_scalar(0.5), m(&[&[1.0, 1.0, 0.0]]));
    assert_eq!(a.eq_scalar(0.5), m(&[&[0.0, 1.0, 0.0]]));
    assert_eq!(a.ne_scalar(0.5), m(&[&[1.0, 0.0, 1.0]]));
}

#[test]
fn three_way_compare() -> anyhow::Result<()> {
    let a = m(&[&[1.0, 2.0, 3.0]]);
    assert_eq!(a.compare_scalar(2.0), m(&[&[-1.0, 0.0, 1.0]]));
    let b = m(&[&[3.0, 2.0, 1.0]]);
    assert_eq!(a.compare(&b)?, m(&[&[-1.0, 0.0, 1.0]]));
    assert_eq!(a.lt_matrix(&b)?, m(&[&[1.0, 0.0, 0.0]]));
    assert_eq!(a.eq_matrix(&b)?, m(&[&[0.0, 1.0, 0.0]]));
    Ok(())
}
