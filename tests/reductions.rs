//! Integration tests for the axis reducers and the statistics behind them.

use approx::assert_relative_eq;
use mlmatrix::{Axis, Matrix};

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

fn scalar(a: &Matrix) -> f64 {
    assert_eq!(a.shape(), (1, 1));
    a[(0, 0)]
}

fn table() -> Matrix {
    m(&[&[1.0, 20.0, 3.0], &[4.0, 5.0, 60.0], &[7.0, 8.0, 9.0]])
}

// ---------------------------------------------------------------------------
// Axis resolution
// ---------------------------------------------------------------------------

#[test]
fn sum_along_rows_and_columns() {
    let a = table();
    assert_eq!(a.sum(Axis::Rows), m(&[&[24.0], &[69.0], &[24.0]]));
    assert_eq!(a.sum(Axis::Columns), m(&[&[12.0, 33.0, 72.0]]));
    assert_eq!(a.sum(Axis::Auto), a.sum(Axis::Columns));
}

#[test]
fn vectors_collapse_to_a_scalar_on_every_axis() {
    let row = m(&[&[1.0, 2.0, 3.0, 4.0]]);
    let col = row.transpose();
    for axis in [Axis::Rows, Axis::Columns, Axis::Auto] {
        assert_eq!(scalar(&row.sum(axis)), 10.0);
        assert_eq!(scalar(&col.sum(axis)), 10.0);
        assert_eq!(scalar(&col.mean(axis)), 2.5);
    }
}

#[test]
fn binary_reducer_is_seeded_at_zero() {
    let a = m(&[&[2.0, 3.0], &[4.0, 5.0]]);
    // acc * v from a zero seed stays zero
    assert_eq!(a.reduce(Axis::Rows, |acc, v| acc * v), m(&[&[0.0], &[0.0]]));
    assert_eq!(a.reduce(Axis::Columns, |acc, v| acc - v), m(&[&[-6.0, -8.0]]));
}

#[test]
fn statistical_reducer_sees_whole_vectors() {
    let a = table();
    let lengths = a.reduce_with(Axis::Rows, |v| v.len() as f64);
    assert_eq!(lengths, m(&[&[3.0], &[3.0], &[3.0]]));
    let firsts = a.reduce_with(Axis::Columns, |v| v[0]);
    assert_eq!(firsts, m(&[&[1.0, 20.0, 3.0]]));
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[test]
fn extremes_and_their_indices() {
    let a = table();
    assert_eq!(a.max(Axis::Columns), m(&[&[7.0, 20.0, 60.0]]));
    assert_eq!(a.min(Axis::Rows), m(&[&[1.0], &[4.0], &[7.0]]));
    assert_eq!(a.max_index(Axis::Rows), m(&[&[1.0], &[2.0], &[2.0]]));
    assert_eq!(a.min_index(Axis::Columns), m(&[&[0.0, 1.0, 0.0]]));
    assert_eq!(a.range(Axis::Columns), m(&[&[6.0, 15.0, 57.0]]));
}

#[test]
fn max_index_picks_first_of_ties() {
    let probs = m(&[&[0.1, 0.7, 0.7, 0.2]]);
    assert_eq!(scalar(&probs.max_index(Axis::Auto)), 1.0);
    assert_eq!(scalar(&probs.min_index(Axis::Auto)), 0.0);
}

#[test]
fn variance_is_sample_variance() {
    let v = m(&[&[1.0, 2.0, 3.0, 4.0, 5.0]]);
    assert_relative_eq!(scalar(&v.variance(Axis::Auto)), 2.5, epsilon = 1e-12);
    assert_relative_eq!(scalar(&v.standard_deviation(Axis::Auto)), 2.5f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(scalar(&v.mean(Axis::Auto)), 3.0, epsilon = 1e-12);
    assert_relative_eq!(scalar(&v.mean_square(Axis::Auto)), 11.0, epsilon = 1e-12);
}

#[test]
fn mode_returns_smallest_of_tied_groups() {
    let v = m(&[&[1.0, 1.0, 2.0, 2.0, 3.0]]);
    assert_eq!(scalar(&v.mode(Axis::Auto)), 1.0);
    let w = m(&[&[3.0], &[2.0], &[3.0], &[1.0]]);
    assert_eq!(scalar(&w.mode(Axis::Rows)), 3.0);
}

#[test]
fn median_keeps_upper_pair_for_even_counts() {
    let odd = m(&[&[9.0, 1.0, 5.0]]);
    assert_eq!(scalar(&odd.median(Axis::Auto)), 5.0);
    // sorted [1, 2, 3, 4]: averages elements 2 and 3
    let even = m(&[&[4.0, 1.0, 3.0, 2.0]]);
    assert_eq!(scalar(&even.median(Axis::Auto)), 3.5);
}

#[test]
fn quartiles_and_interquartile_range() {
    let v = m(&[&[7.0, 1.0, 3.0, 5.0, 2.0, 6.0, 4.0, 8.0]]);
    assert_relative_eq!(scalar(&v.quartile1(Axis::Auto)), 2.5, epsilon = 1e-12);
    assert_relative_eq!(scalar(&v.quartile3(Axis::Auto)), 6.5, epsilon = 1e-12);
    assert_relative_eq!(scalar(&v.interquartile_range(Axis::Auto)), 4.0, epsilon = 1e-12);

    let five = m(&[&[1.0], &[2.0], &[3.0], &[4.0], &[5.0]]);
    assert_relative_eq!(scalar(&five.quartile1(Axis::Columns)), 1.75, epsilon = 1e-12);
    assert_relative_eq!(scalar(&five.quartile3(Axis::Columns)), 4.25, epsilon = 1e-12);
}

#[test]
fn column_statistics_of_a_table() {
    let a = table();
    assert_eq!(a.median(Axis::Columns), m(&[&[4.0, 8.0, 9.0]]));
    let means = a.mean(Axis::Auto);
    assert_eq!(means.shape(), (1, 3));
    assert_relative_eq!(means[(0, 0)], 4.0, epsilon = 1e-12);
    assert_relative_eq!(means[(0, 2)], 24.0, epsilon = 1e-12);
}
