//! Axis reductions.
//!
//! Two generic reducers back every aggregate: [`Matrix::reduce`] folds a
//! binary function over each row or column starting from zero, and
//! [`Matrix::reduce_with`] hands each whole row or column to a function that
//! returns one value. A row or column vector always collapses to a `1 x 1`
//! result whatever axis is requested; otherwise `Axis::Auto` behaves as
//! `Axis::Columns`.
use crate::math::axis::Axis;
use crate::math::matrix::Matrix;
use crate::math::parallel::{for_each_column, for_each_row};
use crate::stats;

impl Matrix {
    /// Fold `f` left to right over each row (`Axis::Rows`, giving
    /// `rows x 1`) or each column (`Axis::Columns`, giving `1 x columns`),
    /// seeded at zero.
    pub fn reduce<F>(&self, axis: Axis, f: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64 + Sync + Send,
    {
        self.reduce_with(axis, |values| values.iter().fold(0.0, |acc, &v| f(acc, v)))
    }

    /// Apply `f` to each full row or column vector.
    pub fn reduce_with<F>(&self, axis: Axis, f: F) -> Matrix
    where
        F: Fn(&[f64]) -> f64 + Sync + Send,
    {
        if self.is_vector() {
            return Matrix::from_parts(1, 1, vec![f(&self.data)]);
        }

        match axis {
            Axis::Rows => {
                let mut out = vec![0.0; self.rows];
                for_each_row(&mut out, 1, |r, cell| cell[0] = f(self.row_slice(r)));
                Matrix::from_parts(self.rows, 1, out)
            }
            Axis::Columns | Axis::Auto => {
                let out = for_each_column(1, self.cols, |c, cell| {
                    cell[0] = f(&self.column_values(c));
                });
                Matrix::from_parts(1, self.cols, out)
            }
        }
    }

    pub fn sum(&self, axis: Axis) -> Matrix {
        self.reduce(axis, |acc, v| acc + v)
    }

    pub fn mean(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, stats::mean)
    }

    pub fn mean_square(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, stats::mean_square)
    }

    pub fn max(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, stats::max)
    }

    pub fn min(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, stats::min)
    }

    /// Position of the first maximum, as a float.
    pub fn max_index(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, |v| stats::max_index(v).map_or(f64::NAN, |i| i as f64))
    }

    /// Position of the first minimum, as a float.
    pub fn min_index(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, |v| stats::min_index(v).map_or(f64::NAN, |i| i as f64))
    }

    pub fn range(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, stats::range)
    }

    pub fn interquartile_range(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, stats::interquartile_range)
    }

    pub fn median(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, stats::median)
    }

    pub fn quartile1(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, stats::quartile1)
    }

    pub fn quartile3(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, stats::quartile3)
    }

    pub fn mode(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, stats::mode)
    }

    pub fn variance(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, stats::variance)
    }

    pub fn standard_deviation(&self, axis: Axis) -> Matrix {
        self.reduce_with(axis, stats::standard_deviation)
    }
}
