//! Matrix products and transposes.
//!
//! The transpose-fused variants read their operands in the layout they are
//! stored in instead of materialising a transposed copy first.
use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;
use crate::math::parallel::{for_each_column, for_each_row};

#[inline]
fn dot(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl Matrix {
    /// Standard product `self * rhs`, one output row per task.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(MatrixError::shapes("multiply", self.shape(), rhs.shape()));
        }
        let inner = self.cols;
        let mut out = vec![0.0; self.rows * rhs.cols];
        for_each_row(&mut out, rhs.cols, |i, row| {
            let lhs = self.row_slice(i);
            for (j, cell) in row.iter_mut().enumerate() {
                let mut acc = 0.0;
                for k in 0..inner {
                    acc += lhs[k] * rhs.data[k * rhs.cols + j];
                }
                *cell = acc;
            }
        });
        Ok(Matrix::from_parts(self.rows, rhs.cols, out))
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0.0; self.data.len()];
        for r in 0..self.rows {
            for c in 0..self.cols {
                data[c * self.rows + r] = self.data[r * self.cols + c];
            }
        }
        Matrix::from_parts(self.cols, self.rows, data)
    }

    /// `self * rhsᵗ`; both operands must have the same column count.
    pub fn mul_transpose(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.cols {
            return Err(MatrixError::shapes(
                "multiply by transpose",
                self.shape(),
                rhs.shape(),
            ));
        }
        let mut out = vec![0.0; self.rows * rhs.rows];
        for_each_row(&mut out, rhs.rows, |i, row| {
            let lhs = self.row_slice(i);
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = dot(lhs, rhs.row_slice(j));
            }
        });
        Ok(Matrix::from_parts(self.rows, rhs.rows, out))
    }

    /// `selfᵗ * rhs`; both operands must have the same row count.
    /// One output column per task.
    pub fn transpose_mul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.rows != rhs.rows {
            return Err(MatrixError::shapes(
                "transpose multiply",
                self.shape(),
                rhs.shape(),
            ));
        }
        let data = for_each_column(self.cols, rhs.cols, |j, column| {
            for (i, cell) in column.iter_mut().enumerate() {
                let mut acc = 0.0;
                for k in 0..self.rows {
                    acc += self.data[k * self.cols + i] * rhs.data[k * rhs.cols + j];
                }
                *cell = acc;
            }
        });
        Ok(Matrix::from_parts(self.cols, rhs.cols, data))
    }

    /// `self * selfᵗ`.
    pub fn mul_self_transpose(&self) -> Matrix {
        let mut out = vec![0.0; self.rows * self.rows];
        for_each_row(&mut out, self.rows, |i, row| {
            let lhs = self.row_slice(i);
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = dot(lhs, self.row_slice(j));
            }
        });
        Matrix::from_parts(self.rows, self.rows, out)
    }

    /// `selfᵗ * self`.
    pub fn transpose_mul_self(&self) -> Matrix {
        let data = for_each_column(self.cols, self.cols, |j, column| {
            for (i, cell) in column.iter_mut().enumerate() {
                let mut acc = 0.0;
                for k in 0..self.rows {
                    let row = self.row_slice(k);
                    acc += row[i] * row[j];
                }
                *cell = acc;
            }
        });
        Matrix::from_parts(self.cols, self.cols, data)
    }
}
