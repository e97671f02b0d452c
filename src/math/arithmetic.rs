//! Element-wise and scalar arithmetic, truth matrices and operator overloads.
//!
//! Everything here funnels through two primitives: [`Matrix::map`] for
//! single-operand maps and [`Matrix::element_op`] for two-operand maps with
//! vector broadcasting. Both partition the output by row.
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;
use crate::math::parallel::for_each_row;

fn truth(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

fn three_way(a: f64, b: f64) -> f64 {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => -1.0,
        Some(Ordering::Greater) => 1.0,
        _ => 0.0,
    }
}

/// How the second operand of [`Matrix::element_op`] lines up with the first.
#[derive(Clone, Copy)]
enum Broadcast {
    Same,
    Row,
    Column,
}

impl Matrix {
    /// Apply `f` to every element, returning a matrix of the same shape.
    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        let mut out = vec![0.0; self.data.len()];
        for_each_row(&mut out, self.cols, |r, row| {
            for (dst, &src) in row.iter_mut().zip(self.row_slice(r)) {
                *dst = f(src);
            }
        });
        Matrix::from_parts(self.rows, self.cols, out)
    }

    /// Combine `self` with `other` element by element.
    ///
    /// Equal shapes pair elements directly. Otherwise a row vector whose
    /// column count matches is repeated for every row, and a column vector
    /// whose row count matches is repeated for every column.
    pub fn element_op<F>(&self, other: &Matrix, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64 + Sync + Send,
    {
        let mode = if self.shape() == other.shape() {
            Broadcast::Same
        } else if other.rows == 1 && other.cols == self.cols {
            Broadcast::Row
        } else if other.cols == 1 && other.rows == self.rows {
            Broadcast::Column
        } else {
            return Err(MatrixError::shapes("element_op", self.shape(), other.shape()));
        };

        let mut out = vec![0.0; self.data.len()];
        for_each_row(&mut out, self.cols, |r, row| {
            let lhs = self.row_slice(r);
            match mode {
                Broadcast::Same => {
                    for ((dst, &a), &b) in row.iter_mut().zip(lhs).zip(other.row_slice(r)) {
                        *dst = f(a, b);
                    }
                }
                Broadcast::Row => {
                    for ((dst, &a), &b) in row.iter_mut().zip(lhs).zip(other.row_slice(0)) {
                        *dst = f(a, b);
                    }
                }
                Broadcast::Column => {
                    let b = other.data[r];
                    for (dst, &a) in row.iter_mut().zip(lhs) {
                        *dst = f(a, b);
                    }
                }
            }
        });
        Ok(Matrix::from_parts(self.rows, self.cols, out))
    }

    fn same_shape_op<F>(&self, other: &Matrix, operation: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64 + Sync + Send,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::shapes(operation, self.shape(), other.shape()));
        }
        self.element_op(other, f)
    }

    pub fn add_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.same_shape_op(other, "add", |a, b| a + b)
    }

    pub fn sub_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.same_shape_op(other, "subtract", |a, b| a - b)
    }

    /// Hadamard product, with vector broadcasting.
    pub fn element_mul(&self, other: &Matrix) -> Result<Matrix> {
        self.element_op(other, |a, b| a * b)
    }

    /// Element-wise quotient, with vector broadcasting.
    pub fn element_div(&self, other: &Matrix) -> Result<Matrix> {
        self.element_op(other, |a, b| a / b)
    }

    pub fn add_scalar(&self, s: f64) -> Matrix {
        self.map(|v| v + s)
    }

    pub fn sub_scalar(&self, s: f64) -> Matrix {
        self.map(|v| v - s)
    }

    pub fn mul_scalar(&self, s: f64) -> Matrix {
        self.map(|v| v * s)
    }

    pub fn div_scalar(&self, s: f64) -> Matrix {
        self.map(|v| v / s)
    }

    pub fn element_exp(&self) -> Matrix {
        self.map(f64::exp)
    }

    /// Natural logarithm of every element.
    pub fn element_log(&self) -> Matrix {
        self.map(f64::ln)
    }

    pub fn element_pow(&self, exponent: f64) -> Matrix {
        self.map(|v| v.powf(exponent))
    }

    pub fn element_sqrt(&self) -> Matrix {
        self.map(f64::sqrt)
    }

    pub fn element_abs(&self) -> Matrix {
        self.map(f64::abs)
    }

    // Truth matrices against a scalar: 1.0 where the relation holds, else 0.0.

    pub fn eq_scalar(&self, s: f64) -> Matrix {
        self.map(|v| truth(v == s))
    }

    pub fn ne_scalar(&self, s: f64) -> Matrix {
        self.map(|v| truth(v != s))
    }

    pub fn lt_scalar(&self, s: f64) -> Matrix {
        self.map(|v| truth(v < s))
    }

    pub fn gt_scalar(&self, s: f64) -> Matrix {
        self.map(|v| truth(v > s))
    }

    pub fn le_scalar(&self, s: f64) -> Matrix {
        self.map(|v| truth(v <= s))
    }

    pub fn ge_scalar(&self, s: f64) -> Matrix {
        self.map(|v| truth(v >= s))
    }

    /// -1.0, 0.0 or 1.0 per element as it is below, equal to or above `s`.
    pub fn compare_scalar(&self, s: f64) -> Matrix {
        self.map(|v| three_way(v, s))
    }

    pub fn eq_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.same_shape_op(other, "equal", |a, b| truth(a == b))
    }

    pub fn ne_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.element_op(other, |a, b| truth(a != b))
    }

    pub fn lt_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.element_op(other, |a, b| truth(a < b))
    }

    pub fn gt_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.element_op(other, |a, b| truth(a > b))
    }

    pub fn le_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.element_op(other, |a, b| truth(a <= b))
    }

    pub fn ge_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.element_op(other, |a, b| truth(a >= b))
    }

    /// Three-way element-wise comparison against another matrix.
    pub fn compare(&self, other: &Matrix) -> Result<Matrix> {
        self.element_op(other, three_way)
    }
}

// ── Operator overloads ──────────────────────────────────────────────
//
// Matrix-by-matrix operators panic on shape mismatch; use the named
// methods above for a `Result`.

fn expect_shape(result: Result<Matrix>) -> Matrix {
    match result {
        Ok(m) => m,
        Err(e) => panic!("{}", e),
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        expect_shape(self.add_matrix(rhs))
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Matrix {
        expect_shape(self.sub_matrix(rhs))
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        expect_shape(self.matmul(rhs))
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|v| -v)
    }
}

impl Add<f64> for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: f64) -> Matrix {
        self.add_scalar(rhs)
    }
}

impl Sub<f64> for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: f64) -> Matrix {
        self.sub_scalar(rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.mul_scalar(rhs)
    }
}

impl Div<f64> for &Matrix {
    type Output = Matrix;

    fn div(self, rhs: f64) -> Matrix {
        self.div_scalar(rhs)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs * self
    }
}

impl Add<&Matrix> for f64 {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        rhs + self
    }
}

// Owned forms forward to the borrowed ones.
macro_rules! forward_owned {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl $trait<Matrix> for Matrix {
                type Output = Matrix;

                fn $method(self, rhs: Matrix) -> Matrix {
                    (&self).$method(&rhs)
                }
            }

            impl $trait<&Matrix> for Matrix {
                type Output = Matrix;

                fn $method(self, rhs: &Matrix) -> Matrix {
                    (&self).$method(rhs)
                }
            }

            impl $trait<f64> for Matrix {
                type Output = Matrix;

                fn $method(self, rhs: f64) -> Matrix {
                    (&self).$method(rhs)
                }
            }
        )*
    };
}

forward_owned!(Add::add, Sub::sub, Mul::mul);

impl Div<f64> for Matrix {
    type Output = Matrix;

    fn div(self, rhs: f64) -> Matrix {
        self.div_scalar(rhs)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        -&self
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &rhs * self
    }
}
