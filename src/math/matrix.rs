use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use crate::error::{MatrixError, Result};

/// Dense `f64` matrix with row-major storage.
///
/// The element at `(r, c)` lives at `data[r * cols + c]`. A matrix is never
/// resized; shape-changing operations always return a new matrix. Equality
/// is exact and element-wise.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    pub(crate) data: Vec<f64>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be non-zero");
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Zero-filled `n x n` matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn square(n: usize) -> Self {
        Self::zeros(n, n)
    }

    /// Build from a rectangular literal table, one inner slice per row.
    pub fn from_rows<R: AsRef<[f64]>>(table: &[R]) -> Result<Self> {
        let first = table.first().ok_or(MatrixError::NullArgument { what: "table" })?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(MatrixError::NullArgument { what: "table row" });
        }

        let mut data = Vec::with_capacity(table.len() * cols);
        for (r, row) in table.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::DimensionMismatch {
                    operation: "from_rows",
                    detail: format!("row {} has {} values, expected {}", r, row.len(), cols),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: table.len(),
            cols,
        })
    }

    /// Wrap a row-major buffer of exactly `rows * cols` values.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(MatrixError::NullArgument { what: "shape" });
        }
        if data.len() != rows * cols {
            return Err(MatrixError::DimensionMismatch {
                operation: "from_shape_vec",
                detail: format!(
                    "shape ({}, {}) for buffer of length {}",
                    rows,
                    cols,
                    data.len()
                ),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// A single-row matrix holding `values`.
    pub fn row_vector(values: &[f64]) -> Result<Self> {
        Self::from_shape_vec((1, values.len()), values.to_vec())
    }

    /// A single-column matrix holding `values`.
    pub fn column_vector(values: &[f64]) -> Result<Self> {
        Self::from_shape_vec((values.len(), 1), values.to_vec())
    }

    // Internal constructor for operators that have already validated shape.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    /// `[rows, columns]`.
    pub fn dimensions(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a matrix has at least one element.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_row_vector(&self) -> bool {
        self.rows == 1
    }

    pub fn is_column_vector(&self) -> bool {
        self.cols == 1
    }

    pub fn is_vector(&self) -> bool {
        self.is_row_vector() || self.is_column_vector()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub(crate) fn column_values(&self, col: usize) -> Vec<f64> {
        (0..self.rows).map(|r| self.data[self.offset(r, col)]).collect()
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.iter_mut().for_each(|v| *v = value);
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(r).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
