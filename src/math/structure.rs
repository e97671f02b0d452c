//! Row and column level restructuring: extraction, joins, feature columns
//! and reshaping.
use crate::error::{MatrixError, Result};
use crate::math::axis::Axis;
use crate::math::matrix::Matrix;

impl Matrix {
    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(MatrixError::row(row, self.rows));
        }
        Ok(())
    }

    fn check_column(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(MatrixError::column(col, self.cols));
        }
        Ok(())
    }

    /// Copy of row `row` as a `1 x columns` matrix.
    pub fn get_row(&self, row: usize) -> Result<Matrix> {
        self.check_row(row)?;
        Ok(Matrix::from_parts(1, self.cols, self.row_slice(row).to_vec()))
    }

    /// Copy of column `col` as a `rows x 1` matrix.
    pub fn get_column(&self, col: usize) -> Result<Matrix> {
        self.check_column(col)?;
        Ok(Matrix::from_parts(self.rows, 1, self.column_values(col)))
    }

    /// Overwrite row `row` with the first row of `source`. Only the leading
    /// `min(self.columns, source.columns)` values are written.
    pub fn set_row(&mut self, row: usize, source: &Matrix) -> Result<()> {
        self.check_row(row)?;
        let n = self.cols.min(source.cols);
        let start = self.offset(row, 0);
        self.data[start..start + n].copy_from_slice(&source.row_slice(0)[..n]);
        Ok(())
    }

    /// Exchange rows `a` and `b` in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_row(a)?;
        self.check_row(b)?;
        if a != b {
            for c in 0..self.cols {
                self.data.swap(a * self.cols + c, b * self.cols + c);
            }
        }
        Ok(())
    }

    /// Concatenate `a` and `b`.
    ///
    /// `Axis::Rows` stacks `b` below `a` (equal column counts required),
    /// `Axis::Columns` places `b` to the right of `a` (equal row counts
    /// required). `Axis::Auto` joins by columns when the row counts match and
    /// by rows otherwise.
    pub fn join(a: &Matrix, b: &Matrix, axis: Axis) -> Result<Matrix> {
        let axis = match axis {
            Axis::Auto if a.rows == b.rows => Axis::Columns,
            Axis::Auto => Axis::Rows,
            other => other,
        };

        match axis {
            Axis::Columns => {
                if a.rows != b.rows {
                    return Err(MatrixError::shapes("join columns", a.shape(), b.shape()));
                }
                let cols = a.cols + b.cols;
                let mut data = Vec::with_capacity(a.rows * cols);
                for r in 0..a.rows {
                    data.extend_from_slice(a.row_slice(r));
                    data.extend_from_slice(b.row_slice(r));
                }
                Ok(Matrix::from_parts(a.rows, cols, data))
            }
            _ => {
                if a.cols != b.cols {
                    return Err(MatrixError::shapes("join rows", a.shape(), b.shape()));
                }
                let mut data = Vec::with_capacity(a.data.len() + b.data.len());
                data.extend_from_slice(&a.data);
                data.extend_from_slice(&b.data);
                Ok(Matrix::from_parts(a.rows + b.rows, a.cols, data))
            }
        }
    }

    /// Prepend a column filled with `value`, typically the bias term of a
    /// linear model.
    pub fn add_identity_column(&self, value: f64) -> Matrix {
        let cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * cols);
        for r in 0..self.rows {
            data.push(value);
            data.extend_from_slice(self.row_slice(r));
        }
        Matrix::from_parts(self.rows, cols, data)
    }

    pub fn remove_column(&self, col: usize) -> Result<Matrix> {
        if self.cols == 1 {
            return Err(MatrixError::DimensionMismatch {
                operation: "remove column",
                detail: "cannot remove the only column".to_string(),
            });
        }
        self.check_column(col)?;

        let mut data = Vec::with_capacity(self.rows * (self.cols - 1));
        for r in 0..self.rows {
            let row = self.row_slice(r);
            data.extend_from_slice(&row[..col]);
            data.extend_from_slice(&row[col + 1..]);
        }
        Ok(Matrix::from_parts(self.rows, self.cols - 1, data))
    }

    /// Replace feature columns `col1` and `col2` with every monomial
    /// `x1^(i-j) * x2^j` for `0 <= j <= i <= degree`.
    ///
    /// The monomial block takes the place of the lower-indexed column and the
    /// other column of the pair is dropped; all remaining columns keep their
    /// order. When both indices name the same column the block is the pure
    /// powers `x^0 ..= x^degree`.
    pub fn expand_polynomials(&self, col1: usize, col2: usize, degree: u32) -> Result<Matrix> {
        self.check_column(col1)?;
        self.check_column(col2)?;

        let single = col1 == col2;
        let terms: Vec<(i32, i32)> = if single {
            (0..=degree as i32).map(|i| (i, 0)).collect()
        } else {
            (0..=degree as i32)
                .flat_map(|i| (0..=i).map(move |j| (i - j, j)))
                .collect()
        };
        let anchor = col1.min(col2);
        let dropped = col1.max(col2);
        let kept = if single { self.cols - 1 } else { self.cols - 2 };
        let cols = kept + terms.len();

        let mut data = Vec::with_capacity(self.rows * cols);
        for r in 0..self.rows {
            let row = self.row_slice(r);
            let (x1, x2) = (row[col1], row[col2]);
            for (c, &value) in row.iter().enumerate() {
                if c == anchor {
                    data.extend(terms.iter().map(|&(p1, p2)| x1.powi(p1) * x2.powi(p2)));
                } else if c != dropped {
                    data.push(value);
                }
            }
        }
        Ok(Matrix::from_parts(self.rows, cols, data))
    }

    /// Read `rows * cols` consecutive values of this matrix's row-major
    /// storage starting at `start`, writing them column-major: column 0 top
    /// to bottom, then column 1, and so on.
    pub fn reshape(&self, start: usize, rows: usize, cols: usize) -> Result<Matrix> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::NullArgument { what: "reshape shape" });
        }
        let needed = rows.checked_mul(cols).ok_or_else(|| MatrixError::DimensionMismatch {
            operation: "reshape",
            detail: format!("{}x{} overflows the addressable length", rows, cols),
        })?;
        let available = self.data.len().saturating_sub(start);
        if needed > available {
            return Err(MatrixError::DimensionMismatch {
                operation: "reshape",
                detail: format!(
                    "{}x{} needs {} values but only {} remain after offset {}",
                    rows, cols, needed, available, start
                ),
            });
        }

        let source = &self.data[start..start + needed];
        let mut data = vec![0.0; needed];
        for (k, &value) in source.iter().enumerate() {
            let (c, r) = (k / rows, k % rows);
            data[r * cols + c] = value;
        }
        Ok(Matrix::from_parts(rows, cols, data))
    }

    /// Column-major flatten into a `len x 1` column vector. The inverse of
    /// [`Matrix::reshape`] at offset zero.
    pub fn unrolled(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c]);
            }
        }
        Matrix::from_parts(self.data.len(), 1, data)
    }
}
