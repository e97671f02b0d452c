//! Gauss-Jordan inversion of square matrices.
use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;

impl Matrix {
    /// Inverse by Gauss-Jordan elimination. `self` is left untouched.
    pub fn inverse(&self) -> Result<Matrix> {
        self.clone().into_inverse()
    }

    /// Inverse by Gauss-Jordan elimination, consuming `self` as the working
    /// matrix.
    ///
    /// Each pivot row is first scaled by its pivot, in the working matrix and
    /// in an identity accumulator alike. The pivot column is then eliminated
    /// from every other row with the update `cell - factor * pivot_row_cell`.
    /// A zero pivot is replaced by swapping in a row that is non-zero both in
    /// the pivot column and at the pivot row's entry for that row's own
    /// column. The accumulator is finally divided row-wise by the remaining diagonal.
    ///
    /// Fails with [`MatrixError::Singular`] when no pivot can be found or the
    /// result is not finite.
    pub fn into_inverse(self) -> Result<Matrix> {
        if !self.is_square() {
            return Err(MatrixError::shapes("inverse", self.shape(), self.shape()));
        }
        let n = self.rows;
        let mut work = self;
        let mut result = Matrix::identity(n);

        for p in 0..n {
            if work.data[p * n + p] == 0.0 {
                let swap = (0..n).find(|&r| {
                    r != p && work.data[r * n + p] != 0.0 && work.data[p * n + r] != 0.0
                });
                match swap {
                    Some(r) => {
                        log::debug!("inverse: zero pivot at {}, swapping with row {}", p, r);
                        work.swap_rows(p, r)?;
                        result.swap_rows(p, r)?;
                    }
                    None => {
                        log::warn!("inverse: no usable pivot at position {} of {}", p, n);
                        return Err(MatrixError::Singular { pivot: p });
                    }
                }
            }

            let pivot = work.data[p * n + p];
            log::trace!("inverse: pivot {} = {}", p, pivot);
            for c in 0..n {
                work.data[p * n + c] /= pivot;
                result.data[p * n + c] /= pivot;
            }
            for i in (0..n).filter(|&i| i != p) {
                let factor = work.data[i * n + p];
                for c in 0..n {
                    let w = work.data[p * n + c];
                    work.data[i * n + c] -= factor * w;
                    let a = result.data[p * n + c];
                    result.data[i * n + c] -= factor * a;
                }
            }
        }

        for i in 0..n {
            let diagonal = work.data[i * n + i];
            if diagonal == 0.0 || !diagonal.is_finite() {
                return Err(MatrixError::Singular { pivot: i });
            }
            let row = &mut result.data[i * n..(i + 1) * n];
            for v in row.iter_mut() {
                *v /= diagonal;
            }
            if row.iter().any(|v| !v.is_finite()) {
                log::warn!("inverse: non-finite values in row {} of {}", i, n);
                return Err(MatrixError::Singular { pivot: i });
            }
        }
        Ok(result)
    }
}
