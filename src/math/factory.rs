//! Matrix constructors: identity, constant, random and magic squares.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{MatrixError, Result};
use crate::math::axis::Axis;
use crate::math::matrix::Matrix;

impl Matrix {
    /// `n x n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn identity(n: usize) -> Matrix {
        let mut m = Matrix::square(n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Matrix of ones.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn ones(rows: usize, cols: usize) -> Matrix {
        let mut m = Matrix::zeros(rows, cols);
        m.fill(1.0);
        m
    }

    /// `n x n` matrix of ones.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn ones_square(n: usize) -> Matrix {
        Matrix::ones(n, n)
    }

    /// Uniform `[0, 1)` values, seeded from the sub-second part of the clock.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn rand(rows: usize, cols: usize) -> Matrix {
        let seed = u64::from(chrono::Utc::now().timestamp_subsec_nanos());
        Matrix::rand_seeded(rows, cols, seed)
    }

    /// Uniform `[0, 1)` values from a deterministic generator.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn rand_seeded(rows: usize, cols: usize, seed: u64) -> Matrix {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut m = Matrix::zeros(rows, cols);
        for v in m.data.iter_mut() {
            *v = rng.gen::<f64>();
        }
        m
    }

    /// `n x n` magic square holding each of `1..=n²` once.
    ///
    /// Odd orders use the Siamese method, multiples of four the diagonal
    /// complement pattern and the remaining even orders Strachey's quadrant
    /// construction. Order 2 has no magic square.
    pub fn magic(n: usize) -> Result<Matrix> {
        match n {
            0 => Err(MatrixError::NullArgument { what: "magic square order" }),
            1 => Ok(Matrix::identity(1)),
            2 => Err(MatrixError::DimensionMismatch {
                operation: "magic",
                detail: "no magic square of order 2 exists".to_string(),
            }),
            n if n % 2 == 1 => Ok(siamese(n)),
            n if n % 4 == 0 => Ok(doubly_even(n)),
            n => strachey(n),
        }
    }
}

// Start in the middle of the top row, step up and to the right with
// wrap-around, and drop one row instead when the target is taken.
fn siamese(n: usize) -> Matrix {
    let mut m = Matrix::square(n);
    let (mut r, mut c) = (0, n / 2);
    for value in 1..=n * n {
        m.data[r * n + c] = value as f64;
        let (up, right) = ((r + n - 1) % n, (c + 1) % n);
        if m.data[up * n + right] != 0.0 {
            r = (r + 1) % n;
        } else {
            r = up;
            c = right;
        }
    }
    m
}

// Fill 1..n² in reading order, replacing cells on the diagonals of every
// 4x4 block with their complement n² + 1 - v.
fn doubly_even(n: usize) -> Matrix {
    let mut m = Matrix::square(n);
    let total = (n * n + 1) as f64;
    for r in 0..n {
        for c in 0..n {
            let value = (r * n + c + 1) as f64;
            let on_diagonal = r % 4 == c % 4 || (r % 4) + (c % 4) == 3;
            m.data[r * n + c] = if on_diagonal { total - value } else { value };
        }
    }
    m
}

// Orders 4k+2: four odd quadrants offset by 0, q², 2q² and 3q², with column
// blocks exchanged between the left and right quadrant pairs.
fn strachey(n: usize) -> Result<Matrix> {
    let q = n / 2;
    let k = (n - 2) / 4;
    let base = siamese(q);
    let offset = (q * q) as f64;

    let mut top_left = base.clone();
    let mut bottom_right = base.add_scalar(offset);
    let mut top_right = base.add_scalar(2.0 * offset);
    let mut bottom_left = base.add_scalar(3.0 * offset);

    let middle = q / 2;
    for r in 0..q {
        // Leftmost k columns, shifted one to the right on the middle row.
        let shift = if r == middle { 1 } else { 0 };
        for c in shift..k + shift {
            let i = r * q + c;
            std::mem::swap(&mut top_left.data[i], &mut bottom_left.data[i]);
        }
        // Rightmost k - 1 columns.
        for c in q + 1 - k..q {
            let i = r * q + c;
            std::mem::swap(&mut top_right.data[i], &mut bottom_right.data[i]);
        }
    }

    let top = Matrix::join(&top_left, &top_right, Axis::Columns)?;
    let bottom = Matrix::join(&bottom_left, &bottom_right, Axis::Columns)?;
    Matrix::join(&top, &bottom, Axis::Rows)
}
