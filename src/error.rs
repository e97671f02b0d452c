use std::error::Error;
use std::fmt;

/// Error raised by matrix operations.
///
/// Validation happens before any computation starts, so a non-mutating
/// operation that returns an error leaves its operands untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A required input was absent (an empty table, row or value slice).
    NullArgument { what: &'static str },
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        operation: &'static str,
        detail: String,
    },
    /// A row or column index is outside `[0, bound)`.
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        bound: usize,
    },
    /// Inversion found no usable pivot at this diagonal position.
    Singular { pivot: usize },
}

impl MatrixError {
    pub(crate) fn shapes(
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        MatrixError::DimensionMismatch {
            operation,
            detail: format!("{}x{} vs {}x{}", left.0, left.1, right.0, right.1),
        }
    }

    pub(crate) fn row(index: usize, bound: usize) -> Self {
        MatrixError::IndexOutOfRange {
            axis: "row",
            index,
            bound,
        }
    }

    pub(crate) fn column(index: usize, bound: usize) -> Self {
        MatrixError::IndexOutOfRange {
            axis: "column",
            index,
            bound,
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::NullArgument { what } => write!(f, "missing required argument: {}", what),
            MatrixError::DimensionMismatch { operation, detail } => {
                write!(f, "dimension mismatch in {}: {}", operation, detail)
            }
            MatrixError::IndexOutOfRange { axis, index, bound } => write!(
                f,
                "{} index {} out of range for {} {}s",
                axis, index, bound, axis
            ),
            MatrixError::Singular { pivot } => {
                write!(f, "matrix is singular: no usable pivot at position {}", pivot)
            }
        }
    }
}

impl Error for MatrixError {}

pub type Result<T> = std::result::Result<T, MatrixError>;
