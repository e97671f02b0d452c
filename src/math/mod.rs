//! The dense matrix type and its operation families.
//!
//! `Matrix` lives in [`matrix`]; each sibling module adds one family of
//! methods to it (arithmetic, products, restructuring, inversion, reductions,
//! factories). [`parallel`] holds the row/column fan-out used by the
//! data-parallel operators.
pub mod arithmetic;
pub mod axis;
pub mod factory;
pub mod inverse;
pub mod matrix;
pub mod parallel;
pub mod product;
pub mod reduce;
pub mod structure;

pub use axis::Axis;
pub use matrix::Matrix;
