//! mlmatrix: the dense matrix engine behind a small machine-learning toolkit.
//!
//! The crate provides a row-major `f64` [`Matrix`] with element-wise and
//! scalar arithmetic, products (including transpose-fused variants),
//! row/column restructuring, Gauss-Jordan inversion, axis reductions backed
//! by descriptive statistics, and identity/constant/random/magic-square
//! factories.
//!
//! Row-parallel operators fan out over rayon; [`config`] controls when they
//! do and lets a caller pin a computation to the sequential path, which
//! produces identical results.
pub mod config;
pub mod error;
pub mod math;
pub mod stats;

pub use config::{EngineConfig, Execution};
pub use error::{MatrixError, Result};
pub use math::{Axis, Matrix};
