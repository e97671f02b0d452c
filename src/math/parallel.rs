//! Data-parallel fan-out over disjoint rows or columns of an output buffer.
//!
//! Every task owns one row (or column) of the output and only reads its
//! inputs, so no synchronisation is needed. The sequential path runs the
//! identical per-task closure in index order and yields the same result.
use rayon::prelude::*;

use crate::config::{effective_execution, engine_config, Execution};

fn use_parallel(units: usize) -> bool {
    effective_execution() == Execution::Parallel && units >= engine_config().min_parallel_rows
}

/// Run `f(row_index, row)` for each `width`-sized row of `out`.
pub fn for_each_row<F>(out: &mut [f64], width: usize, f: F)
where
    F: Fn(usize, &mut [f64]) + Sync + Send,
{
    if width == 0 {
        return;
    }
    let rows = out.len() / width;
    if use_parallel(rows) {
        log::debug!("dispatching {} rows of width {} in parallel", rows, width);
        out.par_chunks_mut(width)
            .enumerate()
            .for_each(|(i, row)| f(i, row));
    } else {
        for (i, row) in out.chunks_mut(width).enumerate() {
            f(i, row);
        }
    }
}

/// Build a row-major `rows x cols` buffer where `f(column_index, column)`
/// fills each column of `rows` values.
pub fn for_each_column<F>(rows: usize, cols: usize, f: F) -> Vec<f64>
where
    F: Fn(usize, &mut [f64]) + Sync + Send,
{
    let mut column_major = vec![0.0; rows * cols];
    if rows > 0 {
        if use_parallel(cols) {
            log::debug!("dispatching {} columns of height {} in parallel", cols, rows);
            column_major
                .par_chunks_mut(rows)
                .enumerate()
                .for_each(|(j, column)| f(j, column));
        } else {
            for (j, column) in column_major.chunks_mut(rows).enumerate() {
                f(j, column);
            }
        }
    }

    let mut out = vec![0.0; rows * cols];
    for j in 0..cols {
        for i in 0..rows {
            out[i * cols + j] = column_major[j * rows + i];
        }
    }
    out
}
