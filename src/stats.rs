//! Descriptive statistics over a single row or column of values.
//!
//! These are the per-vector functions fed to the statistical reducer in
//! [`crate::math::reduce`]. Order statistics work on a sorted copy; the input
//! slice is never reordered. Empty input yields `NaN` (or `None` for the
//! index functions), matching the `statrs` convention.
use statrs::statistics::Statistics;

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut data = values.to_vec();
    data.sort_by(|a, b| a.total_cmp(b));
    data
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().mean()
}

/// Mean of the squared values.
pub fn mean_square(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64
}

/// Index of the first occurrence of the largest value.
pub fn max_index(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some(b) if v <= values[b] || v.is_nan() => {}
            None if v.is_nan() => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Index of the first occurrence of the smallest value.
pub fn min_index(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some(b) if v >= values[b] || v.is_nan() => {}
            None if v.is_nan() => {}
            _ => best = Some(i),
        }
    }
    best
}

pub fn max(values: &[f64]) -> f64 {
    max_index(values).map_or(f64::NAN, |i| values[i])
}

pub fn min(values: &[f64]) -> f64 {
    min_index(values).map_or(f64::NAN, |i| values[i])
}

pub fn range(values: &[f64]) -> f64 {
    max(values) - min(values)
}

/// Median of `values`.
///
/// For an even count this averages the sorted elements at `n/2` and
/// `n/2 + 1`, one position above the conventional middle pair. The upper
/// index is clamped to the last element when `n == 2`.
pub fn median(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    let data = sorted(values);
    if n % 2 == 1 {
        data[n / 2]
    } else {
        let upper = (n / 2 + 1).min(n - 1);
        (data[n / 2] + data[upper]) / 2.0
    }
}

// Conventional median of an already sorted slice.
fn sorted_median(data: &[f64]) -> f64 {
    let m = data.len();
    if m % 2 == 1 {
        data[m / 2]
    } else {
        (data[m / 2 - 1] + data[m / 2]) / 2.0
    }
}

/// First quartile.
///
/// Counts of the form `4k+1` and `4k+3` interpolate between neighbouring
/// order statistics; even counts take the median of the lower half.
pub fn quartile1(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    let data = sorted(values);
    if n == 1 {
        return data[0];
    }
    let k = n / 4;
    match n % 4 {
        1 => 0.25 * data[k - 1] + 0.75 * data[k],
        3 => 0.75 * data[k] + 0.25 * data[k + 1],
        _ => sorted_median(&data[..n / 2]),
    }
}

/// Third quartile, the mirror of [`quartile1`].
pub fn quartile3(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    let data = sorted(values);
    if n == 1 {
        return data[0];
    }
    let k = n / 4;
    match n % 4 {
        1 => 0.75 * data[3 * k] + 0.25 * data[3 * k + 1],
        3 => 0.25 * data[3 * k + 1] + 0.75 * data[3 * k + 2],
        _ => sorted_median(&data[n / 2..]),
    }
}

pub fn interquartile_range(values: &[f64]) -> f64 {
    quartile3(values) - quartile1(values)
}

/// Most frequent value; ties resolve to the smallest value.
pub fn mode(values: &[f64]) -> f64 {
    let data = sorted(values);
    let mut best = f64::NAN;
    let mut best_count = 0usize;
    let mut i = 0;
    while i < data.len() {
        let value = data[i];
        let mut j = i + 1;
        while j < data.len() && data[j] == value {
            j += 1;
        }
        if j - i > best_count {
            best_count = j - i;
            best = value;
        }
        i = j;
    }
    best
}

/// Sample variance (`n - 1` denominator).
pub fn variance(values: &[f64]) -> f64 {
    values.iter().variance()
}

/// Sample standard deviation.
pub fn standard_deviation(values: &[f64]) -> f64 {
    values.iter().std_dev()
}
