//! Pairwise Pearson correlation over continuous columns.
//!
//! Each pair uses only the rows where both columns are non-missing
//! (pairwise-complete observations), so different cells of one matrix may
//! be computed over different row subsets.

use serde::Serialize;

use crate::error::{Result, TablescopeError};
use crate::table::Table;

/// Square, symmetric matrix of correlation coefficients.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorrelationMatrix {
    /// Column names, in row/column order of `values`.
    pub columns: Vec<String>,
    /// `values[i][j]` is the correlation of `columns[i]` with `columns[j]`.
    /// NaN where undefined.
    pub values: Vec<Vec<f64>>,
}

/// A pair of columns and their correlation.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationPair {
    pub col_a: String,
    pub col_b: String,
    pub r: f64,
}

impl CorrelationMatrix {
    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.columns.iter().position(|c| c == name)
    }

    /// Correlation between two columns by name.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Some(self.values[i][j])
    }

    /// Off-diagonal pairs with |r| above `threshold`, strongest first.
    pub fn strong_pairs(&self, threshold: f64) -> Vec<CorrelationPair> {
        let n = self.len();
        let mut pairs = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let r = self.values[i][j];
                if r.abs() > threshold {
                    pairs.push(CorrelationPair {
                        col_a: self.columns[i].clone(),
                        col_b: self.columns[j].clone(),
                        r,
                    });
                }
            }
        }
        pairs.sort_by(|a, b| b.r.abs().total_cmp(&a.r.abs()));
        pairs
    }
}

/// Compute the Pearson correlation matrix for the given numeric columns.
pub fn correlation_matrix<S: AsRef<str>>(
    table: &Table,
    continuous_columns: &[S],
) -> Result<CorrelationMatrix> {
    let series = continuous_columns
        .iter()
        .map(|name| {
            let col = table.require_column(name.as_ref())?;
            col.as_numeric()
                .ok_or_else(|| TablescopeError::InvalidColumnKind {
                    column: col.name().trim().to_string(),
                    kind: col.kind(),
                    operation: "correlation",
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let n = series.len();
    let mut values = vec![vec![1.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let r = pearson(series[i], series[j]).unwrap_or(f64::NAN);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: continuous_columns
            .iter()
            .map(|c| c.as_ref().trim().to_string())
            .collect(),
        values,
    })
}

/// Pearson correlation over rows where both values are present.
///
/// `None` when fewer than two complete pairs exist or either side has zero
/// variance over those pairs.
fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let mean_x = running_mean(pairs.iter().map(|p| p.0));
    let mean_y = running_mean(pairs.iter().map(|p| p.1));

    // Deviations are scaled into [-1, 1] so the sums neither overflow for
    // huge magnitudes nor underflow for tiny ones
    let scale_x = max_deviation(pairs.iter().map(|p| p.0), mean_x);
    let scale_y = max_deviation(pairs.iter().map(|p| p.1), mean_y);
    if !(scale_x.is_finite() && scale_y.is_finite()) || scale_x == 0.0 || scale_y == 0.0 {
        return None;
    }

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for &(x, y) in &pairs {
        let dx = (x - mean_x) / scale_x;
        let dy = (y - mean_y) / scale_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    // sqrt of the product keeps identical columns at exactly 1.0
    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// Incremental mean, which stays finite wherever the inputs are.
fn running_mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut mean = 0.0;
    for (i, v) in values.enumerate() {
        mean += (v - mean) / (i + 1) as f64;
    }
    mean
}

/// Largest absolute distance from `mean`. NaN when any deviation is.
fn max_deviation(values: impl Iterator<Item = f64>, mean: f64) -> f64 {
    values.fold(0.0, |acc: f64, v| {
        let d = (v - mean).abs();
        if acc.is_nan() || d.is_nan() { f64::NAN } else { acc.max(d) }
    })
}
