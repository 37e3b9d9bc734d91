//! Descriptive statistics for continuous columns and frequency tables for
//! categorical ones.
//!
//! Undefined statistics (the mean of no values, the standard deviation of a
//! single value) are reported as NaN rather than as errors, and serialize to
//! JSON `null`.

use indexmap::IndexMap;
use serde::Serialize;

use super::stats::{quantile_sorted, sorted, RunningStats};
use crate::error::{Result, TablescopeError};
use crate::table::{Column, Table};

/// Descriptive statistics for a numeric column, over non-missing values.
#[derive(Debug, Clone, Serialize)]
pub struct DescriptiveStats {
    /// Column name.
    pub column: String,
    /// Number of non-missing values.
    pub count: usize,
    /// Number of missing values.
    pub missing_count: usize,
    /// Missing values as a percentage of all rows (0 for an empty column).
    pub missing_percentage: f64,
    pub mean: f64,
    /// Sample standard deviation (N-1); NaN when `count <= 1`.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// 25th percentile.
    pub p25: f64,
    /// Median.
    pub p50: f64,
    /// 75th percentile.
    pub p75: f64,
}

impl DescriptiveStats {
    /// Total rows, missing included.
    pub fn row_count(&self) -> usize {
        self.count + self.missing_count
    }

    /// Calculate the interquartile range.
    pub fn iqr(&self) -> f64 {
        self.p75 - self.p25
    }
}

/// Compute descriptive statistics for a numeric column.
///
/// Intended for continuous columns, but any numeric column is accepted.
/// Text columns yield [`TablescopeError::InvalidColumnKind`].
pub fn describe_continuous(table: &Table, column: &str) -> Result<DescriptiveStats> {
    let col = table.require_column(column)?;
    let values = numeric_values(col, "describe")?;
    Ok(describe_values(col.name().trim(), &values, col.len()))
}

fn numeric_values(col: &Column, operation: &'static str) -> Result<Vec<f64>> {
    col.present_numbers()
        .ok_or_else(|| TablescopeError::InvalidColumnKind {
            column: col.name().trim().to_string(),
            kind: col.kind(),
            operation,
        })
}

fn describe_values(name: &str, values: &[f64], row_count: usize) -> DescriptiveStats {
    let mut running = RunningStats::new();
    running.extend(values.iter().copied());

    let count = running.count();
    let missing_count = row_count - count;
    let missing_percentage = if row_count == 0 {
        0.0
    } else {
        missing_count as f64 * 100.0 / row_count as f64
    };

    let ordered = sorted(values.to_vec());

    DescriptiveStats {
        column: name.to_string(),
        count,
        missing_count,
        missing_percentage,
        mean: running.mean(),
        std_dev: running.sample_std(),
        min: running.min(),
        max: running.max(),
        p25: quantile_sorted(&ordered, 0.25),
        p50: quantile_sorted(&ordered, 0.50),
        p75: quantile_sorted(&ordered, 0.75),
    }
}

/// Occurrence counts of each distinct value in a column.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrequencyTable {
    /// Column name.
    pub column: String,
    /// Distinct value label -> count, in order of first appearance.
    pub counts: IndexMap<String, usize>,
    /// Rows with a missing value.
    pub missing: usize,
}

impl FrequencyTable {
    /// Sum of all buckets, missing included. Equals the row count.
    pub fn total(&self) -> usize {
        self.counts.values().sum::<usize>() + self.missing
    }

    /// Number of distinct non-missing values.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn get(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Buckets sorted by count, most frequent first. Ties keep first-seen order.
    pub fn most_common(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> =
            self.counts.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

/// Count occurrences of each distinct value, with missing values in their own bucket.
pub fn frequency_table(table: &Table, column: &str) -> Result<FrequencyTable> {
    let col = table.require_column(column)?;

    let mut freq = FrequencyTable {
        column: col.name().trim().to_string(),
        ..Default::default()
    };
    for row in 0..col.len() {
        match col.label_at(row) {
            Some(label) => *freq.counts.entry(label).or_insert(0) += 1,
            None => freq.missing += 1,
        }
    }

    Ok(freq)
}
