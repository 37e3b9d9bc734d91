//! Data behind distribution and relationship charts.

use serde::Serialize;

use crate::error::{Result, TablescopeError};
use crate::table::{Column, Table};

/// Default number of histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 50;

/// Equal-width histogram of a numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub column: String,
    /// `bins + 1` ascending bin edges.
    pub edges: Vec<f64>,
    /// Values per bin. Every bin is half-open except the last, which
    /// includes its right edge.
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin the finite, non-missing values of a numeric column.
pub fn histogram(table: &Table, column: &str, bins: usize) -> Result<Histogram> {
    if bins == 0 {
        return Err(TablescopeError::InvalidArgument(
            "histogram needs at least one bin".to_string(),
        ));
    }

    let col = table.require_column(column)?;
    let name = col.name().trim().to_string();
    let values: Vec<f64> = numeric(col, "histogram")?
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .collect();

    if values.is_empty() {
        return Err(TablescopeError::InsufficientData {
            column: name,
            operation: "histogram",
            required: 1,
            found: 0,
        });
    }

    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|i| lo + i as f64 * width).collect();
    edges.push(hi);

    let mut counts = vec![0; bins];
    for v in values {
        let idx = (((v - lo) / (hi - lo)) * bins as f64) as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    Ok(Histogram {
        column: name,
        edges,
        counts,
    })
}

/// One plotted point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Label from the color-encoding column, if one was requested and present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Points for an x/y relationship plot.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterSeries {
    pub title: String,
    pub x_column: String,
    pub y_column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_column: Option<String>,
    pub points: Vec<ScatterPoint>,
}

/// Collect (x, y) points from rows where both are present, optionally
/// labelled by a third column.
pub fn scatter(table: &Table, x: &str, y: &str, color_by: Option<&str>) -> Result<ScatterSeries> {
    let x_col = table.require_column(x)?;
    let y_col = table.require_column(y)?;
    let color_col = color_by.map(|c| table.require_column(c)).transpose()?;

    let xs = numeric(x_col, "scatter")?;
    let ys = numeric(y_col, "scatter")?;

    let points = xs
        .iter()
        .zip(ys)
        .enumerate()
        .filter_map(|(row, (x, y))| {
            Some(ScatterPoint {
                x: (*x)?,
                y: (*y)?,
                category: color_col.and_then(|c| c.label_at(row)),
            })
        })
        .collect();

    let x_column = x_col.name().trim().to_string();
    let y_column = y_col.name().trim().to_string();

    Ok(ScatterSeries {
        title: format!("{} VS {}", capitalize(&x_column), capitalize(&y_column)),
        x_column,
        y_column,
        color_column: color_col.map(|c| c.name().trim().to_string()),
        points,
    })
}

fn numeric<'a>(col: &'a Column, operation: &'static str) -> Result<&'a [Option<f64>]> {
    col.as_numeric()
        .ok_or_else(|| TablescopeError::InvalidColumnKind {
            column: col.name().trim().to_string(),
            kind: col.kind(),
            operation,
        })
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
