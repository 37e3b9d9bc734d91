//! Scatter command - x/y points for a relationship plot.

use std::path::PathBuf;

use colored::Colorize;
use tablescope::analysis::scatter;

use super::{load, stat};
use crate::cli::AnalysisOptions;

/// Points printed in human-readable mode.
const MAX_PREVIEW_POINTS: usize = 20;

pub fn run(
    file: PathBuf,
    x: String,
    y: String,
    color_by: Option<String>,
    json_output: bool,
    options: &AnalysisOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_explorer, table, _source) = load(&file, options, None)?;
    let series = scatter(&table, &x, &y, color_by.as_deref())?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    println!("{}", series.title.cyan().bold());
    println!(
        "  {} points{}",
        series.points.len().to_string().white().bold(),
        series
            .color_column
            .as_ref()
            .map(|c| format!(", colored by {}", c))
            .unwrap_or_default()
    );
    println!();

    for point in series.points.iter().take(MAX_PREVIEW_POINTS) {
        let category = point.category.as_deref().unwrap_or("");
        println!(
            "  {:>12}  {:>12}  {}",
            stat(point.x),
            stat(point.y),
            category.blue()
        );
    }
    if series.points.len() > MAX_PREVIEW_POINTS {
        println!(
            "  {} more (use --json for all points)",
            (series.points.len() - MAX_PREVIEW_POINTS).to_string().dimmed()
        );
    }

    Ok(())
}
