//! Describe command - summarize one column by its classification.

use std::path::PathBuf;

use colored::Colorize;
use tablescope::analysis::Histogram;
use tablescope::{ColumnDetail, DescriptiveStats, FrequencyTable};

use super::{heading, load, stat};
use crate::cli::AnalysisOptions;

/// Widest bar drawn for a histogram bin or frequency.
const BAR_WIDTH: usize = 40;

pub fn run(
    file: PathBuf,
    column: String,
    bins: Option<usize>,
    json_output: bool,
    options: &AnalysisOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let (explorer, table, _source) = load(&file, options, bins)?;
    let mut detail = explorer.describe_column(&table, &column)?;

    // Histograms are only shown on request
    if bins.is_none() {
        if let ColumnDetail::Continuous { histogram, .. } = &mut detail {
            *histogram = None;
        }
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    match &detail {
        ColumnDetail::Continuous { stats, histogram } => {
            print_stats(stats);
            if let Some(h) = histogram {
                println!();
                print_histogram(h);
            }
        }
        ColumnDetail::Categorical { frequencies } => print_frequencies(frequencies),
    }

    Ok(())
}

fn print_stats(stats: &DescriptiveStats) {
    println!(
        "{} {} {}",
        "Column".cyan().bold(),
        stats.column.white().bold(),
        "(continuous)".dimmed()
    );
    println!();

    heading("Statistics:");
    println!("  Count:   {}", stats.count.to_string().white());
    println!(
        "  Missing: {} ({:.1}%)",
        stats.missing_count.to_string().white(),
        stats.missing_percentage
    );
    println!("  Mean:    {}", stat(stats.mean).white());
    println!("  Std:     {}", stat(stats.std_dev).white());
    println!("  Min:     {}", stat(stats.min).white());
    println!("  25%:     {}", stat(stats.p25).white());
    println!("  50%:     {}", stat(stats.p50).white());
    println!("  75%:     {}", stat(stats.p75).white());
    println!("  IQR:     {}", stat(stats.iqr()).white());
    println!("  Max:     {}", stat(stats.max).white());
}

fn print_histogram(histogram: &Histogram) {
    heading("Histogram:");
    let peak = histogram.counts.iter().copied().max().unwrap_or(0).max(1);
    for (i, count) in histogram.counts.iter().enumerate() {
        let len = count * BAR_WIDTH / peak;
        println!(
            "  [{:>10}, {:>10}) {:>6} {}",
            stat(histogram.edges[i]),
            stat(histogram.edges[i + 1]),
            count,
            "█".repeat(len).cyan()
        );
    }
}

fn print_frequencies(frequencies: &FrequencyTable) {
    println!(
        "{} {} {}",
        "Column".cyan().bold(),
        frequencies.column.white().bold(),
        "(categorical)".dimmed()
    );
    println!();

    println!("  Distinct: {}", frequencies.distinct().to_string().white());
    println!();

    heading("Frequencies:");
    let total = frequencies.total().max(1);
    let width = frequencies
        .counts
        .keys()
        .map(|k| k.len())
        .max()
        .unwrap_or(0)
        .max("<missing>".len());

    for (value, count) in frequencies.most_common() {
        let len = count * BAR_WIDTH / total;
        println!(
            "  {:width$}  {:>6}  {}",
            value,
            count,
            "█".repeat(len).blue(),
            width = width
        );
    }
    if frequencies.missing > 0 {
        println!(
            "  {:width$}  {:>6}",
            "<missing>".dimmed(),
            frequencies.missing.to_string().red(),
            width = width
        );
    }
}
