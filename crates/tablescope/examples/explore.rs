//! Example: Explore a tabular data file with tablescope.
//!
//! Usage:
//!   cargo run --example explore -- <file_path>
//!
//! Example:
//!   cargo run --example explore -- titanic.csv

use std::env;
use std::path::Path;

use tablescope::Explorer;

fn main() -> tablescope::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example explore -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example explore -- titanic.csv");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Exploration: {}", file_path);
    println!("{}", separator);
    println!();

    let report = Explorer::new().explore(path)?;

    println!("## Dataset Overview");
    println!("  Rows: {}", report.overview.rows);
    println!("  Duplicates: {}", report.overview.duplicate_rows);
    println!("  Features: {}", report.overview.features);
    println!(
        "  Categorical Columns ({}): {:?}",
        report.overview.categorical_columns,
        report.classification.categorical()
    );
    println!(
        "  Continuous Columns ({}): {:?}",
        report.overview.continuous_columns,
        report.classification.continuous()
    );
    println!();

    println!("## Continuous Features");
    println!();
    for stats in report.continuous.values() {
        println!(
            "  {:20} count={:<6} missing={:<4} ({:.2}%) mean={:.2} std={:.2}",
            stats.column,
            stats.count,
            stats.missing_count,
            stats.missing_percentage,
            stats.mean,
            stats.std_dev
        );
        println!(
            "  {:20} min={} p25={} p50={} p75={} max={}",
            "", stats.min, stats.p25, stats.p50, stats.p75, stats.max
        );
    }
    println!();

    println!("## Categorical Features");
    println!();
    for freq in report.categorical.values() {
        let top: Vec<String> = freq
            .most_common()
            .into_iter()
            .take(5)
            .map(|(value, count)| format!("{}={}", value, count))
            .collect();
        println!("  {:20} {} (missing={})", freq.column, top.join(", "), freq.missing);
    }
    println!();

    println!("## Correlation");
    println!();
    print!("  {:>12}", "");
    for name in &report.correlation.columns {
        print!(" {:>12.12}", name);
    }
    println!();
    for (name, row) in report.correlation.columns.iter().zip(&report.correlation.values) {
        print!("  {:>12.12}", name);
        for r in row {
            print!(" {:>12.2}", r);
        }
        println!();
    }
    println!();

    println!("## Missing Values");
    for entry in &report.missing {
        println!(
            "  {:20} {:>6} missing / {:>6} present",
            entry.column, entry.missing, entry.present
        );
    }
    println!();

    println!("{}", separator);

    Ok(())
}
