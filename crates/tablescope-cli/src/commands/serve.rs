//! Serve command - expose the analysis as a JSON API.

use std::path::PathBuf;

use colored::Colorize;
use tablescope::Explorer;

use super::load;
use crate::cli::AnalysisOptions;
use crate::server::{app, state::AppState};

pub fn run(
    file: Option<PathBuf>,
    port: u16,
    options: &AnalysisOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = match &file {
        Some(path) => {
            let (explorer, table, source) = load(path, options, None)?;
            AppState::with_dataset(explorer, table, source)
        }
        None => {
            println!(
                "{} No file given, upload one with POST /api/dataset",
                "Note:".yellow()
            );
            AppState::new(Explorer::with_config(options.explorer_config(None)))
        }
    };

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting analysis server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    if let Some(path) = &file {
        println!("  File: {}", path.display());
    }
    println!("  API:  {}/api", url);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
