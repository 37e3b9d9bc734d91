//! tablescope CLI - exploratory data analysis for CSV files.

mod cli;
mod commands;
mod logger;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let options = cli.options;
    let result = match cli.command {
        Commands::Overview { file, json } => commands::overview::run(file, json, &options),

        Commands::Describe {
            file,
            column,
            bins,
            json,
        } => commands::describe::run(file, column, bins, json, &options),

        Commands::Correlate { file, json } => commands::correlate::run(file, json, &options),

        Commands::Scatter {
            file,
            x,
            y,
            color_by,
            json,
        } => commands::scatter::run(file, x, y, color_by, json, &options),

        Commands::Report { file, output } => commands::report::run(file, output, &options),

        Commands::Serve { file, port } => commands::serve::run(file, port, &options),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
