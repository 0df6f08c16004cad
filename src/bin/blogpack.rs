//! Blogpack CLI Binary
//!
//! Command-line interface for the blogpack document generator.

use blogpack::cli::{format_summary, Cli};
use blogpack::logging::init_logging;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = cli.logging_config();
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Blogpack starting");

    match cli.execute() {
        Ok(summary) => {
            info!("Document generation completed");
            println!("{}", format_summary(&summary));
        }
        Err(e) => {
            error!("Document generation failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
