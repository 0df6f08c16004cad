//! CLI surface: clap definitions and summary presentation only.
//!
//! Running with no arguments scans the current directory and writes
//! `blog.md`, matching the historical script invocation.

use crate::document::{self, PackSummary};
use crate::error::PackError;
use crate::logging::LoggingConfig;
use clap::Parser;
use std::path::PathBuf;

/// Blogpack CLI - concatenate exercise sources into one markdown document
#[derive(Parser)]
#[command(name = "blogpack")]
#[command(about = "Concatenates labeled exercise sources into a single markdown document")]
pub struct Cli {
    /// Base directory to scan for Ex* entries
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Output filename, written into the base directory
    #[arg(long, default_value = document::OUTPUT_FILENAME)]
    pub output: String,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

impl Cli {
    /// Build logging configuration from CLI flags.
    /// An explicit --log-level takes precedence over --verbose.
    pub fn logging_config(&self) -> LoggingConfig {
        let mut config = LoggingConfig::default();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(ref level) = self.log_level {
            config.level = level.clone();
        }
        if let Some(ref format) = self.log_format {
            config.format = format.clone();
        }
        config
    }

    /// Execute the pipeline for this invocation.
    pub fn execute(&self) -> Result<PackSummary, PackError> {
        document::generate(&self.dir, &self.output)
    }
}

/// Format the completion summary printed to stdout.
pub fn format_summary(summary: &PackSummary) -> String {
    format!(
        "Generated {}\nProcessed {} entries\nOutput: {}",
        summary
            .output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| summary.output_path.display().to_string()),
        summary.entries,
        summary.output_path.display()
    )
}
