//! Command-line argument definitions for the SpO2 importer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ParserConfig;
use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_SIDE_FILE_DIR};
use crate::{Error, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the SpO2 importer
///
/// Reads a Samsung Health oxygen saturation export, expands its binned
/// side-files and prints the resulting measurements in time order.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "spo2-import",
    version,
    about = "Read Samsung Health oxygen saturation exports",
    long_about = "Reads an oxygen saturation CSV exported from Samsung Health together with \
                  the binned JSON side-files it references, and prints one measurement per \
                  interval in chronological order."
)]
pub struct Args {
    /// Path to the exported oxygen saturation CSV file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format for the measurement listing
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for measurements"
    )]
    pub output_format: OutputFormat,

    /// Keep summary rows instead of expanding side-files
    #[arg(
        long = "no-side-files",
        help = "Do not read binned side-files"
    )]
    pub no_side_files: bool,

    /// Directory next to the export that holds side-files
    #[arg(
        long = "side-file-dir",
        value_name = "NAME",
        default_value = DEFAULT_SIDE_FILE_DIR,
        help = "Side-file directory name next to the export file"
    )]
    pub side_file_dir: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per measurement plus a summary
    Human,
    /// JSON array of measurements
    Json,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        self.parser_config().validate()
    }

    /// Build the parser configuration from the arguments
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::default()
            .with_side_file_dir(self.side_file_dir.clone())
            .with_side_file_expansion(!self.no_side_files)
    }

    /// Get the log level for tracing configuration
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
