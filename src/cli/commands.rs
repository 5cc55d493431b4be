//! Command implementation for the SpO2 importer CLI
//!
//! This module contains the command execution logic: logging setup, loading
//! the export and writing measurements in the requested format.

use crate::app::services::export_parser::{OxygenSaturationParser, ParseResult, ParseStats};
use crate::cli::args::{Args, OutputFormat};
use anyhow::{Context, Result};
use colored::*;
use std::io::{self, Write};
use tracing::{debug, info};

/// Main command runner
///
/// 1. Set up logging
/// 2. Validate arguments and build the parser
/// 3. Load the export with its side-files
/// 4. Write the measurements to stdout
pub fn run(args: Args) -> Result<ParseStats> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let parser = OxygenSaturationParser::with_config(args.parser_config())?;
    let result = parser
        .load_with_stats(&args.input)
        .with_context(|| format!("Failed to load export {}", args.input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_measurements(&mut out, &result, args.output_format)?;
    out.flush()?;

    info!("Wrote {} measurements", result.stats.measurements);
    Ok(result.stats)
}

/// Write measurements and, for human output, a summary
pub fn write_measurements<W: Write>(
    out: &mut W,
    result: &ParseResult,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for measurement in &result.measurements {
                writeln!(out, "{}", measurement)?;
            }
            writeln!(out)?;
            write_summary(out, &result.stats)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &result.measurements)
                .context("Failed to serialize measurements")?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn write_summary<W: Write>(out: &mut W, stats: &ParseStats) -> Result<()> {
    writeln!(out, "{}", "Summary".bold())?;
    writeln!(out, "  rows read:         {}", stats.rows_read)?;
    writeln!(
        out,
        "  rows expanded:     {} ({:.1}%)",
        stats.rows_expanded,
        stats.expansion_rate()
    )?;
    writeln!(out, "  side-files absent: {}", stats.side_files_missing)?;
    writeln!(
        out,
        "  bins kept:         {} of {}",
        stats.side_records_read - stats.side_records_discarded,
        stats.side_records_read
    )?;
    writeln!(
        out,
        "  {} {}",
        "measurements:".green(),
        stats.measurements
    )?;
    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("spo2_import={}", log_level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}
