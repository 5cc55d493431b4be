//! Core export parser implementation
//!
//! This module provides the main parser orchestration: reading the title line
//! and column names, turning each row into measurements (expanding side-files
//! where present) and ordering the result.

use csv::StringRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::header::ExportHeader;
use super::record_parser::{parse_row, side_file_name};
use super::side_file::{expand_records, read_side_records, side_file_path};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::Measurement;
use crate::config::ParserConfig;
use crate::{Error, Result};

/// Per-file state shared by all rows of one export
#[derive(Debug, Clone)]
pub struct ExportContext {
    /// Path of the export file, used to locate side-files
    pub path: PathBuf,

    /// Title line metadata
    pub header: ExportHeader,

    /// Column positions from the column-name line
    pub mapping: ColumnMapping,
}

/// Parser for oxygen saturation export files
///
/// Loading is strict: any malformed row aborts the whole file. A missing
/// side-file is not an error; the summary row is kept instead.
#[derive(Debug, Clone, Default)]
pub struct OxygenSaturationParser {
    config: ParserConfig,
}

impl OxygenSaturationParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a validated configuration
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Load an export file and all side-files it references
    ///
    /// Returns measurements sorted by start time; ties keep file order.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<Measurement>> {
        Ok(self.load_with_stats(path)?.measurements)
    }

    /// Load an export file and return measurements with statistics
    pub fn load_with_stats(&self, path: impl AsRef<Path>) -> Result<ParseResult> {
        let path = path.as_ref();
        let file_label = path.display().to_string();
        info!("Loading oxygen saturation export: {}", file_label);

        let mut stats = ParseStats::new();
        let mut measurements = Vec::new();

        {
            let file = File::open(path).map_err(|e| {
                Error::csv_parsing(&file_label, "Failed to open export file", Some(e.into()))
            })?;
            let mut input = BufReader::new(file);

            // The csv reader skips blank lines, so an empty title line must be caught here
            if starts_with_blank_line(&mut input)? {
                return Err(Error::malformed_header(&file_label, 0));
            }

            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(input);
            let mut records = reader.records();

            let title_record = records
                .next()
                .ok_or_else(|| Error::malformed_header(&file_label, 0))?
                .map_err(|e| Error::csv_parsing(&file_label, "Failed to read title line", Some(e)))?;
            let header = ExportHeader::parse(&title_record, &file_label)?;
            debug!("Export title: {}", header.title);

            let column_record = records
                .next()
                .ok_or_else(|| Error::missing_table_header(&file_label))?
                .map_err(|e| {
                    Error::csv_parsing(&file_label, "Failed to read column names", Some(e))
                })?;
            let mapping = ColumnMapping::analyze(&column_record);

            let missing = mapping.missing_fields();
            if !missing.is_empty() {
                warn!("Export {} lacks columns: {:?}", file_label, missing);
            }

            let context = ExportContext {
                path: path.to_path_buf(),
                header,
                mapping,
            };

            for (index, result) in records.enumerate() {
                let row = index + 1;
                let record = result.map_err(|e| {
                    Error::csv_parsing(&file_label, format!("Failed to read row {}", row), Some(e))
                })?;

                stats.rows_read += 1;
                measurements.extend(self.load_row(&context, &record, row, &mut stats)?);
            }
        }

        measurements.sort_by_key(|m| m.start);
        stats.measurements = measurements.len();

        info!(
            "Loaded {} measurements from {} rows ({} expanded from side-files)",
            stats.measurements, stats.rows_read, stats.rows_expanded
        );

        Ok(ParseResult {
            measurements,
            stats,
        })
    }

    /// Turn one data row into measurements
    ///
    /// Returns the side-file records when the row names a side-file with usable
    /// bins, otherwise the row's own record. `row` counts data rows from 1.
    pub fn load_row(
        &self,
        context: &ExportContext,
        record: &StringRecord,
        row: usize,
        stats: &mut ParseStats,
    ) -> Result<Vec<Measurement>> {
        let base = parse_row(record, &context.mapping, row)?;

        let name = match side_file_name(record, &context.mapping, row)? {
            Some(name) if self.config.expand_side_files => name,
            _ => return Ok(vec![base]),
        };

        let side_path = side_file_path(
            &context.path,
            &self.config.side_file_dir,
            &context.header.title,
            name,
        );

        let Some(bins) = read_side_records(&side_path)? else {
            stats.side_files_missing += 1;
            return Ok(vec![base]);
        };

        let expanded = expand_records(&base, &bins);
        stats.side_records_read += bins.len();
        stats.side_records_discarded += bins.len() - expanded.len();

        if expanded.is_empty() {
            debug!("Row {}: side-file {} has no usable bins", row, name);
            Ok(vec![base])
        } else {
            debug!("Row {}: expanded into {} bins from {}", row, expanded.len(), name);
            stats.rows_expanded += 1;
            Ok(expanded)
        }
    }
}

fn starts_with_blank_line<R: BufRead>(input: &mut R) -> Result<bool> {
    let buf = input.fill_buf()?;
    Ok(matches!(buf.first(), Some(b'\n' | b'\r')))
}
