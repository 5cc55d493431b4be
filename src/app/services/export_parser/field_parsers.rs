//! Field parsing utilities for export rows
//!
//! This module provides helper functions for reading timestamps and readings
//! from CSV records. Readings follow the export's convention that an empty
//! cell and a zero value both mean "no reading".

use chrono::{DateTime, NaiveDateTime, Utc};
use csv::StringRecord;

use super::column_mapping::{ColumnMapping, Field};
use crate::constants::{EXPORT_TIME_FORMAT, EXPORT_TIME_STRICT_FORMAT};
use crate::{Error, Result};

/// Parse an export timestamp, treating it as UTC
///
/// The fractional seconds are required: `2022-09-10 14:45:00` is rejected.
pub fn parse_export_time(value: &str, field: Field) -> Result<DateTime<Utc>> {
    let invalid = |e: chrono::ParseError| {
        Error::datetime_parsing(
            format!(
                "Invalid timestamp for {}: '{}' (expected 'YYYY-MM-DD HH:MM:SS.ffffff')",
                field.column_name(),
                value
            ),
            e,
        )
    };

    NaiveDateTime::parse_from_str(value, EXPORT_TIME_STRICT_FORMAT).map_err(invalid)?;
    let naive = NaiveDateTime::parse_from_str(value, EXPORT_TIME_FORMAT).map_err(invalid)?;

    Ok(naive.and_utc())
}

/// Parse a reading cell; empty and zero values are absent
pub fn parse_reading(value: Option<&str>, field: Field) -> Result<Option<f64>> {
    let trimmed = match value.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(None),
    };

    let reading = trimmed
        .parse::<f64>()
        .map_err(|_| Error::invalid_number(field.column_name(), trimmed))?;

    Ok(nonzero(reading))
}

/// Map a zero reading to absent
pub fn nonzero(value: f64) -> Option<f64> {
    if value == 0.0 { None } else { Some(value) }
}

/// Get a field that must be present in the row
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field: Field,
    row: usize,
) -> Result<&'a str> {
    get_optional_field(record, mapping, field, row)?
        .ok_or_else(|| Error::missing_field(field.column_name(), row))
}

/// Get a field whose column must exist but whose cell may be cut short
///
/// Returns `Ok(None)` when the row has fewer cells than the header.
pub fn get_optional_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field: Field,
    row: usize,
) -> Result<Option<&'a str>> {
    let index = mapping
        .get_index(field)
        .ok_or_else(|| Error::missing_field(field.column_name(), row))?;

    Ok(record.get(index))
}
