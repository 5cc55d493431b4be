//! Summary row parsing for oxygen saturation exports
//!
//! Converts one CSV row into a base [`Measurement`]. Base records are returned
//! as-is, even when they carry no readings.

use csv::StringRecord;

use super::column_mapping::{ColumnMapping, Field};
use super::field_parsers::{get_optional_field, get_required_field, parse_export_time, parse_reading};
use crate::Result;
use crate::app::models::Measurement;

/// Parse a single summary row
///
/// Start and end are stored as UTC; the row's time_offset is not applied.
pub fn parse_row(record: &StringRecord, mapping: &ColumnMapping, row: usize) -> Result<Measurement> {
    let start = parse_export_time(
        get_required_field(record, mapping, Field::StartTime, row)?,
        Field::StartTime,
    )?;
    let end = parse_export_time(
        get_required_field(record, mapping, Field::EndTime, row)?,
        Field::EndTime,
    )?;

    let reading = |field: Field| -> Result<Option<f64>> {
        parse_reading(get_optional_field(record, mapping, field, row)?, field)
    };

    Ok(Measurement::new(start, end)
        .with_min(reading(Field::MinSpo2)?)
        .with_max(reading(Field::MaxSpo2)?)
        .with_average(reading(Field::Spo2)?)
        .with_auxiliary_rate(reading(Field::HeartRate)?)
        .with_low_duration(reading(Field::LowDuration)?))
}

/// Name of the side-file referenced by a row, if any
pub fn side_file_name<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    row: usize,
) -> Result<Option<&'a str>> {
    Ok(get_optional_field(record, mapping, Field::Binning, row)?.filter(|name| !name.is_empty()))
}
