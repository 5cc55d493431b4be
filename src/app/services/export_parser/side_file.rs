//! Binned side-files for oxygen saturation exports
//!
//! A summary row may name a JSON side-file holding finer-grained bins, e.g.
//! `[{"spo2":0,"spo2_max":98,"spo2_min":95,"start_time":1662821111851,"end_time":1662821170851}]`.
//! Side-files are bucketed by the first character of their name:
//! `<export dir>/<side-file dir>/<title>/<first char>/<name>`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::app::models::{Measurement, is_reading};
use crate::{Error, Result};

/// One bin record from a side-file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SideRecord {
    /// Bin start, epoch milliseconds
    pub start_time: i64,

    /// Bin end, epoch milliseconds
    pub end_time: i64,

    /// Average SpO2 (zero in most real exports)
    pub spo2: Option<f64>,

    pub spo2_min: Option<f64>,

    pub spo2_max: Option<f64>,
}

/// Build the location of a side-file
pub fn side_file_path(export_path: &Path, side_file_dir: &str, title: &str, name: &str) -> PathBuf {
    let bucket: String = name.chars().take(1).collect();

    export_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(side_file_dir)
        .join(title)
        .join(bucket)
        .join(name)
}

/// Read all bin records of a side-file
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_side_records(path: &Path) -> Result<Option<Vec<SideRecord>>> {
    if !path.exists() {
        debug!("Side-file not found: {}", path.display());
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::io(format!("Failed to read side-file {}", path.display()), e)
    })?;

    let records: Vec<SideRecord> = serde_json::from_str(&content)
        .map_err(|e| Error::side_file_format(path.display().to_string(), e))?;

    debug!("Read {} bins from {}", records.len(), path.display());
    Ok(Some(records))
}

/// Load a side-file and derive one measurement per usable bin
///
/// Bins without enough readings are dropped; an absent file yields nothing.
pub fn load_side_file(base: &Measurement, path: &Path) -> Result<Vec<Measurement>> {
    let records = read_side_records(path)?.unwrap_or_default();
    Ok(expand_records(base, &records))
}

/// Derive measurements from bin records, keeping only sufficient ones
pub fn expand_records(base: &Measurement, records: &[SideRecord]) -> Vec<Measurement> {
    records
        .iter()
        .filter_map(|record| parse_side_record(base, record))
        .filter(|m| {
            let keep = m.is_sufficient();
            if !keep {
                trace!("Discarding bin at {} without readings", m.start);
            }
            keep
        })
        .collect()
}

/// Copy `base` and override it with one bin record
///
/// The interval always comes from the bin. The average is replaced only when
/// the bin has one. Min and max are replaced when the bin has both and cleared
/// otherwise; with both present and no average, the midpoint becomes the
/// average. Heart rate and low duration are inherited unchanged.
///
/// Returns `None` when a bin timestamp is outside the representable range.
pub fn parse_side_record(base: &Measurement, record: &SideRecord) -> Option<Measurement> {
    let start = epoch_millis(record.start_time)?;
    let end = epoch_millis(record.end_time)?;

    let mut derived = base.clone().with_interval(start, end);

    if is_reading(record.spo2) {
        derived = derived.with_average(record.spo2);
    }

    match (record.spo2_min, record.spo2_max) {
        (Some(min), Some(max)) if min != 0.0 && max != 0.0 => {
            derived = derived.with_min(Some(min)).with_max(Some(max));
            if !is_reading(derived.average) {
                derived = derived.with_average(Some((min + max) / 2.0));
            }
        }
        _ => {
            derived = derived.with_min(None).with_max(None);
        }
    }

    Some(derived)
}

fn epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    let instant = DateTime::from_timestamp_millis(millis);
    if instant.is_none() {
        warn!("Bin timestamp {} ms is out of range", millis);
    }
    instant
}
