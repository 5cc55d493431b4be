//! Data models for SpO2 import
//!
//! This module contains the measurement record produced by the export parser.
//! Readings use the export's convention that zero means "no reading", so every
//! reading is optional.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

// =============================================================================
// Measurement
// =============================================================================

/// One interval of oxygen-saturation readings
///
/// Records built from a summary row carry every reading of that row. Records
/// derived from side-file bins start as a copy of the row record and override
/// the interval and SpO2 readings via the `with_*` methods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Interval start (UTC)
    pub start: DateTime<Utc>,

    /// Interval end (UTC)
    pub end: DateTime<Utc>,

    /// Lowest SpO2 in the interval (percent)
    pub min: Option<f64>,

    /// Highest SpO2 in the interval (percent)
    pub max: Option<f64>,

    /// Average SpO2 over the interval (percent)
    pub average: Option<f64>,

    /// Heart rate measured alongside (BPM)
    pub auxiliary_rate: Option<f64>,

    /// Time spent below the device's low-saturation threshold
    pub low_duration: Option<f64>,
}

impl Measurement {
    /// Create a measurement with an interval and no readings
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            min: None,
            max: None,
            average: None,
            auxiliary_rate: None,
            low_duration: None,
        }
    }

    pub fn with_interval(self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end, ..self }
    }

    pub fn with_min(self, min: Option<f64>) -> Self {
        Self { min, ..self }
    }

    pub fn with_max(self, max: Option<f64>) -> Self {
        Self { max, ..self }
    }

    pub fn with_average(self, average: Option<f64>) -> Self {
        Self { average, ..self }
    }

    pub fn with_auxiliary_rate(self, auxiliary_rate: Option<f64>) -> Self {
        Self {
            auxiliary_rate,
            ..self
        }
    }

    pub fn with_low_duration(self, low_duration: Option<f64>) -> Self {
        Self {
            low_duration,
            ..self
        }
    }

    /// Check whether the record carries enough data to be worth keeping
    ///
    /// True when both min and max are present, or an average is present.
    pub fn is_sufficient(&self) -> bool {
        (is_reading(self.min) && is_reading(self.max)) || is_reading(self.average)
    }

    /// Length of the measured interval
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// A reading counts only when present and non-zero
pub(crate) fn is_reading(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != 0.0)
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "spo2 at {} = {} @ {} BPM",
            format_instant(&self.start),
            format_reading(self.average),
            format_reading(self.auxiliary_rate)
        )
    }
}

fn format_instant(instant: &DateTime<Utc>) -> String {
    if instant.timestamp_subsec_micros() == 0 {
        instant.format("%Y-%m-%d %H:%M:%S%:z").to_string()
    } else {
        instant.format("%Y-%m-%d %H:%M:%S%.6f%:z").to_string()
    }
}

fn format_reading(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => "None".to_string(),
    }
}
