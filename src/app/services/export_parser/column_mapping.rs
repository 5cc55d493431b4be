//! Column mapping for the export table
//!
//! This module maps the fixed set of columns the parser reads onto their
//! positions in the CSV header. Unknown columns are ignored.

use csv::StringRecord;
use std::collections::HashMap;

use crate::constants::fields;

/// Export columns read by the parser
///
/// The time_offset column is informational and not mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    StartTime,
    EndTime,
    Spo2,
    HeartRate,
    MinSpo2,
    MaxSpo2,
    LowDuration,
    Binning,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::StartTime,
        Field::EndTime,
        Field::Spo2,
        Field::HeartRate,
        Field::MinSpo2,
        Field::MaxSpo2,
        Field::LowDuration,
        Field::Binning,
    ];

    /// Column name in the export header
    pub fn column_name(self) -> &'static str {
        match self {
            Field::StartTime => fields::START_TIME,
            Field::EndTime => fields::END_TIME,
            Field::Spo2 => fields::SPO2,
            Field::HeartRate => fields::HEART_RATE,
            Field::MinSpo2 => fields::MIN_SPO2,
            Field::MaxSpo2 => fields::MAX_SPO2,
            Field::LowDuration => fields::LOW_DURATION,
            Field::Binning => fields::BINNING,
        }
    }

    fn from_column_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.column_name() == name)
    }
}

/// Positions of known fields within a CSV row
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    field_to_index: HashMap<Field, usize>,

    /// Total number of columns in the header
    pub column_count: usize,
}

impl ColumnMapping {
    /// Map header names to field positions
    ///
    /// A repeated column name maps to its last occurrence.
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut field_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            if let Some(field) = Field::from_column_name(header) {
                field_to_index.insert(field, index);
            }
        }

        ColumnMapping {
            field_to_index,
            column_count: headers.len(),
        }
    }

    /// Get the index for a given field
    pub fn get_index(&self, field: Field) -> Option<usize> {
        self.field_to_index.get(&field).copied()
    }

    /// Check if a field exists in the mapping
    pub fn has_field(&self, field: Field) -> bool {
        self.field_to_index.contains_key(&field)
    }

    /// Fields the parser reads that the header does not declare
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| !self.has_field(*f))
            .collect()
    }
}
