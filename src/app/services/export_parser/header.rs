//! Title line parsing for oxygen saturation exports
//!
//! The first line of an export holds the dataset title followed by two values
//! whose meaning is unknown. Only the title is used, to locate side-files.

use csv::StringRecord;

use crate::constants::TITLE_LINE_MIN_FIELDS;
use crate::{Error, Result};

/// Metadata from the first line of an export file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportHeader {
    /// Dataset title (e.g. "com.samsung.shealth.oxygen_saturation")
    pub title: String,

    /// The two trailing values, kept verbatim
    pub extra: [String; 2],
}

impl ExportHeader {
    /// Parse the title line record
    pub fn parse(record: &StringRecord, file: &str) -> Result<Self> {
        if record.len() < TITLE_LINE_MIN_FIELDS {
            return Err(Error::malformed_header(file, record.len()));
        }

        Ok(ExportHeader {
            title: record[0].to_string(),
            extra: [record[1].to_string(), record[2].to_string()],
        })
    }
}
