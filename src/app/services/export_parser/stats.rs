//! Parsing statistics and result structures for export loading
//!
//! This module provides types for tracking how rows were resolved and for
//! returning measurements together with those counts.

use crate::app::models::Measurement;

/// Parsing result with measurements and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Measurements sorted by start time
    pub measurements: Vec<Measurement>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of data rows encountered
    pub rows_read: usize,

    /// Rows replaced by records from their side-file
    pub rows_expanded: usize,

    /// Rows naming a side-file that does not exist
    pub side_files_missing: usize,

    /// Bin records read from side-files
    pub side_records_read: usize,

    /// Bin records dropped for lack of readings
    pub side_records_discarded: usize,

    /// Measurements returned
    pub measurements: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Expanded rows as a percentage of rows read
    pub fn expansion_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.rows_expanded as f64 / self.rows_read as f64) * 100.0
        }
    }
}
