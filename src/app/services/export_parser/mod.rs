//! Parser for Samsung Health oxygen saturation exports
//!
//! An export is a CSV file whose first line carries the dataset title plus two
//! unused values, whose second line names the columns, and whose remaining
//! lines are summary rows. A row may reference a binned JSON side-file stored
//! under `<export dir>/jsons/<title>/<first char>/<name>`; when that file holds
//! usable bins they replace the summary row.
//!
//! ## Architecture
//!
//! - [`parser`] - Load orchestration, row expansion and final ordering
//! - [`header`] - Title line extraction and validation
//! - [`column_mapping`] - Known export columns mapped to CSV positions
//! - [`field_parsers`] - Timestamp and reading coercion helpers
//! - [`record_parser`] - Summary row to [`Measurement`](crate::Measurement)
//! - [`side_file`] - Side-file location, loading and bin overrides
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```no_run
//! use spo2_import::OxygenSaturationParser;
//!
//! # fn example() -> spo2_import::Result<()> {
//! let parser = OxygenSaturationParser::new();
//! let measurements = parser.load("export/com.samsung.shealth.oxygen_saturation.csv")?;
//!
//! for m in &measurements {
//!     println!("{}", m);
//! }
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod side_file;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnMapping, Field};
pub use header::ExportHeader;
pub use parser::{ExportContext, OxygenSaturationParser};
pub use side_file::{SideRecord, side_file_path};
pub use stats::{ParseResult, ParseStats};
