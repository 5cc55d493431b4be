//! SpO2 Import Library
//!
//! A Rust library for reading oxygen-saturation data exported from Samsung Health
//! into a single chronologically sorted list of measurements.
//!
//! This library provides tools for:
//! - Parsing the tabular export file (title line, column names, data rows)
//! - Expanding summary rows from their binned JSON side-files
//! - Normalizing readings with the export's "zero means no reading" convention
//! - Collecting parse statistics for diagnostics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod export_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Measurement;
pub use app::services::export_parser::{OxygenSaturationParser, ParseResult, ParseStats};
pub use config::ParserConfig;

/// Result type alias for the SpO2 importer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for export parsing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// First line of the export does not carry title plus two values
    #[error("Malformed header in file '{file}': expected at least 3 fields, found {found}")]
    MalformedHeader { file: String, found: usize },

    /// Column-name line is missing after the title line
    #[error("Missing table header in file '{file}'")]
    MissingTableHeader { file: String },

    /// A column needed by a row is absent
    #[error("Missing field '{field}' in row {row}")]
    MissingField { field: String, row: usize },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Numeric cell could not be read as a float
    #[error("Invalid number for '{field}': '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Side-file is not a JSON array of bin records
    #[error("Invalid side-file '{path}': {source}")]
    SideFileFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a malformed header error
    pub fn malformed_header(file: impl Into<String>, found: usize) -> Self {
        Self::MalformedHeader {
            file: file.into(),
            found,
        }
    }

    /// Create a missing table header error
    pub fn missing_table_header(file: impl Into<String>) -> Self {
        Self::MissingTableHeader { file: file.into() }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>, row: usize) -> Self {
        Self::MissingField {
            field: field.into(),
            row,
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a side-file format error
    pub fn side_file_format(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::SideFileFormat {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::SideFileFormat {
            path: "unknown".to_string(),
            source: error,
        }
    }
}
