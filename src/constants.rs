//! Application constants for the SpO2 importer
//!
//! This module contains the vendor column identifiers, file-layout conventions
//! and default values used throughout the importer.

// =============================================================================
// Export Column Identifiers
// =============================================================================

/// Column identifiers of the oxygen saturation export table
///
/// Names follow the vendor's `HealthConstants.OxygenSaturation` data model.
/// `LOW_DURATION`, `BINNING`, `MAX_SPO2` and `MIN_SPO2` are undocumented
/// but present in real exports.
pub mod fields {
    pub const UUID: &str = "com.samsung.health.oxygen_saturation.datauuid";
    pub const DEVICE_UUID: &str = "com.samsung.health.oxygen_saturation.deviceuuid";
    pub const PACKAGE_NAME: &str = "com.samsung.health.oxygen_saturation.pkg_name";
    pub const CREATE_TIME: &str = "com.samsung.health.oxygen_saturation.create_time";
    pub const UPDATE_TIME: &str = "com.samsung.health.oxygen_saturation.update_time";
    pub const START_TIME: &str = "com.samsung.health.oxygen_saturation.start_time";
    pub const END_TIME: &str = "com.samsung.health.oxygen_saturation.end_time";
    pub const TIME_OFFSET: &str = "com.samsung.health.oxygen_saturation.time_offset";
    pub const SPO2: &str = "com.samsung.health.oxygen_saturation.spo2";
    pub const HEART_RATE: &str = "com.samsung.health.oxygen_saturation.heart_rate";
    pub const COMMENT: &str = "com.samsung.health.oxygen_saturation.comment";
    pub const CUSTOM: &str = "com.samsung.health.oxygen_saturation.custom";
    pub const LOW_DURATION: &str = "com.samsung.health.oxygen_saturation.low_duration";
    pub const BINNING: &str = "com.samsung.health.oxygen_saturation.binning";
    pub const MAX_SPO2: &str = "com.samsung.health.oxygen_saturation.max";
    pub const MIN_SPO2: &str = "com.samsung.health.oxygen_saturation.min";
}

// =============================================================================
// Time Formats
// =============================================================================

/// Timestamp format of the start/end columns (`YYYY-MM-DD HH:MM:SS.ffffff`)
///
/// Values are UTC; the time_offset column is informational only.
pub const EXPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Same layout with the dot and at least one fraction digit mandatory
///
/// Only used to reject timestamps without a fraction, since `%.f` accepts
/// those and `%f` reads its digits as a nanosecond count.
pub const EXPORT_TIME_STRICT_FORMAT: &str = "%Y-%m-%d %H:%M:%S.%f";

// =============================================================================
// File Layout
// =============================================================================

/// Subdirectory next to the export file holding binned side-files
pub const DEFAULT_SIDE_FILE_DIR: &str = "jsons";

/// Minimum number of comma-separated values on the title line
pub const TITLE_LINE_MIN_FIELDS: usize = 3;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when no verbosity flag is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
