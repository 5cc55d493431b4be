//! Test utilities for export parser testing
//!
//! This module provides helpers that build temporary export trees: an export
//! CSV file plus side-files laid out the way the phone writes them.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::constants::fields;

mod side_file_tests;

/// Dataset title used on the first line of test exports
pub const TEST_TITLE: &str = "com.samsung.shealth.oxygen_saturation";

/// Export file name used by test exports
pub const TEST_EXPORT_NAME: &str = "com.samsung.shealth.oxygen_saturation.20230602.csv";

/// Column order of a real export (the trailing comma adds an unnamed column)
pub const TEST_COLUMNS: [&str; 16] = [
    fields::CREATE_TIME,
    fields::TIME_OFFSET,
    fields::CUSTOM,
    fields::BINNING,
    fields::MAX_SPO2,
    fields::MIN_SPO2,
    fields::LOW_DURATION,
    fields::SPO2,
    fields::HEART_RATE,
    fields::COMMENT,
    fields::UPDATE_TIME,
    fields::START_TIME,
    fields::END_TIME,
    fields::PACKAGE_NAME,
    fields::DEVICE_UUID,
    fields::UUID,
];

/// One data row of a test export
#[derive(Debug, Clone)]
pub struct TestRow {
    pub start: &'static str,
    pub end: &'static str,
    pub spo2: &'static str,
    pub heart_rate: &'static str,
    pub min: &'static str,
    pub max: &'static str,
    pub low_duration: &'static str,
    pub binning: &'static str,
}

impl Default for TestRow {
    fn default() -> Self {
        Self {
            start: "2022-09-10 14:45:00.000",
            end: "2022-09-10 14:46:00.000",
            spo2: "97",
            heart_rate: "61",
            min: "",
            max: "",
            low_duration: "0",
            binning: "",
        }
    }
}

impl TestRow {
    /// Render the row in `TEST_COLUMNS` order
    pub fn to_csv_line(&self) -> String {
        [
            "2022-09-10 14:50:12.345",
            "UTC+0200",
            "",
            self.binning,
            self.max,
            self.min,
            self.low_duration,
            self.spo2,
            self.heart_rate,
            "",
            "2022-09-10 14:50:12.345",
            self.start,
            self.end,
            "com.sec.android.app.shealth",
            "Xo3Vf2dCq1",
            "6c1b1d0e-1d3b-4f38-9d47-8b7f3e0d5a21",
        ]
        .join(",")
            + ","
    }
}

/// Title line of a test export
pub fn title_line() -> String {
    format!("{},6311017,1", TEST_TITLE)
}

/// Column-name line of a test export
pub fn column_line() -> String {
    TEST_COLUMNS.join(",") + ","
}

/// Complete export content for the given rows
pub fn export_content(rows: &[TestRow]) -> String {
    let mut lines = vec![title_line(), column_line()];
    lines.extend(rows.iter().map(TestRow::to_csv_line));
    lines.join("\n") + "\n"
}

/// A temporary directory holding one export and its side-files
pub struct TestExport {
    pub dir: TempDir,
}

impl TestExport {
    /// Write an export with the given rows
    pub fn new(rows: &[TestRow]) -> Self {
        Self::with_content(&export_content(rows))
    }

    /// Write an export with raw content
    pub fn with_content(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TEST_EXPORT_NAME), content).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join(TEST_EXPORT_NAME)
    }

    /// Write a side-file under the default `jsons` directory
    pub fn write_side_file(&self, name: &str, json: &str) -> PathBuf {
        self.write_side_file_in("jsons", name, json)
    }

    /// Write a side-file under a custom side-file directory
    pub fn write_side_file_in(&self, side_dir: &str, name: &str, json: &str) -> PathBuf {
        let bucket: String = name.chars().take(1).collect();
        let dir = self.dir.path().join(side_dir).join(TEST_TITLE).join(bucket);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, json).unwrap();
        path
    }
}

/// Assert that a path exists, for readability in tests
pub fn assert_exists(path: &Path) {
    assert!(path.exists(), "expected {} to exist", path.display());
}
