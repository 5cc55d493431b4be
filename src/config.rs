//! Configuration management and validation.
//!
//! Provides the parser configuration: where side-files live relative to
//! the export file and whether they are consulted at all.

use crate::constants::DEFAULT_SIDE_FILE_DIR;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Directory name, next to the export file, holding binned side-files
    pub side_file_dir: String,

    /// Replace summary rows with their side-file bins when available
    pub expand_side_files: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            side_file_dir: DEFAULT_SIDE_FILE_DIR.to_string(),
            expand_side_files: true,
        }
    }
}

impl ParserConfig {
    /// Set the side-file directory name
    pub fn with_side_file_dir(mut self, dir: impl Into<String>) -> Self {
        self.side_file_dir = dir.into();
        self
    }

    /// Enable or disable side-file expansion
    pub fn with_side_file_expansion(mut self, enabled: bool) -> Self {
        self.expand_side_files = enabled;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.side_file_dir.is_empty() {
            return Err(Error::configuration("side_file_dir must not be empty"));
        }

        if self.side_file_dir.contains(['/', '\\']) {
            return Err(Error::configuration(format!(
                "side_file_dir must be a single directory name, got '{}'",
                self.side_file_dir
            )));
        }

        debug!("Validated parser configuration: {:?}", self);
        Ok(())
    }
}
