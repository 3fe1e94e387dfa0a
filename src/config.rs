//! Report configuration.
//!
//! slackstats reads no configuration files or environment variables. The
//! handful of layout constants the pipeline depends on live here so library
//! users can point it at slightly different export layouts.
//!
//! # Example
//!
//! ```rust
//! use slackstats::config::ReportConfig;
//!
//! let config = ReportConfig::new()
//!     .with_users_file("members.json")
//!     .with_delimiter(b';');
//!
//! assert_eq!(config.users_file, "members.json");
//! assert_eq!(config.message_extension, "json");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Layout and output settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Name of the user directory file at the export root (default: `users.json`)
    pub users_file: String,

    /// Extension of channel message logs, without the dot (default: `json`).
    /// Matched exactly, including case.
    pub message_extension: String,

    /// CSV field delimiter (default: `,`)
    pub delimiter: u8,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            users_file: "users.json".to_string(),
            message_extension: "json".to_string(),
            delimiter: b',',
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user directory file name.
    #[must_use]
    pub fn with_users_file(mut self, name: impl Into<String>) -> Self {
        self.users_file = name.into();
        self
    }

    /// Sets the message log extension (without the dot).
    #[must_use]
    pub fn with_message_extension(mut self, ext: impl Into<String>) -> Self {
        self.message_extension = ext.into();
        self
    }

    /// Sets the CSV delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Path of the user directory file under `root`.
    pub fn users_path(&self, root: &Path) -> PathBuf {
        root.join(&self.users_file)
    }
}
