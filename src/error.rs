//! Unified error types for slackstats.
//!
//! Every fallible step of the pipeline returns [`StatsError`]. There is no
//! recovery path: the first error aborts the run and is reported by the
//! binary. Records that are merely irrelevant (unknown users, empty
//! timestamps) are skipped by the aggregator and never become errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for slackstats operations.
///
/// # Example
///
/// ```rust
/// use slackstats::error::Result;
/// use slackstats::users::UserDirectory;
///
/// fn load() -> Result<UserDirectory> {
///     UserDirectory::from_json_str("[]")
/// }
/// # assert!(load().unwrap().is_empty());
/// ```
pub type Result<T> = std::result::Result<T, StatsError>;

/// The error type for all slackstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StatsError {
    /// An I/O error occurred while reading input or creating the report.
    #[error("IO error{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Io {
        /// The underlying I/O error
        #[source]
        source: io::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A JSON input file did not have the expected shape.
    #[error("Failed to parse {format}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// What was being parsed (e.g., "user directory", "message log")
        format: &'static str,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// Walking the export directory failed.
    #[error("Failed to walk export directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A message carried a timestamp that is not a number of seconds.
    ///
    /// Empty timestamps are skipped; anything else that does not parse
    /// halts aggregation for the whole run.
    #[error("Invalid timestamp '{value}' in channel '{channel}'")]
    InvalidTimestamp {
        /// The raw `ts` field
        value: String,
        /// Channel the message belongs to
        channel: String,
    },

    /// CSV writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<io::Error> for StatsError {
    fn from(source: io::Error) -> Self {
        StatsError::Io { source, path: None }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl StatsError {
    /// Creates an I/O error tagged with the file it concerns.
    pub fn io_at(source: io::Error, path: impl Into<PathBuf>) -> Self {
        StatsError::Io {
            source,
            path: Some(path.into()),
        }
    }

    /// Creates a parse error for the user directory file.
    pub fn users_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        StatsError::Parse {
            format: "user directory",
            source,
            path,
        }
    }

    /// Creates a parse error for a channel message log.
    pub fn messages_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        StatsError::Parse {
            format: "message log",
            source,
            path,
        }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(value: impl Into<String>, channel: impl Into<String>) -> Self {
        StatsError::InvalidTimestamp {
            value: value.into(),
            channel: channel.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, StatsError::Io { .. })
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, StatsError::Parse { .. })
    }

    /// Returns `true` if this is an invalid timestamp error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, StatsError::InvalidTimestamp { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_with_path() {
        let err = StatsError::io_at(
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
            "/export/users.json",
        );
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("/export/users.json"));
        assert!(display.contains("file not found"));
        assert!(err.is_io());
    }

    #[test]
    fn test_io_error_from_without_path() {
        let err: StatsError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.to_string(), "IO error: denied");
    }

    #[test]
    fn test_parse_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = StatsError::messages_parse(json_err, Some(PathBuf::from("general/1.json")));
        let display = err.to_string();
        assert!(display.contains("message log"));
        assert!(display.contains("general/1.json"));
        assert!(err.is_parse());
        assert!(!err.is_io());
    }

    #[test]
    fn test_users_parse_without_path() {
        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = StatsError::users_parse(json_err, None);
        assert!(err.to_string().starts_with("Failed to parse user directory:"));
    }

    #[test]
    fn test_invalid_timestamp_display() {
        let err = StatsError::invalid_timestamp("not-a-number", "general");
        assert_eq!(
            err.to_string(),
            "Invalid timestamp 'not-a-number' in channel 'general'"
        );
        assert!(err.is_invalid_timestamp());
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let err = StatsError::io_at(io::Error::other("boom"), "x.json");
        assert!(err.source().is_some());
    }
}
