//! Report writers.
//!
//! The report is a single flat CSV with one row per (channel, day, user)
//! bucket:
//!
//! - [`write_csv`] writes it to a file
//! - [`to_csv`] returns it as a string
//! - [`output_file_name`] derives the report's file name from the export path
//!
//! # Example
//!
//! ```rust
//! use slackstats::config::ReportConfig;
//! use slackstats::output::{HEADER, to_csv};
//! use slackstats::stats::StatsTable;
//!
//! let csv = to_csv(&StatsTable::new(), &ReportConfig::default())?;
//! assert_eq!(csv.trim_end(), HEADER.join(","));
//! # Ok::<(), slackstats::StatsError>(())
//! ```

mod csv_writer;

pub use csv_writer::{HEADER, output_file_name, to_csv, write_csv};
