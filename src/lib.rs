//! # slackstats
//!
//! Turn a Slack workspace export into a flat engagement report.
//!
//! ## Overview
//!
//! An export is a directory holding `users.json` plus one sub-directory per
//! channel full of daily message logs. slackstats reads all of it, counts
//! posts and reactions per user, per day, per channel, and writes a single
//! CSV with one row per bucket.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slackstats::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let root = Path::new("export");
//!     let config = ReportConfig::default();
//!
//!     let report = build_report(root, &config)?;
//!     write_csv(&report.table, output_file_name(root).as_ref(), &config)?;
//!
//!     println!("{} rows", report.summary.records);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`users`] - [`UserDirectory`](users::UserDirectory) loaded from `users.json`
//! - [`walker`] - finds channel logs below the export root
//! - [`message`] - [`Message`] / [`Reaction`](message::Reaction) and log parsing
//! - [`stats`] - [`StatsTable`](stats::StatsTable), the channel → day → user aggregation
//! - [`output`] - CSV report ([`write_csv`](output::write_csv), [`to_csv`](output::to_csv))
//! - [`pipeline`] - [`build_report`](pipeline::build_report) ties it all together
//! - [`config`] - [`ReportConfig`](config::ReportConfig)
//! - [`error`] - [`StatsError`], [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod output;
pub mod pipeline;
pub mod stats;
pub mod users;
pub mod walker;

// Re-export the main types at the crate root for convenience
pub use error::{Result, StatsError};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use slackstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::config::ReportConfig;
    pub use crate::error::{Result, StatsError};
    pub use crate::message::{Reaction, parse_messages, parse_messages_str};
    pub use crate::output::{HEADER, output_file_name, to_csv, write_csv};
    pub use crate::pipeline::{ProcessingSummary, Report, aggregate, build_report};
    pub use crate::stats::{Stats, StatsTable, UpdateCounts};
    pub use crate::users::{User, UserDirectory};
    pub use crate::walker::{ChannelFile, channel_files, find_channel_files};
}
