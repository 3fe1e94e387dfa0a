//! End-to-end report building.
//!
//! [`build_report`] runs the whole pipeline over an export root: load the
//! user directory, walk the channel logs, parse each one and fold it into a
//! [`StatsTable`]. Nothing is written; pass the resulting table to
//! [`write_csv`](crate::output::write_csv).
//!
//! The first error anywhere aborts the run. There is no partial report.

use std::path::Path;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::message::parse_messages;
use crate::stats::{StatsTable, UpdateCounts};
use crate::users::UserDirectory;
use crate::walker::channel_files;

/// Counters describing one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
    /// Entries in the user directory
    pub users: usize,
    /// Distinct channels with at least one log file
    pub channels: usize,
    /// Message log files read
    pub files: usize,
    /// Messages decoded from all logs
    pub messages: usize,
    /// Outcome of folding those messages into the table
    pub counts: UpdateCounts,
    /// Stats records in the finished table, i.e. report rows
    pub records: usize,
}

impl ProcessingSummary {
    /// Messages that did not contribute a post.
    pub fn skipped_messages(&self) -> usize {
        self.counts.skipped_empty_timestamp + self.counts.skipped_unknown_author
    }
}

/// A finished aggregation.
#[derive(Debug, Clone)]
pub struct Report {
    pub table: StatsTable,
    pub summary: ProcessingSummary,
}

/// Walks `root` and folds every channel log into a fresh table.
///
/// `summary.users` is left at zero; the caller owns the user directory.
pub fn aggregate(
    root: &Path,
    users: &UserDirectory,
    config: &ReportConfig,
) -> Result<(StatsTable, ProcessingSummary)> {
    let mut table = StatsTable::new();
    let mut summary = ProcessingSummary::default();

    for file in channel_files(root, config) {
        let file = file?;
        let messages = parse_messages(&file.path)?;
        summary.files += 1;
        summary.messages += messages.len();
        summary
            .counts
            .merge(table.update(&file.channel, &messages, users)?);
    }

    summary.channels = table.channels().count();
    summary.records = table.len();
    Ok((table, summary))
}

/// Loads the user directory under `root` and aggregates every channel log.
///
/// # Example
///
/// ```rust,no_run
/// use slackstats::config::ReportConfig;
/// use slackstats::output::{output_file_name, write_csv};
/// use slackstats::pipeline::build_report;
/// use std::path::Path;
///
/// let root = Path::new("export");
/// let config = ReportConfig::default();
/// let report = build_report(root, &config)?;
/// write_csv(&report.table, output_file_name(root).as_ref(), &config)?;
/// # Ok::<(), slackstats::StatsError>(())
/// ```
pub fn build_report(root: &Path, config: &ReportConfig) -> Result<Report> {
    let users = UserDirectory::load(&config.users_path(root))?;
    let (table, mut summary) = aggregate(root, &users, config)?;
    summary.users = users.len();
    Ok(Report { table, summary })
}
