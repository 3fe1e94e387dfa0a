//! CSV report writer.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::config::ReportConfig;
use crate::error::{Result, StatsError};
use crate::stats::{Stats, StatsTable};

/// Report header.
///
/// Names are kept verbatim, misspellings included. The "received" labels
/// come before the "given" labels while each row carries the author-side
/// counts first (see `build_record`).
pub const HEADER: [&str; 11] = [
    "display_name",
    "name",
    "is_restricted",
    "deleted",
    "day",
    "posts",
    "received_reations",
    "received_reaction_users",
    "given_reactions",
    "given_reation_users",
    "channel_name",
];

/// Derives the report file name from the export path: every `.` and `/` is
/// dropped and `.csv` appended.
///
/// ```rust
/// use slackstats::output::output_file_name;
/// use std::path::Path;
///
/// assert_eq!(output_file_name(Path::new("./export/")), "export.csv");
/// assert_eq!(output_file_name(Path::new("dumps/acme.2024")), "dumpsacme2024.csv");
/// ```
pub fn output_file_name(input: &Path) -> String {
    let stem: String = input
        .to_string_lossy()
        .chars()
        .filter(|c| *c != '.' && *c != '/')
        .collect();
    format!("{stem}.csv")
}

/// Writes the report to `output_path` and returns the number of data rows.
///
/// The file is created (or truncated) before the first row is written, so a
/// failure part-way through leaves a partial report behind.
pub fn write_csv(table: &StatsTable, output_path: &Path, config: &ReportConfig) -> Result<usize> {
    let file = File::create(output_path).map_err(|e| StatsError::io_at(e, output_path))?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(file);

    let rows = write_records(&mut writer, table)?;
    writer.flush().map_err(|e| StatsError::io_at(e, output_path))?;
    Ok(rows)
}

/// Renders the report into a string.
pub fn to_csv(table: &StatsTable, config: &ReportConfig) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(Vec::new());

    write_records(&mut writer, table)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| StatsError::from(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| StatsError::from(io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn write_records<W: Write>(writer: &mut csv::Writer<W>, table: &StatsTable) -> Result<usize> {
    writer.write_record(HEADER)?;

    let mut rows = 0;
    for (channel, day, stats) in table.rows() {
        writer.write_record(build_record(channel, day, stats))?;
        rows += 1;
    }
    Ok(rows)
}

/// Builds one report row.
///
/// Column 7 and 8 hold the author-side (`given_*`) counters and columns 9
/// and 10 the reactor-side (`received_*`) counters.
fn build_record(channel: &str, day: &str, stats: &Stats) -> [String; 11] {
    [
        stats.display_name.clone(),
        stats.name.clone(),
        stats.is_restricted.to_string(),
        stats.deleted.to_string(),
        day.to_string(),
        stats.posts.to_string(),
        stats.given_reactions.to_string(),
        stats.given_reaction_user_count().to_string(),
        stats.received_reactions.to_string(),
        stats.received_reaction_user_count().to_string(),
        channel.to_string(),
    ]
}
