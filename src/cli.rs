//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;

/// Summarize a Slack workspace export into a per-user, per-day,
/// per-channel engagement CSV.
///
/// The report is written to the current directory, named after the export
/// path with every `.` and `/` removed (`./export/` becomes `export.csv`).
#[derive(Parser, Debug, Clone)]
#[command(name = "slackstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    slackstats ./export
    slackstats exports/acme-2024")]
pub struct Args {
    /// Path to the unpacked export directory (must contain users.json)
    pub input: PathBuf,
}
