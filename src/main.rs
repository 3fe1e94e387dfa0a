//! # slackstats CLI
//!
//! Command-line interface for the slackstats library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use slackstats::cli::Args;
use slackstats::config::ReportConfig;
use slackstats::output::{output_file_name, write_csv};
use slackstats::pipeline::aggregate;
use slackstats::users::UserDirectory;
use slackstats::StatsError;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), StatsError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let config = ReportConfig::default();

    let root = args.input.as_path();
    let output_name = output_file_name(root);
    let output_path = Path::new(".").join(&output_name);

    println!("📊 slackstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", root.display());
    println!("💾 Output:  {}", output_path.display());
    println!();

    // Step 1: Users
    let users_path = config.users_path(root);
    println!("👥 Loading {}...", users_path.display());
    let users = UserDirectory::load(&users_path)?;
    println!("   Found {} users", users.len());

    // Step 2: Walk + aggregate
    println!("⏳ Aggregating channel logs...");
    let aggregate_start = Instant::now();
    let (table, mut summary) = aggregate(root, &users, &config)?;
    summary.users = users.len();
    println!(
        "   {} files in {} channels, {} messages ({:.2}s)",
        summary.files,
        summary.channels,
        summary.messages,
        aggregate_start.elapsed().as_secs_f64()
    );

    // Step 3: Write
    println!("💾 Writing CSV...");
    let rows = write_csv(&table, &output_path, &config)?;
    println!("   Wrote {} rows", rows);

    println!();
    println!("📈 Summary:");
    println!("   Users:                 {}", summary.users);
    println!("   Messages counted:      {}", summary.counts.counted);
    println!(
        "   Skipped (no ts):       {}",
        summary.counts.skipped_empty_timestamp
    );
    println!(
        "   Skipped (unknown):     {}",
        summary.counts.skipped_unknown_author
    );
    println!(
        "   Reactions (unknown):   {}",
        summary.counts.skipped_unknown_reactor
    );
    println!(
        "   Total time:            {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    println!();
    println!("✅ {} file created successfully.", output_name);

    Ok(())
}
