//! End-to-end CLI tests for slackstats.
//!
//! These tests run the actual binary inside a temporary working directory,
//! since the report is always written to the current directory.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates `<tmp>/export` with one user and one channel log.
fn setup_export() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    let root = dir.path().join("export");
    fs::create_dir_all(root.join("general")).unwrap();

    fs::write(
        root.join("users.json"),
        r#"[{"id":"U1","profile":{"display_name":"Alice"},"is_restricted":false,"deleted":false}]"#,
    )
    .unwrap();
    fs::write(
        root.join("general/log.json"),
        r#"[{"user":"U1","text":"hi","ts":"1700000000","reactions":[{"name":"thumbsup","users":["U1"],"count":1}]}]"#,
    )
    .unwrap();

    dir
}

fn slackstats_cmd(dir: &TempDir) -> Command {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_slackstats"));
    cmd.current_dir(dir.path());
    Command::from_std(cmd)
}

// ============================================================================
// Arguments
// ============================================================================

mod arguments {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let dir = tempdir().unwrap();
        slackstats_cmd(&dir)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_too_many_arguments() {
        let dir = setup_export();
        slackstats_cmd(&dir)
            .args(["export", "extra"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));

        assert!(!dir.path().join("export.csv").exists());
    }

    #[test]
    fn test_help() {
        let dir = tempdir().unwrap();
        slackstats_cmd(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("export"));
    }

    #[test]
    fn test_version() {
        let dir = tempdir().unwrap();
        slackstats_cmd(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================================================
// Report generation
// ============================================================================

mod report {
    use super::*;

    #[test]
    fn test_creates_report() {
        let dir = setup_export();
        slackstats_cmd(&dir)
            .arg("export")
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 1 users"))
            .stdout(predicate::str::contains(
                "export.csv file created successfully.",
            ));

        let content = fs::read_to_string(dir.path().join("export.csv")).unwrap();
        assert_eq!(
            content,
            "display_name,name,is_restricted,deleted,day,posts,received_reations,\
             received_reaction_users,given_reactions,given_reation_users,channel_name\n\
             Alice,,false,false,2023-11-14,1,1,1,1,1,general\n"
        );
    }

    #[test]
    fn test_output_name_strips_dots_and_slashes() {
        let dir = setup_export();
        slackstats_cmd(&dir)
            .arg("./export/")
            .assert()
            .success();

        assert!(dir.path().join("export.csv").exists());
    }

    #[test]
    fn test_summary_counts_skips() {
        let dir = setup_export();
        fs::write(
            dir.path().join("export/general/extra.json"),
            r#"[{"user":"U404","ts":"1700000000"},{"user":"U1","ts":""}]"#,
        )
        .unwrap();

        slackstats_cmd(&dir)
            .arg("export")
            .assert()
            .success()
            .stdout(predicate::str::contains("Skipped (no ts):       1"))
            .stdout(predicate::str::contains("Skipped (unknown):     1"));
    }
}

// ============================================================================
// Error handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        slackstats_cmd(&dir)
            .arg("does-not-exist")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));

        assert!(!dir.path().join("does-not-exist.csv").exists());
    }

    #[test]
    fn test_malformed_users_file() {
        let dir = setup_export();
        fs::write(dir.path().join("export/users.json"), "not json").unwrap();

        slackstats_cmd(&dir)
            .arg("export")
            .assert()
            .failure()
            .stderr(predicate::str::contains("user directory"));

        assert!(!dir.path().join("export.csv").exists());
    }

    #[test]
    fn test_malformed_timestamp_writes_nothing() {
        let dir = setup_export();
        fs::write(
            dir.path().join("export/general/bad.json"),
            r#"[{"user":"U1","text":"bad","ts":"not-a-number"}]"#,
        )
        .unwrap();

        slackstats_cmd(&dir)
            .arg("export")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid timestamp 'not-a-number'"));

        assert!(!dir.path().join("export.csv").exists());
    }

    #[test]
    fn test_malformed_message_log_writes_nothing() {
        let dir = setup_export();
        fs::write(dir.path().join("export/general/bad.json"), "[{").unwrap();

        slackstats_cmd(&dir)
            .arg("export")
            .assert()
            .failure()
            .stderr(predicate::str::contains("message log"));

        assert!(!dir.path().join("export.csv").exists());
    }
}
