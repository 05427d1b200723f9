use fs2::FileExt;
use predicates::prelude::*;
use serial_test::serial;
use std::fs::{self, OpenOptions};
use tempfile::tempdir;

use test_helpers::moodlog_command;

/// A second writer fails fast with a busy error while the store lock is held
#[test]
#[serial]
fn test_write_while_locked_reports_busy() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let lock_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(dir.path().join("mood_entries.lock"))?;
    lock_file.lock_exclusive()?;

    moodlog_command(dir.path())
        .args(["log", "bien", "--date", "2024-06-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Mood store is currently being modified by another moodlog process",
        ));

    assert!(!dir.path().join("mood_entries.json").exists());

    lock_file.unlock()?;

    moodlog_command(dir.path())
        .args(["log", "bien", "--date", "2024-06-01"])
        .assert()
        .success();
    assert!(dir.path().join("mood_entries.json").exists());

    Ok(())
}

/// Reads do not take the lock
#[test]
#[serial]
fn test_read_while_locked_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("mood_entries.json"),
        r#"{"version":1,"entries":[{"date":"2024-06-01","mood":"Bien","note":""}]}"#,
    )?;

    let lock_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(dir.path().join("mood_entries.lock"))?;
    lock_file.lock_exclusive()?;

    moodlog_command(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 day tracked"));

    lock_file.unlock()?;
    Ok(())
}

/// A busy store is logged exactly once at the application boundary
#[test]
#[serial]
fn test_single_error_log_for_busy_store() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let lock_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(dir.path().join("mood_entries.lock"))?;
    lock_file.lock_exclusive()?;

    let output = moodlog_command(dir.path())
        .args(["delete", "2024-06-01"])
        .output()?;
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    let logged = stderr
        .lines()
        .filter(|line| line.contains("Command failed"))
        .count();
    assert_eq!(logged, 1, "stderr was:\n{}", stderr);

    lock_file.unlock()?;
    Ok(())
}
