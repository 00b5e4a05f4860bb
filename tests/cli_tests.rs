//! End-to-end CLI tests: exit codes, report text, and JSON output
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_log(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

fn alternating_warning_log() -> NamedTempFile {
    write_log(&[
        "2024-01-01 01:00:00 | Warning | ID1 | CPU overheating",
        "2024-01-01 02:00:00 | Warning | ID2 | Disk full",
        "2024-01-01 03:00:00 | Warning | ID3 | CPU overheating",
        "2024-01-01 04:00:00 | Warning | ID4 | Disk full",
        "2024-01-01 05:00:00 | Warning | ID5 | CPU overheating",
    ])
}

#[test]
fn test_default_action_mines_sequences() {
    let log = alternating_warning_log();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg(log.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 3 most common sequences:"))
        .stdout(predicate::str::contains("CPU overheating, Disk full: 2"));
}

#[test]
fn test_sequences_exact_ranking_for_abab() {
    let log = write_log(&[
        "2024-01-01 01:00:00 | Info | ID1 | A",
        "2024-01-01 02:00:00 | Info | ID2 | B",
        "2024-01-01 03:00:00 | Info | ID3 | A",
        "2024-01-01 04:00:00 | Info | ID4 | B",
    ]);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg(log.path()).assert().success().stdout(predicate::eq(
        "Top 3 most common sequences:\nA, B: 2\nB, A: 1\nA, B, A: 1\n",
    ));
}

#[test]
fn test_two_line_log_gives_empty_ranking() {
    // Length range [2, N-1] is empty for N=2: heading only, exit 0.
    let log = write_log(&[
        "2024-01-01 01:00:00 | Info | ID1 | A",
        "2024-01-01 02:00:00 | Info | ID2 | B",
    ]);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg(log.path())
        .assert()
        .success()
        .stdout(predicate::eq("Top 3 most common sequences:\n"));
}

#[test]
fn test_patterns_alternating_warnings() {
    let log = alternating_warning_log();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg(log.path())
        .args(["--patterns", "--pattern-length", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Pattern: CPU overheating -> Disk full | Occurrences: 2",
        ))
        .stdout(predicate::str::contains(
            "Pattern: Disk full -> CPU overheating | Occurrences: 2",
        ));
}

#[test]
fn test_patterns_respect_category_flag() {
    let log = write_log(&[
        "2024-01-01 01:00:00 | Error | ID1 | oom",
        "2024-01-01 02:00:00 | Warning | ID2 | swap high",
        "2024-01-01 03:00:00 | Error | ID3 | oom",
        "2024-01-01 04:00:00 | Error | ID4 | oom",
    ]);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg(log.path())
        .args(["--patterns", "--pattern-length", "2", "--category", "Error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("oom -> oom | Occurrences: 2"));
}

#[test]
fn test_patterns_none_found() {
    let log = write_log(&["2024-01-01 01:00:00 | Warning | ID1 | only one"]);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg(log.path())
        .arg("--patterns")
        .assert()
        .success()
        .stdout(predicate::str::contains("No repeating patterns found."));
}

#[test]
fn test_zero_pattern_length_fails() {
    let log = alternating_warning_log();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg(log.path())
        .args(["--patterns", "--pattern-length", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pattern length must be positive"));
}

#[test]
fn test_missing_file_exits_nonzero() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg("/nonexistent/events.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_malformed_lines_skipped_silently() {
    let log = write_log(&[
        "2024-01-01 01:00:00 | Info | ID1 | A",
        "2024-01-01 02:00:00 | Warning", // 2 fields: skipped, never raises
        "garbage",
        "2024-01-01 03:00:00 | Info | ID2 | B",
        "2024-01-01 04:00:00 | Info | ID3 | A",
    ]);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg(log.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("A, B: 1"));
}

#[test]
fn test_summary_counts_by_category() {
    let log = write_log(&[
        "2024-01-01 01:00:00 | Warning | ID1 | a",
        "2024-01-01 02:00:00 | Error | ID2 | b",
        "2024-01-01 03:00:00 | Warning | ID3 | c",
    ]);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg(log.path())
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: 2"))
        .stdout(predicate::str::contains("Error: 1"));
}

#[test]
fn test_timestamps_in_file_order() {
    let log = write_log(&[
        "2024-01-01 05:00:00 | Info | ID1 | late",
        "2024-01-01 02:00:00 | Info | ID2 | early",
    ]);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg(log.path())
        .arg("--timestamps")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2024-01-01 05:00:00\n2024-01-01 02:00:00",
        ));
}

#[test]
fn test_search_is_case_insensitive() {
    let log = write_log(&[
        "2024-01-01 01:00:00 | Warning | ID1 | CPU overheating",
        "2024-01-01 02:00:00 | Warning | ID2 | Disk full",
    ]);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg(log.path())
        .args(["--search", "cpu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CPU overheating"))
        .stdout(predicate::str::contains("Disk full").not());
}

#[test]
fn test_add_appends_validated_event() {
    let log = write_log(&["2024-01-01 01:00:00 | Warning | ID1 | Disk full"]);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg(log.path())
        .args(["--add", "2024-01-01 02:00:00,Warning,ID2,CPU overheating"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appended:"));

    let contents = std::fs::read_to_string(log.path()).unwrap();
    assert!(contents.contains("2024-01-01 02:00:00 | Warning | ID2 | CPU overheating"));
}

#[test]
fn test_add_rejects_bad_timestamp() {
    let log = write_log(&[]);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    cmd.arg(log.path())
        .args(["--add", "yesterday,Warning,ID2,CPU overheating"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD HH:MM:SS"));
}

#[test]
fn test_json_format_sequences() {
    let log = alternating_warning_log();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    let output = cmd
        .arg(log.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["top"], 3);
    assert_eq!(value["sequences"][0]["count"], 2);
}

#[test]
fn test_json_format_patterns() {
    let log = alternating_warning_log();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    let output = cmd
        .arg(log.path())
        .args(["--patterns", "--pattern-length", "2", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["category"], "Warning");
    assert_eq!(value["pattern_length"], 2);
    assert_eq!(value["patterns"].as_array().unwrap().len(), 2);
}

#[test]
fn test_top_flag_limits_output() {
    let log = alternating_warning_log();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recurra");
    let output = cmd
        .arg(log.path())
        .args(["--top", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    // Heading plus exactly one ranked line.
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("Top 1 most common sequences:"));
}
