use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tallyman() -> Command {
    cargo_bin_cmd!("tallyman")
}

fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    path.push(format!("tallyman-cli-test-{nanos}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn test_help() {
    tallyman()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tallyman"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("seed"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("chart"));
}

#[test]
fn test_version() {
    tallyman()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tallyman"));
}

#[test]
fn test_color_never_flag() {
    tallyman()
        .args(["--color", "never", "--help"])
        .assert()
        .success();
}

#[test]
fn test_run_prints_summary_and_saves_chart() {
    let dir = create_temp_dir();
    let db = dir.path().join("sales.db");
    let chart = dir.path().join("chart.svg");

    tallyman()
        .args(["run", "--no-open", "--db"])
        .arg(&db)
        .arg("--chart")
        .arg(&chart)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sales Summary"))
        .stdout(predicate::str::contains("Apples"))
        .stdout(predicate::str::contains("37.50"))
        .stdout(predicate::str::contains("Chart saved to"));

    let metadata = fs::metadata(&chart).expect("chart file must exist");
    assert!(metadata.len() > 0, "chart file must not be empty");
}

#[test]
fn test_run_twice_produces_identical_output() {
    let dir = create_temp_dir();
    let db = dir.path().join("sales.db");
    let chart = dir.path().join("chart.svg");

    let first = tallyman()
        .args(["run", "--no-open", "--db"])
        .arg(&db)
        .arg("--chart")
        .arg(&chart)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let second = tallyman()
        .args(["run", "--no-open", "--db"])
        .arg(&db)
        .arg("--chart")
        .arg(&chart)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(first, second, "repeated runs must report the same totals");
}

#[test]
fn test_quiet_run_prints_nothing() {
    let dir = create_temp_dir();
    let db = dir.path().join("sales.db");
    let chart = dir.path().join("chart.svg");

    tallyman()
        .args(["--quiet", "run", "--no-open", "--db"])
        .arg(&db)
        .arg("--chart")
        .arg(&chart)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(chart.exists(), "quiet mode must still render the chart");
}

#[test]
fn test_seed_then_summary() {
    let dir = create_temp_dir();
    let db = dir.path().join("sales.db");

    tallyman()
        .args(["seed", "--db"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows"))
        .stdout(predicate::str::contains("6"));

    tallyman()
        .args(["summary", "--db"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bananas"))
        .stdout(predicate::str::contains("24.00"));
}

#[test]
fn test_summary_without_seed_fails() {
    let dir = create_temp_dir();
    let db = dir.path().join("sales.db");

    tallyman()
        .args(["summary", "--db"])
        .arg(&db)
        .assert()
        .failure()
        .stderr(predicate::str::contains("query error"));
}

#[test]
fn test_quiet_summary_without_seed_fails() {
    let dir = create_temp_dir();
    let db = dir.path().join("sales.db");

    tallyman()
        .args(["--quiet", "summary", "--db"])
        .arg(&db)
        .assert()
        .failure()
        .stderr(predicate::str::contains("query error"));
}

#[test]
fn test_summary_json_is_parseable() {
    let dir = create_temp_dir();
    let db = dir.path().join("sales.db");

    tallyman()
        .args(["seed", "--db"])
        .arg(&db)
        .assert()
        .success();

    let output = tallyman()
        .args(["--json", "summary", "--db"])
        .arg(&db)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert_eq!(value["command"], "summary");
    assert_eq!(value["summary"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_chart_command_writes_file() {
    let dir = create_temp_dir();
    let db = dir.path().join("sales.db");
    let chart = dir.path().join("revenue.svg");

    tallyman()
        .args(["seed", "--db"])
        .arg(&db)
        .assert()
        .success();

    tallyman()
        .args(["chart", "--no-open", "--db"])
        .arg(&db)
        .arg("--chart")
        .arg(&chart)
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart saved to"));

    let metadata = fs::metadata(&chart).expect("chart file must exist");
    assert!(metadata.len() > 0);
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let toml = concat!(
        "[store]\n",
        "path = \"sales_data.db\"\n",
        "\n",
        "[logging]\n",
        "level = \"loud\"\n",
        "format = \"pretty\"\n",
    );

    let path = write_temp_config(toml);
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_tallyman"))
        .args(["summary", "--config"])
        .arg(&path)
        .output()
        .expect("run tallyman");
    let _ = fs::remove_file(&path);

    assert!(!output.status.success(), "Expected nonzero exit code");

    // Check both stdout and stderr for the error message
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{stdout}{stderr}");
    assert!(
        combined.contains("invalid value for level") || combined.contains("level"),
        "Expected error message about invalid config.\nstdout: {stdout}\nstderr: {stderr}"
    );
}
