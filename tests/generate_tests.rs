use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SAMPLE_EXPECTED, sample_sheet, slp, temp_out, write_sheet};

#[test]
fn test_generate_writes_expected_csv() {
    let sheet = sample_sheet("generate_expected");
    let out = temp_out("generate_expected_out", "csv");

    slp()
        .args([
            "--source", &sheet, "--tz", "UTC", "--test", "generate", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read generated csv");
    assert_eq!(content, SAMPLE_EXPECTED);
}

#[test]
fn test_generate_output_has_no_trailing_newline() {
    let sheet = sample_sheet("generate_no_trailing");
    let out = temp_out("generate_no_trailing_out", "csv");

    slp()
        .args([
            "--source", &sheet, "--tz", "UTC", "--test", "generate", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read generated csv");
    assert!(!content.ends_with('\n'));
}

#[test]
fn test_generate_applies_timezone_offset() {
    let sheet = sample_sheet("generate_tz");
    let out = temp_out("generate_tz_out", "csv");

    slp()
        .args([
            "--source", &sheet, "--tz", "+01:00", "--test", "generate", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read generated csv");
    // 23:10 wall clock in +01:00 is 22:10 UTC
    assert!(content.contains("05/03/2024 22:10:00"));
}

#[test]
fn test_generate_fails_on_malformed_time_cell() {
    let sheet = write_sheet("generate_bad_time", &["05/03/24", "banana", "07:15"]);
    let out = temp_out("generate_bad_time_out", "csv");

    slp()
        .args([
            "--source", &sheet, "--tz", "UTC", "--test", "generate", "--out", &out, "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time cell"));
}

#[test]
fn test_generate_fails_on_malformed_date_header() {
    let sheet = write_sheet("generate_bad_date", &["2024-03-05", "23:10", "07:15"]);
    let out = temp_out("generate_bad_date_out", "csv");

    slp()
        .args([
            "--source", &sheet, "--tz", "UTC", "--test", "generate", "--out", &out, "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date cell"));
}

#[test]
fn test_generate_rejects_invalid_timezone() {
    let sheet = sample_sheet("generate_bad_tz");
    let out = temp_out("generate_bad_tz_out", "csv");

    slp()
        .args([
            "--source", &sheet, "--tz", "mars", "--test", "generate", "--out", &out, "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid timezone"));
}

#[test]
fn test_generate_fails_on_missing_source() {
    let missing = temp_out("generate_missing_source", "csv");
    let out = temp_out("generate_missing_source_out", "csv");

    slp()
        .args([
            "--source", &missing, "--tz", "UTC", "--test", "generate", "--out", &out, "--force",
        ])
        .assert()
        .failure();
}

#[test]
fn test_list_shows_sessions_with_durations() {
    let sheet = sample_sheet("list_sessions");

    slp()
        .args(["--source", &sheet, "--tz", "UTC", "--test", "list"])
        .assert()
        .success()
        .stdout(contains("05/03/2024 23:10:00").and(contains("2 session(s)")));
}

#[test]
fn test_list_period_filters_sessions() {
    let sheet = sample_sheet("list_period");

    slp()
        .args([
            "--source",
            &sheet,
            "--tz",
            "UTC",
            "--test",
            "list",
            "--period",
            "2024-03-06",
        ])
        .assert()
        .success()
        .stdout(contains("06/03/2024 22:45:00").and(contains("1 session(s)")));
}

#[test]
fn test_list_events_shows_raw_stream() {
    let sheet = sample_sheet("list_events");

    slp()
        .args([
            "--source", &sheet, "--tz", "UTC", "--test", "list", "--events",
        ])
        .assert()
        .success()
        .stdout(contains("sleep").and(contains("wake")));
}

#[test]
fn test_init_runs_in_test_mode() {
    slp()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));
}

#[test]
fn test_cache_info_reports_cache_location() {
    slp()
        .args(["--test", "cache", "--info"])
        .assert()
        .success()
        .stdout(contains("Cache file"));
}
