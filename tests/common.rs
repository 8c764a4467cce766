#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slp() -> Command {
    cargo_bin_cmd!("sleepcharter")
}

/// Create a unique temp file path and remove any existing file
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sleepcharter.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a row-major sheet export (as a spreadsheet CSV download looks) into
/// the temp dir and return its path
pub fn write_sheet(name: &str, rows: &[&str]) -> String {
    let path = temp_out(name, "csv");
    fs::write(&path, rows.join("\n")).expect("write sheet fixture");
    path
}

/// Two-day sample sheet used by several tests: each column is one day,
/// bedtime then wake-up time
pub fn sample_sheet(name: &str) -> String {
    write_sheet(
        name,
        &["05/03/24,06/03/24", "23:10,22:45", "07:15,06:50"],
    )
}

/// The CSV the sample sheet folds into under UTC
pub const SAMPLE_EXPECTED: &str = "Sleep,Wake\n\
05/03/2024 23:10:00,05/03/2024 07:15:00\n\
06/03/2024 22:45:00,06/03/2024 06:50:00";
