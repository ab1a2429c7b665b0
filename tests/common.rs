#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use attendlog::models::{Action, AttendanceEvent};
use chrono::{Local, TimeZone};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("attendlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Epoch milliseconds of a local wall-clock time.
pub fn local_ms(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
    Local
        .with_ymd_and_hms(y, m, d, h, mi, s)
        .earliest()
        .expect("valid local time")
        .timestamp_millis()
}

pub fn ev(id: &str, name: &str, action: Action, ts: i64) -> AttendanceEvent {
    AttendanceEvent {
        id: id.to_string(),
        name: name.to_string(),
        action,
        ts,
    }
}

pub fn ids(events: &[AttendanceEvent]) -> Vec<&str> {
    events.iter().map(|e| e.id.as_str()).collect()
}
