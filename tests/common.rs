#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ct() -> Command {
    cargo_bin_cmd!("caltrack")
}

/// Create a unique output file path inside the system temp dir and
/// remove any existing file
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_caltrack_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create an isolated HOME for a test so no real config or token file
/// leaks in
pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_caltrack_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path.to_string_lossy().to_string()
}

/// Write a small categorized events CSV useful for chart tests
pub fn write_fixture_csv(path: &str) {
    let content = "\
Category,Summary,Start,End,Duration (hours)
12,12 Standup,2024-01-01T09:00:00+00:00,2024-01-01T09:30:00+00:00,0.5
12,12 Sync,2024-01-01T10:00:00+00:00,2024-01-01T10:15:00+00:00,0.25
3,3Review,2024-01-02T09:00:00+00:00,No End Time,Unknown
";
    fs::write(path, content).expect("write fixture csv");
}
