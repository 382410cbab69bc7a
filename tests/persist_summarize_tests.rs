mod common;
use common::temp_out;

use caltrack::core::categorize::categorize;
use caltrack::core::normalize::normalize_all;
use caltrack::core::summary::summarize;
use caltrack::errors::AppError;
use caltrack::export::csv::{CSV_HEADERS, write_categorized_csv, write_header_only};
use caltrack::models::event::RawEvent;
use std::fs;
use std::path::Path;

fn raw(title: &str, start: &str, end: &str) -> RawEvent {
    RawEvent {
        title: Some(title.to_string()),
        start: Some(start.to_string()),
        end: Some(end.to_string()),
    }
}

#[test]
fn test_end_to_end_scenario() {
    let events = normalize_all(&[
        raw(
            "12 Standup",
            "2024-01-01T09:00:00+00:00",
            "2024-01-01T09:30:00+00:00",
        ),
        raw(
            "12 Sync",
            "2024-01-01T10:00:00+00:00",
            "2024-01-01T10:15:00+00:00",
        ),
        raw(
            "Lunch",
            "2024-01-01T12:00:00+00:00",
            "2024-01-01T13:00:00+00:00",
        ),
    ]);

    let index = categorize(&events);
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(12).unwrap().len(), 2);

    let out = temp_out("end_to_end", "csv");
    write_categorized_csv(Path::new(&out), &index).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Category,Summary,Start,End,Duration (hours)"));
    assert!(!content.contains("Lunch"));

    let summary = summarize(Path::new(&out)).unwrap();
    assert_eq!(summary.len(), 1);
    assert!((summary.get(12).unwrap() - 0.75).abs() < 1e-9);
}

#[test]
fn test_summarize_reproduces_in_memory_sums() {
    let events = normalize_all(&[
        raw("7 a", "2024-02-01T08:00:00+00:00", "2024-02-01T09:30:00+00:00"),
        raw("7 b", "2024-02-02T08:00:00+00:00", "2024-02-02T08:45:00+00:00"),
        raw("21 c", "2024-02-03T10:00:00+00:00", "2024-02-03T12:00:00+00:00"),
    ]);
    let index = categorize(&events);

    let out = temp_out("roundtrip_sums", "csv");
    write_categorized_csv(Path::new(&out), &index).unwrap();
    let summary = summarize(Path::new(&out)).unwrap();

    for (category, events) in index.iter() {
        let expected: f64 = events.iter().filter_map(|e| e.duration.as_hours()).sum();
        assert!((summary.get(category).unwrap() - expected).abs() < 1e-9);
    }
}

#[test]
fn test_unknown_durations_are_excluded_from_sums() {
    let events = normalize_all(&[
        raw("4 real", "2024-03-01T09:00:00+00:00", "2024-03-01T10:00:00+00:00"),
        RawEvent {
            title: Some("4 open-ended".to_string()),
            start: Some("2024-03-01T11:00:00+00:00".to_string()),
            end: None,
        },
    ]);
    let index = categorize(&events);
    assert_eq!(index.get(4).unwrap().len(), 2);

    let out = temp_out("unknown_excluded", "csv");
    write_categorized_csv(Path::new(&out), &index).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("Unknown"));

    let summary = summarize(Path::new(&out)).unwrap();
    assert!((summary.get(4).unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn test_persist_overwrites_previous_file() {
    let out = temp_out("overwrite", "csv");

    let first = categorize(&normalize_all(&[raw(
        "1 old",
        "2024-01-01T09:00:00+00:00",
        "2024-01-01T10:00:00+00:00",
    )]));
    write_categorized_csv(Path::new(&out), &first).unwrap();

    let second = categorize(&normalize_all(&[raw(
        "2 new",
        "2024-01-02T09:00:00+00:00",
        "2024-01-02T10:00:00+00:00",
    )]));
    write_categorized_csv(Path::new(&out), &second).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert!(!content.contains("1 old"));
    assert!(content.contains("2 new"));
}

#[test]
fn test_summarize_missing_file_is_a_clear_signal() {
    let missing = temp_out("does_not_exist", "csv");

    let err = summarize(Path::new(&missing)).unwrap_err();
    assert!(matches!(err, AppError::MissingSourceFile(_)));
    assert!(err.to_string().contains("caltrack collect"));
}

#[test]
fn test_header_only_file_summarizes_to_empty() {
    let out = temp_out("header_only", "csv");
    write_header_only(Path::new(&out)).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content.trim(), CSV_HEADERS.join(","));

    let summary = summarize(Path::new(&out)).unwrap();
    assert!(summary.is_empty());
}
