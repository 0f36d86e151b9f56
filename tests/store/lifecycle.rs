//! Submission Lifecycle Tests
//!
//! Tests the store/load round trip, on-disk payload format, and the
//! error paths for missing submissions.

use crate::common::*;
use std::fs;

#[test]
fn store_then_load_returns_payload_in_order() {
    let ts = TestStore::new();

    ts.store
        .store("sub1", &["first line", "second line", "third line"])
        .unwrap();
    let loaded = ts.store.load("sub1").unwrap();

    assert_eq!(loaded.payload, vec!["first line", "second line", "third line"]);
}

#[test]
fn empty_payload_round_trips() {
    let ts = TestStore::new();
    let empty: [&str; 0] = [];

    ts.store.store("sub1", &empty).unwrap();
    let loaded = ts.store.load("sub1").unwrap();

    assert!(loaded.payload.is_empty());
    assert_eq!(ts.raw_payload("sub1"), "");
}

#[test]
fn empty_lines_are_preserved() {
    let ts = TestStore::new();

    ts.store.store("sub1", &["", "middle", ""]).unwrap();

    assert_eq!(ts.store.load_payload("sub1").unwrap(), vec!["", "middle", ""]);
}

#[test]
fn payload_file_ends_with_trailing_newline() {
    let ts = TestStore::new();

    ts.store.store("sub1", &["alpha", "beta"]).unwrap();

    assert_eq!(ts.raw_payload("sub1"), "alpha\nbeta\n");
}

#[test]
fn store_overwrites_existing_submission() {
    let ts = TestStore::new();

    ts.store.store("sub1", &["one", "two", "three"]).unwrap();
    ts.store.store("sub1", &["replacement"]).unwrap();

    assert_eq!(ts.store.load_payload("sub1").unwrap(), vec!["replacement"]);
    assert_eq!(ts.raw_payload("sub1"), "replacement\n");
}

#[test]
fn carriage_returns_survive_round_trip() {
    let ts = TestStore::new();

    // Only bare \n terminates a line; \r is payload
    ts.store.store("sub1", &["windows line\r", "plain line"]).unwrap();

    assert_eq!(
        ts.store.load_payload("sub1").unwrap(),
        vec!["windows line\r", "plain line"]
    );
}

#[test]
fn lines_containing_newlines_split_on_load() {
    let ts = TestStore::new();

    // The line-oriented file format cannot represent an embedded newline
    ts.store.store("sub1", &["first\nsecond"]).unwrap();

    assert_eq!(ts.store.load_payload("sub1").unwrap(), vec!["first", "second"]);
}

#[test]
fn stored_metadata_entry_is_fresh_utc() {
    let ts = TestStore::new();
    let before = chrono::Utc::now();

    ts.store.store("sub1", &["data"]).unwrap();
    let loaded = ts.store.load("sub1").unwrap();

    let stamp = loaded
        .metadata
        .date_indexed_utc()
        .expect("entry should carry a parseable date_indexed");
    let after = chrono::Utc::now();
    assert!(stamp >= before && stamp <= after);
}

#[test]
fn load_payload_returns_lines_only() {
    let ts = TestStore::new();

    ts.store.store("sub1", &["just", "lines"]).unwrap();

    assert_eq!(ts.store.load_payload("sub1").unwrap(), vec!["just", "lines"]);
}

#[test]
fn load_reports_missing_file() {
    let ts = TestStore::new();

    let err = ts.store.load("ghost").unwrap_err();

    assert!(err.is_not_found());
    assert!(ts
        .logger
        .contains(LogLevel::Error, "Submission file 'ghost.txt' not found."));
}

#[test]
fn load_reports_missing_metadata_entry() {
    let ts = TestStore::new();

    // A payload file without a metadata entry is not a submission
    fs::write(ts.submission_path("orphan"), "data\n").unwrap();

    let err = ts.store.load("orphan").unwrap_err();

    assert!(err.is_not_found());
    assert!(ts
        .logger
        .contains(LogLevel::Error, "No metadata for submission 'orphan' in metadata.json."));
    assert!(ts.submission_path("orphan").exists());
}

#[test]
fn store_and_load_log_info_messages() {
    let ts = TestStore::new();

    ts.store.store("sub1", &["data"]).unwrap();
    ts.store.load("sub1").unwrap();

    assert!(ts.logger.contains(LogLevel::Info, "Stored submission 'sub1' in '"));
    assert!(ts.logger.contains(LogLevel::Info, "Loaded submission 'sub1'."));
}

#[test]
fn ids_with_path_separators_are_rejected() {
    let ts = TestStore::new();

    assert!(matches!(
        ts.store.store("a/b", &["x"]),
        Err(Error::InvalidId(_))
    ));
    assert!(matches!(
        ts.store.store("a\\b", &["x"]),
        Err(Error::InvalidId(_))
    ));
    assert!(matches!(ts.store.load("../escape"), Err(Error::InvalidId(_))));
    assert!(matches!(ts.store.load(""), Err(Error::InvalidId(_))));
}

#[test]
fn distinct_submissions_live_in_distinct_files() {
    let ts = TestStore::new();

    ts.store.store("sub_a", &["a"]).unwrap();
    ts.store.store("sub_b", &["b"]).unwrap();

    assert_eq!(ts.raw_payload("sub_a"), "a\n");
    assert_eq!(ts.raw_payload("sub_b"), "b\n");
    assert_eq!(ts.store.load_payload("sub_a").unwrap(), vec!["a"]);
    assert_eq!(ts.store.load_payload("sub_b").unwrap(), vec!["b"]);
}
