//! Tests for the CLI command handlers.
//!
//! Handlers are exercised directly (argument parsing stays in the binary),
//! against payloads written to a temp directory, checking the exit-code
//! contract: 0 success, 1 not found / no matches / invalid forest.

use std::fs;
use std::path::PathBuf;

use category_picker::cli::{run_path, run_roots, run_search, run_validate};
use tempfile::TempDir;

const PAYLOAD: &str = r#"[
    {"id": 1, "name": "Bisutería", "parentId": 0, "children": [
        {"id": 11, "name": "Aretes", "parentId": 1},
        {"id": 12, "name": "Collares", "parentId": 1}
    ]},
    {"id": 2, "name": "Cerámica", "parentId": 0}
]"#;

fn write_payload(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("categories.json");
    fs::write(&path, contents).expect("failed to write payload");
    path
}

#[test]
fn test_roots_succeeds_on_valid_payload() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, PAYLOAD);

    assert_eq!(run_roots(&path, false).unwrap(), 0);
    assert_eq!(run_roots(&path, true).unwrap(), 0);
}

#[test]
fn test_path_resolves_and_reports_missing_ids() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, PAYLOAD);

    assert_eq!(run_path(&path, 11, false).unwrap(), 0);
    assert_eq!(run_path(&path, 11, true).unwrap(), 0);
    assert_eq!(run_path(&path, 999, false).unwrap(), 1);
}

#[test]
fn test_search_exit_codes_follow_matches() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, PAYLOAD);

    assert_eq!(run_search(&path, "cer", false).unwrap(), 0);
    assert_eq!(run_search(&path, "CER", true).unwrap(), 0);
    assert_eq!(run_search(&path, "zzz", false).unwrap(), 1);
}

#[test]
fn test_validate_passes_clean_payload() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, PAYLOAD);

    assert_eq!(run_validate(&path).unwrap(), 0);
}

#[test]
fn test_validate_flags_duplicate_ids_and_bad_linkage() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(
        &dir,
        r#"[
            {"id": 1, "name": "Bisutería", "parentId": 0, "children": [
                {"id": 1, "name": "Aretes", "parentId": 99}
            ]}
        ]"#,
    );

    assert_eq!(run_validate(&path).unwrap(), 1);
}

#[test]
fn test_malformed_payload_is_an_error_not_an_exit_code() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, "{not json");

    assert!(run_roots(&path, false).is_err());
    assert!(run_validate(&path).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    assert!(run_search(&path, "cer", false).is_err());
}
