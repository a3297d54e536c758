// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::Status;
use serde::Deserialize;
use std::io::Cursor;
use tempfile::TempDir;

#[derive(Debug, PartialEq, Deserialize)]
struct TestRecord {
    id: u32,
    name: String,
}

#[test]
fn read_from_skips_empty_lines() {
    let input = "{\"id\":1,\"name\":\"a\"}\n\n   \n{\"id\":2,\"name\":\"b\"}\n";
    let records: Vec<TestRecord> = read_from(Cursor::new(input)).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name, "b");
}

#[test]
fn read_from_reports_failing_line() {
    let input = "{\"id\":1,\"name\":\"a\"}\n\nnot json\n";
    let err = read_from::<TestRecord, _>(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, Error::ParseLine { line: 3, .. }), "{err}");
}

#[test]
fn load_issues_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.jsonl");

    let err = load_issues_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn load_issues_from_path_reads_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("issues.jsonl");
    std::fs::write(
        &path,
        "{\"id\":\"a\",\"labels\":[\"api\"],\"status\":\"open\"}\n\
         {\"id\":\"b\",\"labels\":[\"ui\"],\"status\":\"done\",\"dependencies\":[{\"depends_on_id\":\"a\",\"type\":\"blocks\"}]}\n",
    )
    .unwrap();

    let issues = load_issues_from_path(&path).unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[1].status, Status::Closed);
    assert_eq!(issues[1].blocker_ids().collect::<Vec<_>>(), vec!["a"]);
}

#[test]
fn load_issues_keeps_duplicate_ids() {
    let input = "{\"id\":\"a\"}\n{\"id\":\"a\"}\n";
    let issues = load_issues(Cursor::new(input)).unwrap();
    assert_eq!(issues.len(), 2);
}
