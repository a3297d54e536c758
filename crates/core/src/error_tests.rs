// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    invalid_status = { Error::InvalidStatus("paused".into()), "paused" },
    invalid_dep_type = { Error::InvalidDependencyType("mentions".into()), "mentions" },
    status_hint = { Error::InvalidStatus("x".into()), "hint:" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_parse_line_reports_line_number() {
    let source = serde_json::from_str::<()>("{").unwrap_err();
    let err = Error::ParseLine { line: 7, source };
    assert!(err.to_string().starts_with("line 7:"));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}
