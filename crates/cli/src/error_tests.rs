// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn issues_not_found_has_hint() {
    let msg = Error::IssuesNotFound.to_string();
    assert!(msg.starts_with("no issues file found"));
    assert!(msg.contains("hint: pass --issues"));
}

#[test]
fn label_not_found_names_label() {
    let msg = Error::LabelNotFound("api".into()).to_string();
    assert!(msg.contains("label not found: api"));
    assert!(msg.contains("wkh labels"));
}

#[test]
fn core_errors_pass_through() {
    let core = wkh_core::Error::InvalidStatus("wip".into());
    let expected = core.to_string();
    let err: Error = core.into();
    assert_eq!(err.to_string(), expected);
}

#[test]
fn invalid_timestamp_shows_value() {
    let msg = Error::InvalidTimestamp {
        value: "yesterday".into(),
    }
    .to_string();
    assert!(msg.contains("'yesterday'"));
    assert!(msg.contains("RFC 3339"));
}
