// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL (JSON Lines) readers.
//!
//! Issue exports store one JSON record per line. Blank lines are skipped and
//! parse failures report the 1-based line number.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::issue::Issue;

/// Reads all records from a JSONL stream.
pub fn read_from<T: DeserializeOwned, R: BufRead>(reader: R) -> Result<Vec<T>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: T = serde_json::from_str(&line).map_err(|source| Error::ParseLine {
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Loads issues from a JSONL stream.
///
/// Duplicate IDs are kept (lookups resolve to the first occurrence) but
/// logged, since they usually mean a corrupted export.
pub fn load_issues<R: BufRead>(reader: R) -> Result<Vec<Issue>> {
    let issues: Vec<Issue> = read_from(reader)?;

    let mut seen = HashSet::with_capacity(issues.len());
    for issue in &issues {
        if !seen.insert(issue.id.as_str()) {
            tracing::warn!(id = %issue.id, "duplicate issue id in input");
        }
    }
    tracing::debug!(count = issues.len(), "loaded issues");

    Ok(issues)
}

/// Loads issues from a JSONL file.
pub fn load_issues_from_path(path: &Path) -> Result<Vec<Issue>> {
    let file = File::open(path)?;
    load_issues(BufReader::new(file))
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
