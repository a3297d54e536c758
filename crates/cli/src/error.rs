// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the `wkh` command line.
///
/// Messages are printed as `error: <message>`, with hints on following lines.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no issues file found\n  hint: pass --issues <path>, use '-' for stdin, or create .wok/issues.jsonl")]
    IssuesNotFound,

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("label not found: {0}\n  hint: run 'wkh labels' to list known labels")]
    LabelNotFound(String),

    #[error("invalid config {}: {source}", path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid timestamp '{value}'\n  hint: use RFC 3339, e.g. 2026-01-15T00:00:00Z")]
    InvalidTimestamp { value: String },

    #[error("invalid stale days: {0}\n  hint: must be a positive number of days")]
    InvalidStaleDays(i64),

    #[error(transparent)]
    Core(#[from] wkh_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for `wkh` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
