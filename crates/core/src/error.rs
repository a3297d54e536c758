// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for wkh-core operations.
//!
//! The analysis engine itself never fails; these cover loading issues and
//! centrality snapshots from disk and parsing user-supplied names.

use thiserror::Error;

/// All possible errors that can occur in wkh-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid status: '{0}'\n  hint: valid statuses are: open, in_progress, blocked, closed")]
    InvalidStatus(String),

    #[error("invalid dependency type: '{0}'\n  hint: valid types are: blocks, related, parent-child, discovered-from")]
    InvalidDependencyType(String),

    #[error("line {line}: {source}")]
    ParseLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for wkh-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
