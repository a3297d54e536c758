// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument groups shared by the analysis commands.

use std::path::PathBuf;

use clap::Args;

/// Where issues and centrality come from, plus per-run overrides.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Issues as JSON Lines ('-' for stdin) [default: .wok/issues.jsonl]
    #[arg(long, short = 'i', value_name = "path")]
    pub issues: Option<PathBuf>,

    /// Precomputed centrality JSON [default: .wok/centrality.json if present]
    #[arg(long, value_name = "path")]
    pub centrality: Option<PathBuf>,

    /// Config file [default: .wok/health.toml]
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Days without an update before an issue is stale
    #[arg(long, value_name = "days")]
    pub stale_days: Option<i64>,

    /// Count closed issues in cross-label flow
    #[arg(long)]
    pub include_closed: bool,

    /// Evaluate as of this RFC 3339 time instead of now
    #[arg(long, value_name = "time")]
    pub now: Option<String>,
}
