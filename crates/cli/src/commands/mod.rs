// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command implementations and the input loading they share.

pub mod flow;
pub mod health;
pub mod label;
pub mod labels;
pub mod schema;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use wkh_core::jsonl::{load_issues, load_issues_from_path};
use wkh_core::{CentralityInput, Issue, LabelHealthConfig, SnapshotAnalyzer};

use crate::cli::InputArgs;
use crate::config::{self, default_centrality_path, default_issues_path, Config};
use crate::error::{Error, Result};
use crate::time_phase;

/// Everything a report needs, loaded once per invocation.
#[derive(Debug)]
pub(crate) struct Inputs {
    pub issues: Vec<Issue>,
    pub centrality: CentralityInput,
    pub config: LabelHealthConfig,
    pub now: DateTime<Utc>,
}

impl Inputs {
    pub fn analyzer(&self) -> SnapshotAnalyzer {
        SnapshotAnalyzer::new(self.centrality.clone())
    }
}

/// Where issues are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IssueSource {
    Stdin,
    File(PathBuf),
}

/// Loads config, issues and centrality for a command.
pub(crate) fn load_inputs(args: &InputArgs) -> Result<Inputs> {
    let work_dir = config::find_work_dir()?;
    let file_config = match (&args.config, &work_dir) {
        (Some(path), _) => Config::load(path)?,
        (None, Some(dir)) => Config::discover(dir)?,
        (None, None) => Config::default(),
    };

    let config = apply_overrides(file_config.health.clone(), args)?;
    let now = parse_now(args.now.as_deref())?;

    let source = resolve_issue_source(args, &file_config, work_dir.as_deref())?;
    let issues = time_phase!("load::issues", read_issues(&source))?;

    let centrality_path = args
        .centrality
        .clone()
        .or_else(|| file_config.centrality_path())
        .or_else(|| work_dir.as_deref().and_then(default_centrality_path));
    let centrality = match centrality_path {
        Some(path) => time_phase!("load::centrality", load_centrality(&path))?,
        None => CentralityInput::default(),
    };

    debug!(
        issues = issues.len(),
        source = ?source,
        stale_days = config.stale_threshold_days,
        include_closed = config.include_closed_in_flow,
        "loaded inputs"
    );

    Ok(Inputs {
        issues,
        centrality,
        config,
        now,
    })
}

/// Applies command-line overrides on top of file settings.
pub(crate) fn apply_overrides(
    mut cfg: LabelHealthConfig,
    args: &InputArgs,
) -> Result<LabelHealthConfig> {
    if let Some(days) = args.stale_days {
        if days <= 0 {
            return Err(Error::InvalidStaleDays(days));
        }
        cfg.stale_threshold_days = days;
    }
    if args.include_closed {
        cfg.include_closed_in_flow = true;
    }
    Ok(cfg)
}

/// Picks the issues source: flag, then config, then `.wok/issues.jsonl`.
pub(crate) fn resolve_issue_source(
    args: &InputArgs,
    config: &Config,
    work_dir: Option<&Path>,
) -> Result<IssueSource> {
    match &args.issues {
        Some(path) if path.as_os_str() == "-" => Ok(IssueSource::Stdin),
        Some(path) => Ok(IssueSource::File(path.clone())),
        None => config
            .issues_path()
            .or_else(|| work_dir.and_then(default_issues_path))
            .map(IssueSource::File)
            .ok_or(Error::IssuesNotFound),
    }
}

fn read_issues(source: &IssueSource) -> Result<Vec<Issue>> {
    match source {
        IssueSource::Stdin => Ok(load_issues(std::io::stdin().lock())?),
        IssueSource::File(path) if !path.is_file() => Err(Error::FileNotFound(path.clone())),
        IssueSource::File(path) => Ok(load_issues_from_path(path)?),
    }
}

fn load_centrality(path: &Path) -> Result<CentralityInput> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    Ok(CentralityInput::load(path)?)
}

/// Parses `--now`, defaulting to the current time.
pub(crate) fn parse_now(value: Option<&str>) -> Result<DateTime<Utc>> {
    match value {
        None => Ok(Utc::now()),
        Some(v) => DateTime::parse_from_rfc3339(v)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|_| Error::InvalidTimestamp {
                value: v.to_string(),
            }),
    }
}

/// Prints `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints rendered lines on stdout.
pub(crate) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
