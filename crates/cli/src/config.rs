// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration for `wkh`.
//!
//! Settings live in `.wok/health.toml`, found by walking up from the current
//! directory, or in a file passed with `--config`:
//!
//! ```toml
//! [health]
//! stale_threshold_days = 21
//! velocity_weight = 0.4
//!
//! [input]
//! issues = "exports/issues.jsonl"
//! centrality = "exports/centrality.json"
//! ```
//!
//! Relative input paths resolve against the project root (the directory
//! holding `.wok/`), or the config file's directory for `--config`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wkh_core::LabelHealthConfig;

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".wok";
const CONFIG_FILE_NAME: &str = "health.toml";
const ISSUES_FILE_NAME: &str = "issues.jsonl";
const CENTRALITY_FILE_NAME: &str = "centrality.json";

/// Where to read inputs from when no flag says otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// JSON Lines issue export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<String>,
    /// Precomputed centrality JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centrality: Option<String>,
}

/// Contents of a `health.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub health: LabelHealthConfig,
    #[serde(default)]
    pub input: InputConfig,
    /// Directory that relative input paths resolve against.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Config {
    /// Parses TOML text; `path` is used for error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads a config file. Relative inputs resolve against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        let mut config = Self::parse(&text, path)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Loads `health.toml` from `work_dir`, or defaults when it is absent.
    pub fn discover(work_dir: &Path) -> Result<Self> {
        let path = work_dir.join(CONFIG_FILE_NAME);
        let mut config = if path.is_file() {
            Self::load(&path)?
        } else {
            Config::default()
        };
        config.base_dir = Some(project_root(work_dir).to_path_buf());
        Ok(config)
    }

    /// Resolves a configured path against `base_dir`.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn issues_path(&self) -> Option<PathBuf> {
        self.input.issues.as_deref().map(|p| self.resolve(p))
    }

    pub fn centrality_path(&self) -> Option<PathBuf> {
        self.input.centrality.as_deref().map(|p| self.resolve(p))
    }
}

/// The directory holding `.wok/`.
fn project_root(work_dir: &Path) -> &Path {
    work_dir.parent().unwrap_or(work_dir)
}

/// Walks up from `start` to the nearest `.wok/` directory.
pub fn find_work_dir_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(WORK_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}

/// Walks up from the current directory to the nearest `.wok/` directory.
pub fn find_work_dir() -> Result<Option<PathBuf>> {
    let cwd = std::env::current_dir()?;
    Ok(find_work_dir_from(&cwd))
}

/// `issues.jsonl` inside `work_dir`, if it exists.
pub fn default_issues_path(work_dir: &Path) -> Option<PathBuf> {
    Some(work_dir.join(ISSUES_FILE_NAME)).filter(|p| p.is_file())
}

/// `centrality.json` inside `work_dir`, if it exists.
pub fn default_centrality_path(work_dir: &Path) -> Option<PathBuf> {
    Some(work_dir.join(CENTRALITY_FILE_NAME)).filter(|p| p.is_file())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
