// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only view of graph centrality.
//!
//! PageRank, betweenness and critical-path scores are computed elsewhere and
//! handed to the engine through [`GraphStats`]. A [`GraphAnalyzer`] produces
//! one snapshot per run, which the orchestrator shares across all labels.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::issue::Issue;

/// Centrality values for one issue collection.
pub trait GraphStats: Sync {
    /// PageRank-style importance per issue ID.
    fn pagerank(&self) -> &HashMap<String, f64>;

    /// Betweenness centrality per issue ID.
    fn betweenness(&self) -> &HashMap<String, f64>;

    /// Positive when the issue lies on a critical path; 0 when unknown.
    fn critical_path_score(&self, id: &str) -> f64;

    /// Non-closed issues currently blocking `id`.
    fn open_blockers(&self, id: &str) -> Vec<String>;
}

/// Produces a [`GraphStats`] snapshot for an issue collection.
pub trait GraphAnalyzer {
    type Stats: GraphStats;

    fn analyze(&self, issues: &[Issue]) -> Self::Stats;
}

/// Largest value in a score map, or 0 when empty.
pub fn max_score(scores: &HashMap<String, f64>) -> f64 {
    scores.values().copied().fold(0.0, f64::max)
}

/// Externally computed centrality values, as loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CentralityInput {
    #[serde(default)]
    pub pagerank: HashMap<String, f64>,
    #[serde(default)]
    pub betweenness: HashMap<String, f64>,
    #[serde(default)]
    pub critical_path: HashMap<String, f64>,
}

impl CentralityInput {
    /// Loads centrality values from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let input = serde_json::from_reader(BufReader::new(file))?;
        Ok(input)
    }
}

/// A [`GraphStats`] built from supplied centrality values plus an
/// open-blocker index over the issues.
#[derive(Debug, Clone, Default)]
pub struct CentralitySnapshot {
    pagerank: HashMap<String, f64>,
    betweenness: HashMap<String, f64>,
    critical_path: HashMap<String, f64>,
    open_blockers: HashMap<String, Vec<String>>,
}

impl CentralitySnapshot {
    pub fn new(input: CentralityInput, issues: &[Issue]) -> Self {
        let mut by_id: HashMap<&str, &Issue> = HashMap::with_capacity(issues.len());
        for issue in issues {
            by_id.entry(issue.id.as_str()).or_insert(issue);
        }

        let mut open_blockers: HashMap<String, Vec<String>> = HashMap::new();
        for issue in issues {
            if open_blockers.contains_key(&issue.id) {
                continue;
            }
            let mut seen = HashSet::new();
            let blockers: Vec<String> = issue
                .blocker_ids()
                .filter(|id| by_id.get(id).is_some_and(|b| !b.is_closed()))
                .filter(|id| seen.insert(*id))
                .map(str::to_string)
                .collect();
            open_blockers.insert(issue.id.clone(), blockers);
        }

        CentralitySnapshot {
            pagerank: input.pagerank,
            betweenness: input.betweenness,
            critical_path: input.critical_path,
            open_blockers,
        }
    }
}

impl GraphStats for CentralitySnapshot {
    fn pagerank(&self) -> &HashMap<String, f64> {
        &self.pagerank
    }

    fn betweenness(&self) -> &HashMap<String, f64> {
        &self.betweenness
    }

    fn critical_path_score(&self, id: &str) -> f64 {
        self.critical_path.get(id).copied().unwrap_or(0.0)
    }

    fn open_blockers(&self, id: &str) -> Vec<String> {
        self.open_blockers.get(id).cloned().unwrap_or_default()
    }
}

/// Builds a [`CentralitySnapshot`] from fixed centrality values.
#[derive(Debug, Clone, Default)]
pub struct SnapshotAnalyzer {
    input: CentralityInput,
}

impl SnapshotAnalyzer {
    pub fn new(input: CentralityInput) -> Self {
        SnapshotAnalyzer { input }
    }
}

impl GraphAnalyzer for SnapshotAnalyzer {
    type Stats = CentralitySnapshot;

    fn analyze(&self, issues: &[Issue]) -> CentralitySnapshot {
        CentralitySnapshot::new(self.input.clone(), issues)
    }
}

#[cfg(test)]
#[path = "centrality_tests.rs"]
mod tests;
