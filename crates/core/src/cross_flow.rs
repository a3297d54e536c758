// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Global label-to-label blocking flow.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::extract_labels;
use crate::config::LabelHealthConfig;
use crate::index::IssueIndex;
use crate::issue::Issue;

/// One issue blocking another across two labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct BlockingPair {
    pub blocker_id: String,
    pub blocked_id: String,
    pub blocker_label: String,
    pub blocked_label: String,
}

/// Aggregated blocking from one label onto another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct LabelDependency {
    /// Label of the blocking issues.
    pub from_label: String,
    /// Label of the blocked issues.
    pub to_label: String,
    pub issue_count: usize,
    /// Blocked issue IDs, one per contributing pair.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issue_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocking_pairs: Vec<BlockingPair>,
}

impl LabelDependency {
    fn new(from: &str, to: &str) -> Self {
        LabelDependency {
            from_label: from.to_string(),
            to_label: to.to_string(),
            issue_count: 0,
            issue_ids: Vec::new(),
            blocking_pairs: Vec::new(),
        }
    }
}

/// A chain of labels linked by blocking dependencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct LabelPath {
    pub labels: Vec<String>,
    /// Number of label transitions.
    pub length: usize,
    pub issue_count: usize,
    pub total_weight: f64,
}

/// Blocking flow between every pair of labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CrossLabelFlow {
    /// Sorted labels; indexes into `flow_matrix`.
    pub labels: Vec<String>,
    /// `flow_matrix[from][to]` counts blocking edges from `from` onto `to`.
    pub flow_matrix: Vec<Vec<usize>>,
    /// Sorted by from label, then to label.
    pub dependencies: Vec<LabelDependency>,
    /// Always empty; label-level chains are not derived.
    pub critical_paths: Vec<LabelPath>,
    /// Labels with the largest outgoing count, sorted.
    pub bottleneck_labels: Vec<String>,
    pub total_cross_label_deps: usize,
}

impl CrossLabelFlow {
    /// The matrix cell for `from` onto `to`, or 0 for unknown labels.
    pub fn count(&self, from: &str, to: &str) -> usize {
        let (Some(i), Some(j)) = (self.position(from), self.position(to)) else {
            return 0;
        };
        self.flow_matrix
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(0)
    }

    /// Total outgoing edges for `label`.
    pub fn outgoing(&self, label: &str) -> usize {
        self.position(label)
            .and_then(|i| self.flow_matrix.get(i))
            .map_or(0, |row| row.iter().sum())
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.labels.binary_search_by(|l| l.as_str().cmp(label)).ok()
    }
}

/// Builds the cross-label flow for `issues`.
///
/// Every blocks-dependency contributes one edge per (blocker label, blocked
/// label) pair, skipping empty and identical labels. Closed issues on either
/// side are ignored unless `include_closed_in_flow` is set.
pub fn compute_cross_label_flow(issues: &[Issue], cfg: &LabelHealthConfig) -> CrossLabelFlow {
    let labels = extract_labels(issues).labels;
    let n = labels.len();
    let position: HashMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect();

    let index = IssueIndex::new(issues);
    let skip_closed = !cfg.include_closed_in_flow;

    let mut matrix = vec![vec![0usize; n]; n];
    let mut deps: BTreeMap<(&str, &str), LabelDependency> = BTreeMap::new();
    let mut total = 0usize;

    for blocked in issues {
        if skip_closed && blocked.is_closed() {
            continue;
        }
        for blocker_id in blocked.blocker_ids() {
            let Some(blocker) = index.get(blocker_id) else {
                continue;
            };
            if skip_closed && blocker.is_closed() {
                continue;
            }

            for from in &blocker.labels {
                for to in &blocked.labels {
                    if from.is_empty() || to.is_empty() || from == to {
                        continue;
                    }
                    let (Some(&i), Some(&j)) =
                        (position.get(from.as_str()), position.get(to.as_str()))
                    else {
                        continue;
                    };

                    matrix[i][j] += 1;
                    total += 1;

                    let entry = deps
                        .entry((from.as_str(), to.as_str()))
                        .or_insert_with(|| LabelDependency::new(from, to));
                    entry.issue_count += 1;
                    entry.issue_ids.push(blocked.id.clone());
                    entry.blocking_pairs.push(BlockingPair {
                        blocker_id: blocker.id.clone(),
                        blocked_id: blocked.id.clone(),
                        blocker_label: from.clone(),
                        blocked_label: to.clone(),
                    });
                }
            }
        }
    }

    let mut dependencies: Vec<LabelDependency> = deps.into_values().collect();
    dependencies.sort_by(|a, b| {
        a.from_label
            .cmp(&b.from_label)
            .then_with(|| a.to_label.cmp(&b.to_label))
            .then_with(|| b.issue_count.cmp(&a.issue_count))
    });

    let row_sums: Vec<usize> = matrix.iter().map(|row| row.iter().sum()).collect();
    let max_out = row_sums.iter().copied().max().unwrap_or(0);
    let bottleneck_labels: Vec<String> = if max_out > 0 {
        labels
            .iter()
            .zip(&row_sums)
            .filter(|(_, sum)| **sum == max_out)
            .map(|(l, _)| l.clone())
            .collect()
    } else {
        Vec::new()
    };

    debug!(
        labels = n,
        dependencies = dependencies.len(),
        total,
        "computed cross-label flow"
    );

    CrossLabelFlow {
        labels,
        flow_matrix: matrix,
        dependencies,
        critical_paths: Vec::new(),
        bottleneck_labels,
        total_cross_label_deps: total,
    }
}

#[cfg(test)]
#[path = "cross_flow_tests.rs"]
mod tests;
