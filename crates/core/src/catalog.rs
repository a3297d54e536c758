// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Label catalog: unique labels, per-label counts, and lookup queries.
//!
//! Labels on an issue are not deduplicated, so a label listed twice on one
//! issue counts twice. Empty label strings are ignored everywhere.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::centrality::GraphStats;
use crate::issue::{Issue, Status};

/// Raw aggregate for one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct LabelStats {
    pub label: String,
    /// Label occurrences across all issues.
    pub total_count: usize,
    pub open_count: usize,
    pub closed_count: usize,
    pub in_progress: usize,
    pub blocked: usize,
    /// Occurrences by issue priority.
    pub by_priority: BTreeMap<i32, usize>,
    /// Occurrences by issue type.
    pub by_type: BTreeMap<String, usize>,
    /// Issue IDs in input order, one entry per occurrence.
    pub issue_ids: Vec<String>,
}

impl LabelStats {
    fn new(label: &str) -> Self {
        LabelStats {
            label: label.to_string(),
            total_count: 0,
            open_count: 0,
            closed_count: 0,
            in_progress: 0,
            blocked: 0,
            by_priority: BTreeMap::new(),
            by_type: BTreeMap::new(),
            issue_ids: Vec::new(),
        }
    }

    fn record(&mut self, issue: &Issue) {
        self.total_count += 1;
        self.issue_ids.push(issue.id.clone());

        match issue.status {
            Status::Open => self.open_count += 1,
            Status::InProgress => self.in_progress += 1,
            Status::Blocked => self.blocked += 1,
            Status::Closed => self.closed_count += 1,
        }

        *self.by_priority.entry(issue.priority).or_insert(0) += 1;
        *self.by_type.entry(issue.issue_type.clone()).or_insert(0) += 1;
    }
}

/// The full label catalog for one issue collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct LabelExtractionResult {
    /// Unique labels, sorted.
    pub labels: Vec<String>,
    pub label_count: usize,
    pub stats: BTreeMap<String, LabelStats>,
    pub issue_count: usize,
    /// Issues with no labels at all.
    pub unlabeled_count: usize,
    /// Labels by occurrence count descending, alphabetical on ties.
    pub top_labels: Vec<String>,
}

/// Builds the label catalog for `issues`.
pub fn extract_labels(issues: &[Issue]) -> LabelExtractionResult {
    let mut result = LabelExtractionResult {
        issue_count: issues.len(),
        ..Default::default()
    };

    for issue in issues {
        if issue.labels.is_empty() {
            result.unlabeled_count += 1;
        }

        for label in issue.labels.iter().filter(|l| !l.is_empty()) {
            result
                .stats
                .entry(label.clone())
                .or_insert_with(|| LabelStats::new(label))
                .record(issue);
        }
    }

    result.labels = result.stats.keys().cloned().collect();
    result.label_count = result.labels.len();
    result.top_labels = sort_labels_by_count(&result.stats);
    result
}

/// Labels ordered by `total_count` descending, then alphabetically.
pub fn sort_labels_by_count(stats: &BTreeMap<String, LabelStats>) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = stats
        .iter()
        .map(|(label, s)| (label.as_str(), s.total_count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    counts.into_iter().map(|(l, _)| l.to_string()).collect()
}

/// Issues carrying `label`, each at most once, in input order.
pub fn get_label_issues<'a>(issues: &'a [Issue], label: &str) -> Vec<&'a Issue> {
    issues.iter().filter(|i| i.has_label(label)).collect()
}

/// Labels of the first issue with `issue_id`, if any.
pub fn get_labels_for_issue<'a>(issues: &'a [Issue], issue_id: &str) -> Option<&'a [String]> {
    issues
        .iter()
        .find(|i| i.id == issue_id)
        .map(|i| i.labels.as_slice())
}

/// Labels present in every one of `label_sets`, sorted.
///
/// Returns `None` when no sets are given.
pub fn get_common_labels<I, S>(label_sets: &[I]) -> Option<Vec<String>>
where
    I: AsRef<[S]>,
    S: AsRef<str>,
{
    let (first, rest) = label_sets.split_first()?;

    let mut common: BTreeSet<&str> = first.as_ref().iter().map(|s| s.as_ref()).collect();
    for set in rest {
        let current: HashSet<&str> = set.as_ref().iter().map(|s| s.as_ref()).collect();
        common.retain(|label| current.contains(label));
    }

    Some(common.into_iter().map(str::to_string).collect())
}

/// Symmetric co-occurrence counts for label pairs sharing an issue.
///
/// A pair is counted once per issue position pair; a label never pairs with
/// itself.
pub fn get_label_cooccurrence(issues: &[Issue]) -> BTreeMap<String, BTreeMap<String, usize>> {
    let mut cooc: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();

    for issue in issues {
        let labels = &issue.labels;
        for (i, l1) in labels.iter().enumerate() {
            for l2 in &labels[i + 1..] {
                if l1.is_empty() || l2.is_empty() || l1 == l2 {
                    continue;
                }
                *cooc
                    .entry(l1.clone())
                    .or_default()
                    .entry(l2.clone())
                    .or_insert(0) += 1;
                *cooc
                    .entry(l2.clone())
                    .or_default()
                    .entry(l1.clone())
                    .or_insert(0) += 1;
            }
        }
    }

    cooc
}

/// Count of non-closed issues with open blockers, per label.
pub fn compute_blocked_by_label(
    issues: &[Issue],
    stats: &dyn GraphStats,
) -> BTreeMap<String, usize> {
    let mut blocked = BTreeMap::new();

    for issue in issues.iter().filter(|i| !i.is_closed()) {
        if stats.open_blockers(&issue.id).is_empty() {
            continue;
        }
        for label in issue.labels.iter().filter(|l| !l.is_empty()) {
            *blocked.entry(label.clone()).or_insert(0) += 1;
        }
    }

    blocked
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
