// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-collection label analysis.
//!
//! Labels are scored in parallel against one shared centrality snapshot, then
//! tallied and sorted so the result does not depend on scheduling.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::extract_labels;
use crate::centrality::GraphAnalyzer;
use crate::config::LabelHealthConfig;
use crate::cross_flow::{compute_cross_label_flow, CrossLabelFlow};
use crate::health::{compute_label_health_indexed, HealthLevel, LabelHealth};
use crate::index::IssueIndex;
use crate::issue::Issue;

/// Condensed view of one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct LabelSummary {
    pub label: String,
    pub issue_count: usize,
    pub open_count: usize,
    pub health: i64,
    pub health_level: HealthLevel,
    /// First member issue in input order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_issue: Option<String>,
    pub needs_attention: bool,
}

impl From<&LabelHealth> for LabelSummary {
    fn from(health: &LabelHealth) -> Self {
        LabelSummary {
            label: health.label.clone(),
            issue_count: health.issue_count,
            open_count: health.open_count,
            health: health.health,
            health_level: health.health_level,
            top_issue: health.issues.first().cloned(),
            needs_attention: health.needs_attention(),
        }
    }
}

/// Health of every label in a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct LabelAnalysisResult {
    pub generated_at: DateTime<Utc>,
    pub total_labels: usize,
    pub healthy_count: usize,
    pub warning_count: usize,
    pub critical_count: usize,
    /// Per-label detail, alphabetical.
    pub labels: Vec<LabelHealth>,
    /// Health descending, label ascending on ties.
    pub summaries: Vec<LabelSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_label_flow: Option<CrossLabelFlow>,
    /// Warning and critical labels, alphabetical.
    pub attention_needed: Vec<String>,
}

impl LabelAnalysisResult {
    /// Health for `label`, if it was analyzed.
    pub fn label(&self, label: &str) -> Option<&LabelHealth> {
        self.labels
            .binary_search_by(|h| h.label.as_str().cmp(label))
            .ok()
            .and_then(|i| self.labels.get(i))
    }
}

/// Computes health for every label in `issues`.
///
/// `analyzer` runs once; its snapshot is shared by all labels.
pub fn compute_all_label_health<A>(
    issues: &[Issue],
    cfg: &LabelHealthConfig,
    now: DateTime<Utc>,
    analyzer: &A,
) -> LabelAnalysisResult
where
    A: GraphAnalyzer,
{
    let catalog = extract_labels(issues);
    let stats = analyzer.analyze(issues);
    let index = IssueIndex::new(issues);

    let labels: Vec<LabelHealth> = catalog
        .labels
        .par_iter()
        .map(|label| compute_label_health_indexed(label, issues, &index, cfg, now, &stats))
        .collect();

    let mut result = LabelAnalysisResult {
        generated_at: now,
        total_labels: catalog.label_count,
        healthy_count: 0,
        warning_count: 0,
        critical_count: 0,
        labels: Vec::with_capacity(labels.len()),
        summaries: Vec::with_capacity(labels.len()),
        cross_label_flow: None,
        attention_needed: Vec::new(),
    };

    for health in labels {
        result.summaries.push(LabelSummary::from(&health));
        match health.health_level {
            HealthLevel::Healthy => result.healthy_count += 1,
            HealthLevel::Warning => {
                result.warning_count += 1;
                result.attention_needed.push(health.label.clone());
            }
            HealthLevel::Critical => {
                result.critical_count += 1;
                result.attention_needed.push(health.label.clone());
            }
        }
        result.labels.push(health);
    }

    result.summaries.sort_by(|a, b| {
        b.health
            .cmp(&a.health)
            .then_with(|| a.label.cmp(&b.label))
    });

    debug!(
        issues = issues.len(),
        labels = result.total_labels,
        healthy = result.healthy_count,
        warning = result.warning_count,
        critical = result.critical_count,
        "computed label health"
    );

    result
}

/// Runs [`compute_all_label_health`], attaching the cross-label flow when
/// `include_flow` is set.
pub fn analyze_labels<A>(
    issues: &[Issue],
    cfg: &LabelHealthConfig,
    now: DateTime<Utc>,
    analyzer: &A,
    include_flow: bool,
) -> LabelAnalysisResult
where
    A: GraphAnalyzer,
{
    let mut result = compute_all_label_health(issues, cfg, now, analyzer);
    if include_flow {
        result.cross_label_flow = Some(compute_cross_label_flow(issues, cfg));
    }
    result
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
