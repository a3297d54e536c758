// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Composite per-label health.
//!
//! A label's health blends four component scores (velocity, freshness, flow
//! and criticality) using the configured weights, then buckets the result
//! into a [`HealthLevel`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::centrality::GraphStats;
use crate::config::{
    LabelHealthConfig, DEFAULT_STALE_THRESHOLD_DAYS, HEALTHY_THRESHOLD, WARNING_THRESHOLD,
};
use crate::criticality::{compute_criticality_metrics, CriticalityMetrics};
use crate::flow::{compute_flow_metrics, FlowMetrics};
use crate::freshness::{compute_freshness_metrics, FreshnessMetrics};
use crate::index::IssueIndex;
use crate::issue::{Issue, Status};
use crate::scoring::{clamp_score, MAX_SCORE};
use crate::velocity::{compute_velocity_metrics, VelocityMetrics};

/// Health bucket for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum HealthLevel {
    Healthy,
    Warning,
    Critical,
}

impl HealthLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthLevel::Healthy => "healthy",
            HealthLevel::Warning => "warning",
            HealthLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for HealthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maps a score to its level: 70 and up is healthy, 40 and up a warning.
pub fn health_level_from_score(score: i64) -> HealthLevel {
    if score >= HEALTHY_THRESHOLD {
        HealthLevel::Healthy
    } else if score >= WARNING_THRESHOLD {
        HealthLevel::Warning
    } else {
        HealthLevel::Critical
    }
}

/// Weighted blend of the four component scores, rounded half up and clamped.
///
/// Weights are used as given, so a set that does not sum to 1.0 skews the
/// result before clamping.
pub fn compute_composite_health(
    velocity: i64,
    freshness: i64,
    flow: i64,
    criticality: i64,
    cfg: &LabelHealthConfig,
) -> i64 {
    let weighted = velocity as f64 * cfg.velocity_weight
        + freshness as f64 * cfg.freshness_weight
        + flow as f64 * cfg.flow_weight
        + criticality as f64 * cfg.criticality_weight;

    clamp_score((weighted + 0.5) as i64)
}

/// Health report for one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct LabelHealth {
    pub label: String,
    /// Distinct issues carrying the label.
    pub issue_count: usize,
    /// Open and in-progress issues.
    pub open_count: usize,
    pub closed_count: usize,
    pub blocked_count: usize,
    /// Composite score, 0-100.
    pub health: i64,
    pub health_level: HealthLevel,
    pub velocity: VelocityMetrics,
    pub freshness: FreshnessMetrics,
    pub flow: FlowMetrics,
    pub criticality: CriticalityMetrics,
    /// Member issue IDs in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
}

impl LabelHealth {
    /// A neutral report with every component at its starting value.
    pub fn new(label: impl Into<String>) -> Self {
        LabelHealth {
            label: label.into(),
            issue_count: 0,
            open_count: 0,
            closed_count: 0,
            blocked_count: 0,
            health: MAX_SCORE,
            health_level: HealthLevel::Healthy,
            velocity: VelocityMetrics {
                velocity_score: MAX_SCORE,
                ..Default::default()
            },
            freshness: FreshnessMetrics {
                stale_threshold_days: DEFAULT_STALE_THRESHOLD_DAYS,
                freshness_score: MAX_SCORE,
                ..Default::default()
            },
            flow: FlowMetrics::default(),
            criticality: CriticalityMetrics::default(),
            issues: Vec::new(),
        }
    }

    /// True when health falls below the healthy threshold.
    pub fn needs_attention(&self) -> bool {
        needs_attention(self)
    }
}

/// True when `health` falls below the healthy threshold.
pub fn needs_attention(health: &LabelHealth) -> bool {
    health.health < HEALTHY_THRESHOLD
}

/// Computes health for `label` against the full issue collection.
pub fn compute_label_health(
    label: &str,
    issues: &[Issue],
    cfg: &LabelHealthConfig,
    now: DateTime<Utc>,
    stats: &dyn GraphStats,
) -> LabelHealth {
    let index = IssueIndex::new(issues);
    compute_label_health_indexed(label, issues, &index, cfg, now, stats)
}

/// Like [`compute_label_health`], reusing a prebuilt index of `issues`.
pub fn compute_label_health_indexed(
    label: &str,
    issues: &[Issue],
    index: &IssueIndex<'_>,
    cfg: &LabelHealthConfig,
    now: DateTime<Utc>,
    stats: &dyn GraphStats,
) -> LabelHealth {
    let mut health = LabelHealth::new(label);

    let labeled: Vec<&Issue> = issues.iter().filter(|i| i.has_label(label)).collect();
    if labeled.is_empty() {
        health.health = 0;
        health.health_level = HealthLevel::Critical;
        return health;
    }

    health.issue_count = labeled.len();
    health.issues = labeled.iter().map(|i| i.id.clone()).collect();
    for issue in &labeled {
        match issue.status {
            Status::Closed => health.closed_count += 1,
            Status::Blocked => health.blocked_count += 1,
            Status::Open | Status::InProgress => health.open_count += 1,
        }
    }

    let velocity = compute_velocity_metrics(labeled.iter().copied(), now);
    let freshness =
        compute_freshness_metrics(labeled.iter().copied(), now, cfg.stale_threshold_days);
    let flow = compute_flow_metrics(label, &labeled, index);
    let criticality = compute_criticality_metrics(&labeled, stats);

    health.health = compute_composite_health(
        velocity.velocity_score,
        freshness.freshness_score,
        flow.flow_score,
        criticality.criticality_score,
        cfg,
    );
    health.health_level = health_level_from_score(health.health);
    health.velocity = velocity;
    health.freshness = freshness;
    health.flow = flow;
    health.criticality = criticality;
    health
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;
