// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tunable thresholds and weights for label health.
//!
//! Weights are applied exactly as given. Nothing here validates that they sum
//! to 1.0 or enforces `min_issues_for_health`; out-of-range settings simply
//! shift scores before clamping.

use serde::{Deserialize, Serialize};

/// Days without an update before an issue counts as stale.
pub const DEFAULT_STALE_THRESHOLD_DAYS: i64 = 14;
/// Minimum health score for the healthy level.
pub const HEALTHY_THRESHOLD: i64 = 70;
/// Minimum health score for the warning level.
pub const WARNING_THRESHOLD: i64 = 40;
/// Default weight of each of the four components.
pub const DEFAULT_COMPONENT_WEIGHT: f64 = 0.25;

fn default_stale_threshold_days() -> i64 {
    DEFAULT_STALE_THRESHOLD_DAYS
}

fn default_weight() -> f64 {
    DEFAULT_COMPONENT_WEIGHT
}

fn default_min_issues() -> usize {
    1
}

/// Configuration for label health computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct LabelHealthConfig {
    /// Days since last update at which an issue is stale.
    #[serde(default = "default_stale_threshold_days")]
    pub stale_threshold_days: i64,
    /// Weight of the velocity component.
    #[serde(default = "default_weight")]
    pub velocity_weight: f64,
    /// Weight of the freshness component.
    #[serde(default = "default_weight")]
    pub freshness_weight: f64,
    /// Weight of the flow component.
    #[serde(default = "default_weight")]
    pub flow_weight: f64,
    /// Weight of the criticality component.
    #[serde(default = "default_weight")]
    pub criticality_weight: f64,
    /// Minimum issues for a label to be scored (informational only).
    #[serde(default = "default_min_issues")]
    pub min_issues_for_health: usize,
    /// Count closed issues in cross-label flow.
    #[serde(default)]
    pub include_closed_in_flow: bool,
}

impl Default for LabelHealthConfig {
    fn default() -> Self {
        LabelHealthConfig {
            stale_threshold_days: DEFAULT_STALE_THRESHOLD_DAYS,
            velocity_weight: DEFAULT_COMPONENT_WEIGHT,
            freshness_weight: DEFAULT_COMPONENT_WEIGHT,
            flow_weight: DEFAULT_COMPONENT_WEIGHT,
            criticality_weight: DEFAULT_COMPONENT_WEIGHT,
            min_issues_for_health: 1,
            include_closed_in_flow: false,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
