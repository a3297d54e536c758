// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn default_config_values() {
    let cfg = LabelHealthConfig::default();
    assert_eq!(cfg.stale_threshold_days, 14);
    assert_eq!(cfg.min_issues_for_health, 1);
    assert!(!cfg.include_closed_in_flow);
    assert_eq!(cfg.velocity_weight, 0.25);
    assert_eq!(cfg.criticality_weight, 0.25);
}

#[test]
fn partial_json_fills_defaults() {
    let cfg: LabelHealthConfig =
        serde_json::from_str(r#"{"stale_threshold_days": 7, "flow_weight": 0.5}"#).unwrap();
    assert_eq!(cfg.stale_threshold_days, 7);
    assert_eq!(cfg.flow_weight, 0.5);
    assert_eq!(cfg.velocity_weight, DEFAULT_COMPONENT_WEIGHT);
    assert_eq!(cfg.min_issues_for_health, 1);
}

#[test]
fn unnormalized_weights_are_kept() {
    let cfg: LabelHealthConfig =
        serde_json::from_str(r#"{"velocity_weight": 1.0, "freshness_weight": 1.0}"#).unwrap();
    assert_eq!(cfg.velocity_weight, 1.0);
    assert_eq!(cfg.freshness_weight, 1.0);
    assert_eq!(cfg.flow_weight, DEFAULT_COMPONENT_WEIGHT);
}
