// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::centrality::{CentralityInput, SnapshotAnalyzer};
use chrono::{Duration, TimeZone};
use std::collections::HashMap;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

fn analyzer() -> SnapshotAnalyzer {
    SnapshotAnalyzer::new(CentralityInput {
        pagerank: HashMap::from([("f1".into(), 1.0)]),
        betweenness: HashMap::from([("f1".into(), 1.0)]),
        critical_path: HashMap::new(),
    })
}

fn issues(now: DateTime<Utc>) -> Vec<Issue> {
    vec![
        Issue::new("s1")
            .with_labels(["stale"])
            .updated(now - Duration::days(60)),
        Issue::new("f1")
            .with_labels(["fresh"])
            .created(now - Duration::days(5))
            .updated(now - Duration::days(1))
            .closed(now - Duration::days(1)),
        Issue::new("f2").with_labels(["fresh"]).updated(now),
        Issue::new("m1")
            .with_labels(["mid"])
            .updated(now - Duration::days(7)),
    ]
}

#[test]
fn analysis_empty_collection() {
    let issues: Vec<Issue> = Vec::new();
    let result = compute_all_label_health(
        &issues,
        &LabelHealthConfig::default(),
        fixed_now(),
        &SnapshotAnalyzer::default(),
    );

    assert_eq!(result.total_labels, 0);
    assert!(result.labels.is_empty());
    assert!(result.summaries.is_empty());
    assert!(result.attention_needed.is_empty());
    assert!(result.cross_label_flow.is_none());
    assert_eq!(result.generated_at, fixed_now());
}

#[test]
fn analysis_scores_and_tallies() {
    let now = fixed_now();
    let result = compute_all_label_health(
        &issues(now),
        &LabelHealthConfig::default(),
        now,
        &analyzer(),
    );

    assert_eq!(result.total_labels, 3);
    let detail: Vec<(&str, i64)> = result
        .labels
        .iter()
        .map(|h| (h.label.as_str(), h.health))
        .collect();
    // fresh: (20 + 98 + 100 + 75) / 4, mid: (0 + 75 + 100 + 0) / 4, stale: 100 / 4
    assert_eq!(detail, vec![("fresh", 73), ("mid", 44), ("stale", 25)]);
    assert_eq!(
        (result.healthy_count, result.warning_count, result.critical_count),
        (1, 1, 1)
    );
    assert_eq!(result.attention_needed, vec!["mid", "stale"]);
}

#[test]
fn analysis_summaries_sorted_by_health() {
    let now = fixed_now();
    let result = compute_all_label_health(
        &issues(now),
        &LabelHealthConfig::default(),
        now,
        &analyzer(),
    );

    let order: Vec<&str> = result.summaries.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(order, vec!["fresh", "mid", "stale"]);

    let fresh = &result.summaries[0];
    assert_eq!(fresh.top_issue.as_deref(), Some("f1"));
    assert_eq!(fresh.issue_count, 2);
    assert_eq!(fresh.open_count, 1);
    assert!(!fresh.needs_attention);
    assert!(result.summaries[1].needs_attention);
}

#[test]
fn analysis_summary_ties_break_alphabetically() {
    let issues = vec![
        Issue::new("1").with_labels(["beta"]),
        Issue::new("2").with_labels(["alpha"]),
    ];

    let result = compute_all_label_health(
        &issues,
        &LabelHealthConfig::default(),
        fixed_now(),
        &SnapshotAnalyzer::default(),
    );

    let order: Vec<&str> = result.summaries.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(order, vec!["alpha", "beta"]);
    assert_eq!(result.summaries[0].health, result.summaries[1].health);
}

#[test]
fn analysis_lookup_by_label() {
    let now = fixed_now();
    let result = compute_all_label_health(
        &issues(now),
        &LabelHealthConfig::default(),
        now,
        &analyzer(),
    );

    assert_eq!(result.label("mid").unwrap().issues, vec!["m1"]);
    assert!(result.label("nope").is_none());
}

#[test]
fn analysis_same_result_regardless_of_threads() {
    let now = fixed_now();
    let issues = issues(now);
    let cfg = LabelHealthConfig::default();
    let run = |threads: usize| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap()
            .install(|| compute_all_label_health(&issues, &cfg, now, &analyzer()))
    };

    assert_eq!(run(1), run(4));
}

#[test]
fn analyze_labels_attaches_flow_on_request() {
    let now = fixed_now();
    let issues = vec![
        Issue::new("a").with_labels(["api"]),
        Issue::new("b").with_labels(["ui"]).blocked_by("a"),
    ];
    let cfg = LabelHealthConfig::default();

    let without = analyze_labels(&issues, &cfg, now, &SnapshotAnalyzer::default(), false);
    assert!(without.cross_label_flow.is_none());
    let json = serde_json::to_value(&without).unwrap();
    assert!(json.get("cross_label_flow").is_none());

    let with = analyze_labels(&issues, &cfg, now, &SnapshotAnalyzer::default(), true);
    let flow = with.cross_label_flow.unwrap();
    assert_eq!(flow.total_cross_label_deps, 1);
    assert_eq!(flow.bottleneck_labels, vec!["api"]);
}

#[test]
fn analysis_serializes_stable_field_names() {
    let now = fixed_now();
    let result = compute_all_label_health(
        &issues(now),
        &LabelHealthConfig::default(),
        now,
        &analyzer(),
    );
    let value = serde_json::to_value(&result).unwrap();

    for key in [
        "generated_at",
        "total_labels",
        "healthy_count",
        "warning_count",
        "critical_count",
        "labels",
        "summaries",
        "attention_needed",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["summaries"][0]["health_level"], "healthy");
    assert_eq!(value["summaries"][0]["top_issue"], "f1");
}
