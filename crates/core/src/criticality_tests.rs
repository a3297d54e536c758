// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::centrality::{CentralityInput, CentralitySnapshot};
use std::collections::HashMap;

fn snapshot(
    pagerank: &[(&str, f64)],
    betweenness: &[(&str, f64)],
    critical: &[&str],
) -> CentralitySnapshot {
    let to_map = |pairs: &[(&str, f64)]| -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    };
    let input = CentralityInput {
        pagerank: to_map(pagerank),
        betweenness: to_map(betweenness),
        critical_path: critical.iter().map(|k| (k.to_string(), 1.0)).collect(),
    };
    CentralitySnapshot::new(input, &[])
}

fn ids(ids: &[&str]) -> Vec<Issue> {
    ids.iter().map(|id| Issue::new(*id)).collect()
}

#[test]
fn criticality_most_central_issue_scores_full() {
    let stats = snapshot(&[("a", 0.6), ("b", 0.4)], &[("a", 2.0), ("b", 1.0)], &["b"]);
    let issues = ids(&["a"]);
    let labeled: Vec<&Issue> = issues.iter().collect();

    let c = compute_criticality_metrics(&labeled, &stats);

    assert_eq!(c.criticality_score, 100);
    assert_eq!(c.bottleneck_count, 1);
    assert_eq!(c.critical_path_count, 0);
    assert_eq!(c.max_betweenness, 2.0);
}

#[test]
fn criticality_normalizes_against_global_maxima() {
    let stats = snapshot(&[("a", 0.6), ("b", 0.4)], &[("a", 2.0), ("b", 1.0)], &["b"]);
    let issues = ids(&["a", "b"]);
    let labeled: Vec<&Issue> = issues.iter().collect();

    let c = compute_criticality_metrics(&labeled, &stats);

    assert!((c.avg_pagerank - 0.5).abs() < 1e-9);
    assert!((c.avg_betweenness - 1.5).abs() < 1e-9);
    assert_eq!(c.critical_path_count, 1);
    assert_eq!(c.bottleneck_count, 2);
    // 41.67 -> 41, plus 50
    assert_eq!(c.criticality_score, 91);
}

#[test]
fn criticality_truncates_each_term() {
    let stats = snapshot(&[("a", 1.0), ("b", 0.69)], &[("a", 1.0), ("b", 0.69)], &[]);
    let issues = ids(&["b"]);
    let labeled: Vec<&Issue> = issues.iter().collect();

    let c = compute_criticality_metrics(&labeled, &stats);

    assert_eq!(c.criticality_score, 68);
}

#[test]
fn criticality_without_centrality_is_zero() {
    let stats = snapshot(&[], &[], &[]);
    let issues = ids(&["a", "b"]);
    let labeled: Vec<&Issue> = issues.iter().collect();

    let c = compute_criticality_metrics(&labeled, &stats);

    assert_eq!(c.criticality_score, 0);
    assert_eq!(c.avg_pagerank, 0.0);
    assert_eq!(c.bottleneck_count, 0);
}

#[test]
fn criticality_unknown_ids_count_as_zero() {
    let stats = snapshot(&[("a", 1.0)], &[("a", 4.0)], &[]);
    let issues = ids(&["a", "ghost"]);
    let labeled: Vec<&Issue> = issues.iter().collect();

    let c = compute_criticality_metrics(&labeled, &stats);

    assert!((c.avg_pagerank - 0.5).abs() < 1e-9);
    assert_eq!(c.max_betweenness, 4.0);
    assert_eq!(c.criticality_score, 75);
}

#[test]
fn criticality_default_is_neutral() {
    assert_eq!(CriticalityMetrics::default().criticality_score, NEUTRAL_CRITICALITY);
}
