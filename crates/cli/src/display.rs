// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for reports.
//!
//! Every function returns lines rather than printing so output can be tested
//! without a terminal.

use std::collections::BTreeMap;

use wkh_core::{CrossLabelFlow, LabelAnalysisResult, LabelExtractionResult, LabelHealth};

use crate::colors;

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(str::len).max().unwrap_or(0)
}

/// Health table: one row per label, best first.
pub fn format_health_table(result: &LabelAnalysisResult, color: bool) -> Vec<String> {
    if result.summaries.is_empty() {
        return vec!["No labels found".to_string()];
    }

    let mut lines = vec![format!(
        "Labels: {} ({} healthy, {} warning, {} critical)",
        result.total_labels, result.healthy_count, result.warning_count, result.critical_count
    )];

    let width = label_width(result.summaries.iter().map(|s| s.label.as_str()));
    for s in &result.summaries {
        let level = format!("{:<8}", s.health_level.as_str());
        lines.push(format!(
            "  {:<width$}  {:>3}  {}  {}/{} open",
            s.label,
            s.health,
            colors::level(&level, s.health_level, color),
            s.open_count,
            s.issue_count,
        ));
    }

    if !result.attention_needed.is_empty() {
        lines.push(String::new());
        lines.push(format!("Needs attention: {}", result.attention_needed.join(", ")));
    }

    lines
}

fn list_or_none(labels: &[String]) -> String {
    if labels.is_empty() {
        "none".to_string()
    } else {
        labels.join(", ")
    }
}

/// Component breakdown for one label.
pub fn format_label_detail(h: &LabelHealth, color: bool) -> Vec<String> {
    let v = &h.velocity;
    let f = &h.freshness;
    let fl = &h.flow;
    let c = &h.criticality;

    vec![
        format!(
            "{}: {} ({})",
            h.label,
            h.health,
            colors::level(h.health_level.as_str(), h.health_level, color)
        ),
        format!(
            "  Issues:      {} ({} open, {} blocked, {} closed)",
            h.issue_count, h.open_count, h.blocked_count, h.closed_count
        ),
        format!(
            "  Velocity:    {:<3}  {} closed in 7d, {} in 30d, trend {} ({:+.0}%)",
            v.velocity_score,
            v.closed_last_7_days,
            v.closed_last_30_days,
            v.trend_direction,
            v.trend_percent
        ),
        format!(
            "  Freshness:   {:<3}  avg {:.1} days since update, {} stale at {}d",
            f.freshness_score, f.avg_days_since_update, f.stale_count, f.stale_threshold_days
        ),
        format!(
            "  Flow:        {:<3}  {} incoming from {}, {} outgoing to {}",
            fl.flow_score,
            fl.incoming_deps,
            list_or_none(&fl.incoming_labels),
            fl.outgoing_deps,
            list_or_none(&fl.outgoing_labels)
        ),
        format!(
            "  Criticality: {:<3}  avg pagerank {:.3}, {} on critical path, {} bottlenecks",
            c.criticality_score, c.avg_pagerank, c.critical_path_count, c.bottleneck_count
        ),
    ]
}

/// Dependency list and bottlenecks.
pub fn format_flow(flow: &CrossLabelFlow) -> Vec<String> {
    if flow.dependencies.is_empty() {
        return vec!["No cross-label dependencies".to_string()];
    }

    let mut lines = vec![format!(
        "Cross-label dependencies: {}",
        flow.total_cross_label_deps
    )];

    let edges: Vec<String> = flow
        .dependencies
        .iter()
        .map(|d| format!("{} -> {}", d.from_label, d.to_label))
        .collect();
    let width = label_width(edges.iter().map(String::as_str));
    for (edge, dep) in edges.iter().zip(&flow.dependencies) {
        lines.push(format!("  {:<width$}  {}", edge, dep.issue_count));
    }

    lines.push(format!("Bottlenecks: {}", list_or_none(&flow.bottleneck_labels)));
    lines
}

/// Catalog rows by issue count.
pub fn format_labels(
    catalog: &LabelExtractionResult,
    blocked: &BTreeMap<String, usize>,
) -> Vec<String> {
    if catalog.labels.is_empty() {
        return vec!["No labels found".to_string()];
    }

    let mut lines = vec![format!(
        "Labels: {} across {} issues ({} unlabeled)",
        catalog.label_count, catalog.issue_count, catalog.unlabeled_count
    )];

    let width = label_width(catalog.top_labels.iter().map(String::as_str));
    for label in &catalog.top_labels {
        let Some(stats) = catalog.stats.get(label) else {
            continue;
        };
        let mut row = format!(
            "  {:<width$}  {:>3}  ({} open, {} in progress, {} closed)",
            label, stats.total_count, stats.open_count, stats.in_progress, stats.closed_count
        );
        if let Some(n) = blocked.get(label).filter(|n| **n > 0) {
            row.push_str(&format!(", {n} blocked"));
        }
        lines.push(row);
    }

    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
