// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Label importance from graph centrality.

use serde::{Deserialize, Serialize};

use crate::centrality::{max_score, GraphStats};
use crate::issue::Issue;
use crate::scoring::clamp_score;

/// Half of the score comes from PageRank, half from betweenness.
const TERM_WEIGHT: f64 = 50.0;
/// Score when no centrality has been computed.
pub const NEUTRAL_CRITICALITY: i64 = 50;

/// How central a label's issues are in the dependency graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CriticalityMetrics {
    pub avg_pagerank: f64,
    pub avg_betweenness: f64,
    /// Highest betweenness among the label's issues.
    pub max_betweenness: f64,
    /// Issues on a critical path.
    pub critical_path_count: usize,
    /// Issues with positive betweenness.
    pub bottleneck_count: usize,
    /// 0-100.
    pub criticality_score: i64,
}

impl Default for CriticalityMetrics {
    fn default() -> Self {
        CriticalityMetrics {
            avg_pagerank: 0.0,
            avg_betweenness: 0.0,
            max_betweenness: 0.0,
            critical_path_count: 0,
            bottleneck_count: 0,
            criticality_score: NEUTRAL_CRITICALITY,
        }
    }
}

/// Aggregates centrality over `labeled`, normalized by the maxima across
/// every issue in `stats`.
pub fn compute_criticality_metrics(
    labeled: &[&Issue],
    stats: &dyn GraphStats,
) -> CriticalityMetrics {
    let pagerank = stats.pagerank();
    let betweenness = stats.betweenness();
    let max_pr = max_score(pagerank);
    let max_bw = max_score(betweenness);

    let mut pr_sum = 0.0;
    let mut bw_sum = 0.0;
    let mut max_bw_label: f64 = 0.0;
    let mut critical_path_count = 0;
    let mut bottleneck_count = 0;

    for issue in labeled {
        pr_sum += pagerank.get(&issue.id).copied().unwrap_or(0.0);
        let bw = betweenness.get(&issue.id).copied().unwrap_or(0.0);
        bw_sum += bw;
        max_bw_label = max_bw_label.max(bw);
        if stats.critical_path_score(&issue.id) > 0.0 {
            critical_path_count += 1;
        }
        if bw > 0.0 {
            bottleneck_count += 1;
        }
    }

    let (avg_pr, avg_bw) = if labeled.is_empty() {
        (0.0, 0.0)
    } else {
        let n = labeled.len() as f64;
        (pr_sum / n, bw_sum / n)
    };

    // Each term truncates on its own before summing.
    let mut score = 0i64;
    if max_pr > 0.0 {
        score += (avg_pr / max_pr * TERM_WEIGHT) as i64;
    }
    if max_bw > 0.0 {
        score += (max_bw_label / max_bw * TERM_WEIGHT) as i64;
    }

    CriticalityMetrics {
        avg_pagerank: avg_pr,
        avg_betweenness: avg_bw,
        max_betweenness: max_bw_label,
        critical_path_count,
        bottleneck_count,
        criticality_score: clamp_score(score),
    }
}

#[cfg(test)]
#[path = "criticality_tests.rs"]
mod tests;
