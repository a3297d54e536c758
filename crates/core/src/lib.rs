// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wkh-core: label health and cross-label flow analysis.
//!
//! Groups issues by label and scores each group on velocity, freshness,
//! blocking flow and graph criticality. Also builds a label-to-label matrix
//! of blocking dependencies. The computations are pure functions over an
//! in-memory issue collection; centrality values come in through
//! [`GraphAnalyzer`].

pub mod analysis;
pub mod catalog;
pub mod centrality;
pub mod config;
pub mod criticality;
pub mod cross_flow;
pub mod error;
pub mod flow;
pub mod freshness;
pub mod health;
pub mod index;
pub mod issue;
pub mod jsonl;
pub mod scoring;
pub mod velocity;

pub use analysis::{analyze_labels, compute_all_label_health, LabelAnalysisResult, LabelSummary};
pub use catalog::{
    compute_blocked_by_label, extract_labels, get_common_labels, get_label_cooccurrence,
    get_label_issues, get_labels_for_issue, sort_labels_by_count, LabelExtractionResult,
    LabelStats,
};
pub use centrality::{
    CentralityInput, CentralitySnapshot, GraphAnalyzer, GraphStats, SnapshotAnalyzer,
};
pub use config::LabelHealthConfig;
pub use criticality::{compute_criticality_metrics, CriticalityMetrics};
pub use cross_flow::{
    compute_cross_label_flow, BlockingPair, CrossLabelFlow, LabelDependency, LabelPath,
};
pub use error::{Error, Result};
pub use flow::{compute_flow_metrics, FlowMetrics};
pub use freshness::{compute_freshness_metrics, FreshnessMetrics};
pub use health::{
    compute_composite_health, compute_label_health, health_level_from_score, needs_attention,
    HealthLevel, LabelHealth,
};
pub use index::IssueIndex;
pub use issue::{Dependency, DependencyType, Issue, Status};
pub use velocity::{compute_velocity_metrics, TrendDirection, VelocityMetrics};
