// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    health = { SchemaCommand::Health, "LabelAnalysisResult", "attention_needed" },
    label = { SchemaCommand::Label, "LabelHealth", "blocked_count" },
    flow = { SchemaCommand::Flow, "CrossLabelFlow", "bottleneck_labels" },
    labels = { SchemaCommand::Labels, "LabelsOutputJson", "blocked_by_label" },
)]
fn schema_names_type_and_fields(cmd: SchemaCommand, title: &str, field: &str) {
    let json = serde_json::to_string(&schema(cmd)).unwrap();

    assert!(json.contains("\"$schema\""));
    assert!(json.contains(&format!("\"{title}\"")));
    assert!(json.contains(&format!("\"{field}\"")));
}

#[test]
fn health_schema_includes_nested_types() {
    let json = serde_json::to_string(&schema(SchemaCommand::Health)).unwrap();

    for nested in ["LabelSummary", "VelocityMetrics", "HealthLevel", "CrossLabelFlow"] {
        assert!(json.contains(nested), "missing {nested}");
    }
}

#[test]
fn labels_schema_flattens_catalog() {
    let json = serde_json::to_string(&schema(SchemaCommand::Labels)).unwrap();
    assert!(json.contains("\"top_labels\""));
    assert!(json.contains("\"unlabeled_count\""));
}
