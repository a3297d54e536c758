// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn flow_json_counts_cross_label_edges() {
    let temp = project_with(FLOW_EXAMPLE);

    let json = json_output(temp.path(), &["flow", "-o", "json"]);

    assert_eq!(json["labels"], serde_json::json!(["api", "core", "ui"]));
    assert_eq!(json["total_cross_label_deps"], 4);
    assert_eq!(json["bottleneck_labels"], serde_json::json!(["api"]));
    assert_eq!(json["critical_paths"], serde_json::json!([]));

    // rows are blockers, columns are blocked: api, core, ui
    assert_eq!(
        json["flow_matrix"],
        serde_json::json!([[0, 1, 2], [0, 0, 1], [0, 0, 0]])
    );

    // sorted by from label, then to label
    let deps = json["dependencies"].as_array().unwrap();
    let edges: Vec<(&str, &str, u64)> = deps
        .iter()
        .map(|d| {
            (
                d["from_label"].as_str().unwrap(),
                d["to_label"].as_str().unwrap(),
                d["issue_count"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        edges,
        vec![("api", "core", 1), ("api", "ui", 2), ("core", "ui", 1)]
    );
    assert_eq!(deps[1]["issue_ids"], serde_json::json!(["B", "D"]));
}

#[test]
fn flow_closed_issues_need_flag() {
    let issues = r#"{"id":"A","status":"open","labels":["api"]}
{"id":"B","status":"closed","labels":["ui"],"dependencies":[{"depends_on_id":"A","type":"blocks"}]}
"#;
    let temp = project_with(issues);

    let json = json_output(temp.path(), &["flow", "-o", "json"]);
    assert_eq!(json["total_cross_label_deps"], 0);

    let json = json_output(temp.path(), &["flow", "-o", "json", "--include-closed"]);
    assert_eq!(json["total_cross_label_deps"], 1);
}

#[test]
fn flow_text_output() {
    let temp = project_with(FLOW_EXAMPLE);

    wkh()
        .args(["flow"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Cross-label dependencies: 4"))
        .stdout(predicate::str::contains("api -> ui"))
        .stdout(predicate::str::contains("Bottlenecks: api"));
}

#[test]
fn flow_without_dependencies() {
    let temp = project_with(r#"{"id":"A","labels":["api"]}"#);

    wkh()
        .args(["flow"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No cross-label dependencies"));
}
