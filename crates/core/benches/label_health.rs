// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for full label analysis and cross-label flow.

use chrono::{Duration, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use wkh_core::{
    compute_all_label_health, compute_cross_label_flow, Issue, LabelHealthConfig, SnapshotAnalyzer,
};

const LABELS: &[&str] = &["api", "ui", "core", "docs", "infra", "auth", "billing", "search"];

/// Issues with two labels each, every third one blocked by its predecessor.
fn synthetic_issues(count: usize) -> Vec<Issue> {
    let now = Utc::now();
    (0..count)
        .map(|i| {
            let mut issue = Issue::new(format!("issue-{i}"))
                .with_labels([LABELS[i % LABELS.len()], LABELS[(i / 3) % LABELS.len()]])
                .created(now - Duration::days((i % 60) as i64 + 1))
                .updated(now - Duration::days((i % 20) as i64));
            if i % 3 == 0 && i > 0 {
                issue = issue.blocked_by(format!("issue-{}", i - 1));
            }
            if i % 5 == 0 {
                issue = issue.closed(now - Duration::days((i % 14) as i64));
            }
            issue
        })
        .collect()
}

fn label_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_analysis");
    let cfg = LabelHealthConfig::default();
    let analyzer = SnapshotAnalyzer::default();

    for size in [100, 1_000, 10_000] {
        let issues = synthetic_issues(size);
        group.bench_with_input(BenchmarkId::new("all_label_health", size), &issues, |b, i| {
            b.iter(|| compute_all_label_health(i, &cfg, Utc::now(), &analyzer))
        });
        group.bench_with_input(BenchmarkId::new("cross_label_flow", size), &issues, |b, i| {
            b.iter(|| compute_cross_label_flow(i, &cfg))
        });
    }
    group.finish();
}

criterion_group!(benches, label_analysis);
criterion_main!(benches);
