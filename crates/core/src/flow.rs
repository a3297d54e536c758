// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-label blocking pressure on a single label.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::index::IssueIndex;
use crate::issue::Issue;
use crate::scoring::{clamp_score, MAX_SCORE};

/// Score penalty per incoming cross-label dependency.
const INCOMING_PENALTY: i64 = 5;

/// Blocking relationships between one label and the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FlowMetrics {
    /// Blocker label occurrences other than this label, one per edge.
    pub incoming_deps: usize,
    /// Other labels carried by blocked issues of this label, one per edge.
    pub outgoing_deps: usize,
    pub incoming_labels: Vec<String>,
    pub outgoing_labels: Vec<String>,
    /// This label's issues blocked by an issue with a different label.
    pub blocked_by_external: usize,
    /// This label's issues blocking an issue with a different label.
    pub blocking_external: usize,
    /// 0-100, lower means more incoming pressure.
    pub flow_score: i64,
}

impl Default for FlowMetrics {
    fn default() -> Self {
        FlowMetrics {
            incoming_deps: 0,
            outgoing_deps: 0,
            incoming_labels: Vec::new(),
            outgoing_labels: Vec::new(),
            blocked_by_external: 0,
            blocking_external: 0,
            flow_score: MAX_SCORE,
        }
    }
}

fn is_foreign(candidate: &str, label: &str) -> bool {
    !candidate.is_empty() && candidate != label
}

/// Computes flow for `label` over its member issues.
///
/// "Outgoing" counts the blocked issue's own other labels, not the blocker's.
/// Blockers that do not resolve through `index` add nothing to incoming but
/// still count toward outgoing.
pub fn compute_flow_metrics(
    label: &str,
    labeled: &[&Issue],
    index: &IssueIndex<'_>,
) -> FlowMetrics {
    let mut flow = FlowMetrics::default();
    let mut incoming: BTreeSet<&str> = BTreeSet::new();
    let mut outgoing: BTreeSet<&str> = BTreeSet::new();

    for issue in labeled {
        let mut blocked_externally = false;

        for blocker_id in issue.blocker_ids() {
            let blocker_labels = index.labels_for(blocker_id).unwrap_or_default();

            for bl in blocker_labels.iter().filter(|l| is_foreign(l, label)) {
                flow.incoming_deps += 1;
                incoming.insert(bl);
                blocked_externally = true;
            }
            for tl in issue.labels.iter().filter(|l| is_foreign(l, label)) {
                flow.outgoing_deps += 1;
                outgoing.insert(tl);
            }
        }

        if blocked_externally {
            flow.blocked_by_external += 1;
        }

        let blocks_externally = index
            .blocked_by(&issue.id)
            .iter()
            .any(|blocked| blocked.labels.iter().any(|l| is_foreign(l, label)));
        if blocks_externally {
            flow.blocking_external += 1;
        }
    }

    flow.incoming_labels = incoming.into_iter().map(str::to_string).collect();
    flow.outgoing_labels = outgoing.into_iter().map(str::to_string).collect();
    let penalty = i64::try_from(flow.incoming_deps)
        .unwrap_or(i64::MAX)
        .saturating_mul(INCOMING_PENALTY);
    flow.flow_score = clamp_score(MAX_SCORE.saturating_sub(penalty));
    flow
}

#[cfg(test)]
#[path = "flow_tests.rs"]
mod tests;
