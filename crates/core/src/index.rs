// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ID lookups over an issue slice.

use std::collections::HashMap;

use crate::issue::Issue;

/// Borrowed lookup tables built once per run.
///
/// When IDs repeat, the first issue with a given ID wins.
#[derive(Debug, Default)]
pub struct IssueIndex<'a> {
    by_id: HashMap<&'a str, &'a Issue>,
    blocks: HashMap<&'a str, Vec<&'a Issue>>,
}

impl<'a> IssueIndex<'a> {
    pub fn new(issues: &'a [Issue]) -> Self {
        let mut by_id = HashMap::with_capacity(issues.len());
        let mut blocks: HashMap<&'a str, Vec<&'a Issue>> = HashMap::new();

        for issue in issues {
            by_id.entry(issue.id.as_str()).or_insert(issue);
            for blocker_id in issue.blocker_ids() {
                blocks.entry(blocker_id).or_default().push(issue);
            }
        }

        IssueIndex { by_id, blocks }
    }

    /// The issue with `id`, if present.
    pub fn get(&self, id: &str) -> Option<&'a Issue> {
        self.by_id.get(id).copied()
    }

    /// Labels of the issue with `id`, if present.
    pub fn labels_for(&self, id: &str) -> Option<&'a [String]> {
        self.get(id).map(|i| i.labels.as_slice())
    }

    /// Issues that list `blocker_id` as a `blocks` dependency.
    pub fn blocked_by(&self, blocker_id: &str) -> &[&'a Issue] {
        self.blocks.get(blocker_id).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
