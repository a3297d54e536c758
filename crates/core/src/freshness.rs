// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Staleness scoring from update recency.
//!
//! The score decays linearly from 100 (everything updated just now) to 0 when
//! the average time since update reaches twice the stale threshold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_STALE_THRESHOLD_DAYS;
use crate::issue::Issue;
use crate::scoring::{clamp_score, days_between};

/// How recently a label's issues have been touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FreshnessMetrics {
    /// Latest `updated_at` across all issues.
    pub most_recent_update: Option<DateTime<Utc>>,
    /// Earliest `created_at` among non-closed issues.
    pub oldest_open_issue: Option<DateTime<Utc>>,
    pub avg_days_since_update: f64,
    /// Issues whose days since update meet or exceed the threshold.
    pub stale_count: usize,
    /// The threshold actually applied.
    pub stale_threshold_days: i64,
    /// 0-100, higher is fresher.
    pub freshness_score: i64,
}

/// Computes freshness as of `now`. A non-positive `stale_days` falls back to
/// the default threshold.
pub fn compute_freshness_metrics<'a, I>(
    issues: I,
    now: DateTime<Utc>,
    stale_days: i64,
) -> FreshnessMetrics
where
    I: IntoIterator<Item = &'a Issue>,
{
    let stale_days = if stale_days <= 0 {
        DEFAULT_STALE_THRESHOLD_DAYS
    } else {
        stale_days
    };
    let threshold = stale_days as f64;

    let mut most_recent: Option<DateTime<Utc>> = None;
    let mut oldest_open: Option<DateTime<Utc>> = None;
    let mut total_staleness = 0.0;
    let mut count = 0usize;
    let mut stale_count = 0usize;

    for issue in issues {
        if let Some(updated_at) = issue.updated_at {
            if most_recent.map_or(true, |m| updated_at > m) {
                most_recent = Some(updated_at);
            }

            let days = days_between(now, updated_at);
            total_staleness += days;
            count += 1;
            if days >= threshold {
                stale_count += 1;
            }
        }

        if !issue.is_closed() {
            if let Some(created_at) = issue.created_at {
                if oldest_open.map_or(true, |o| created_at < o) {
                    oldest_open = Some(created_at);
                }
            }
        }
    }

    let avg_staleness = if count > 0 {
        total_staleness / count as f64
    } else {
        0.0
    };
    let decayed = (100.0 - (avg_staleness / (threshold * 2.0)) * 100.0).max(0.0);

    FreshnessMetrics {
        most_recent_update: most_recent,
        oldest_open_issue: oldest_open,
        avg_days_since_update: avg_staleness,
        stale_count,
        stale_threshold_days: stale_days,
        freshness_score: clamp_score(decayed as i64),
    }
}

#[cfg(test)]
#[path = "freshness_tests.rs"]
mod tests;
