// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Small numeric helpers shared by the metric computers.

use chrono::{DateTime, Utc};

/// Upper bound of every score.
pub const MAX_SCORE: i64 = 100;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Clamps a score into `[0, 100]`.
pub fn clamp_score(v: i64) -> i64 {
    v.clamp(0, MAX_SCORE)
}

/// Fractional days from `earlier` to `later` (negative if reversed).
pub fn days_between(later: DateTime<Utc>, earlier: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / MILLIS_PER_DAY
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod tests;
