// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Throughput and trend over rolling 7/30-day windows.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::issue::Issue;
use crate::scoring::{clamp_score, days_between, MAX_SCORE};

/// Week-over-week change beyond which the trend is no longer stable.
const TREND_THRESHOLD_PERCENT: f64 = 10.0;
/// Score points per closure in the last 30 days.
const POINTS_PER_CLOSURE: i64 = 10;
/// Bonus for an improving trend.
const IMPROVING_BONUS: i64 = 10;

/// Direction of closure throughput versus the previous week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum TrendDirection {
    Improving,
    #[default]
    Stable,
    Declining,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Stable => "stable",
            TrendDirection::Declining => "declining",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Work completion rate for a label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct VelocityMetrics {
    pub closed_last_7_days: usize,
    pub closed_last_30_days: usize,
    /// Mean days from creation to close over every closed issue.
    pub avg_days_to_close: f64,
    pub trend_direction: TrendDirection,
    /// Percent change of this week's closures against last week's.
    pub trend_percent: f64,
    /// 0-100.
    pub velocity_score: i64,
}

/// Computes velocity for a set of issues as of `now`.
///
/// The current week is `(now-7d, ∞)`, the previous week `(now-14d, now-7d)`.
/// Window bounds are exclusive.
pub fn compute_velocity_metrics<'a, I>(issues: I, now: DateTime<Utc>) -> VelocityMetrics
where
    I: IntoIterator<Item = &'a Issue>,
{
    let week_ago = now - Duration::days(7);
    let month_ago = now - Duration::days(30);
    let prev_week_start = now - Duration::days(14);

    let mut closed7 = 0usize;
    let mut closed30 = 0usize;
    let mut current_week = 0i64;
    let mut prev_week = 0i64;
    let mut total_close_days = 0.0;
    let mut close_samples = 0usize;

    for issue in issues {
        let Some(closed_at) = issue.closed_at else {
            continue;
        };
        if closed_at > week_ago {
            closed7 += 1;
        }
        if closed_at > month_ago {
            closed30 += 1;
        }
        if closed_at > prev_week_start && closed_at < week_ago {
            prev_week += 1;
        } else if closed_at > week_ago {
            current_week += 1;
        }
        if let Some(created_at) = issue.created_at {
            total_close_days += days_between(closed_at, created_at);
            close_samples += 1;
        }
    }

    let avg_days_to_close = if close_samples > 0 {
        total_close_days / close_samples as f64
    } else {
        0.0
    };

    let (trend_direction, trend_percent) = if prev_week > 0 {
        let percent = (current_week - prev_week) as f64 / prev_week as f64 * 100.0;
        let direction = if percent > TREND_THRESHOLD_PERCENT {
            TrendDirection::Improving
        } else if percent < -TREND_THRESHOLD_PERCENT {
            TrendDirection::Declining
        } else {
            TrendDirection::Stable
        };
        (direction, percent)
    } else if current_week > 0 {
        (TrendDirection::Improving, 100.0)
    } else {
        (TrendDirection::Stable, 0.0)
    };

    let mut velocity_score = (closed30 as i64)
        .saturating_mul(POINTS_PER_CLOSURE)
        .min(MAX_SCORE);
    if trend_direction == TrendDirection::Improving && velocity_score < MAX_SCORE {
        velocity_score = clamp_score(velocity_score + IMPROVING_BONUS);
    }

    VelocityMetrics {
        closed_last_7_days: closed7,
        closed_last_30_days: closed30,
        avg_days_to_close,
        trend_direction,
        trend_percent,
        velocity_score,
    }
}

#[cfg(test)]
#[path = "velocity_tests.rs"]
mod tests;
