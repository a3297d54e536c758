// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::Duration;
use yare::parameterized;

#[parameterized(
    below = { -5, 0 },
    zero = { 0, 0 },
    middle = { 55, 55 },
    top = { 100, 100 },
    above = { 140, 100 },
)]
fn clamp_score_bounds(input: i64, expected: i64) {
    assert_eq!(clamp_score(input), expected);
}

#[test]
fn days_between_fractional() {
    let now = Utc::now();
    let earlier = now - Duration::hours(36);
    assert!((days_between(now, earlier) - 1.5).abs() < 1e-9);
    assert!((days_between(earlier, now) + 1.5).abs() < 1e-9);
}
