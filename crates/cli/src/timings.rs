// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phase timings on stderr, enabled by `WKH_TIMINGS`.
//!
//! Lines look like `[timings] load::issues 12ms`.

use std::time::Instant;

use crate::env;

/// Prints the elapsed time for `phase` when timings are enabled.
#[inline]
pub fn print_timing(phase: &str, start: Instant) {
    if env::timings() {
        eprintln!("[timings] {} {}ms", phase, start.elapsed().as_millis());
    }
    tracing::debug!(phase, elapsed_ms = start.elapsed().as_millis() as u64, "phase complete");
}

/// Times a block, reporting it under `$phase`.
///
/// ```rust,ignore
/// let issues = time_phase!("load::issues", load_issues_from_path(&path))?;
/// ```
#[macro_export]
macro_rules! time_phase {
    ($phase:expr, $block:expr) => {{
        let __start = std::time::Instant::now();
        let __result = $block;
        $crate::timings::print_timing($phase, __start);
        __result
    }};
}
