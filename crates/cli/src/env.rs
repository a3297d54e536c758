// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by `wkh`.
//!
//! Names are generated by `build.rs` into [`vars`].

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Log filter directives from `WKH_LOG`, if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::WKH_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Returns `true` if `WKH_TIMINGS` is set (any value).
pub fn timings() -> bool {
    std::env::var(vars::WKH_TIMINGS).is_ok()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
