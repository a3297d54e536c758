// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr, filtered by `WKH_LOG`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::env;

/// Filter used when `WKH_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `WKH_LOG`. Returns the rejected directives when
/// they do not parse.
pub fn filter_from(directives: Option<&str>) -> (EnvFilter, Option<String>) {
    match directives {
        Some(d) => match EnvFilter::try_new(d) {
            Ok(filter) => (filter, None),
            Err(_) => (EnvFilter::new(DEFAULT_FILTER), Some(d.to_string())),
        },
        None => (EnvFilter::new(DEFAULT_FILTER), None),
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn setup_logging() {
    let directives = env::log_filter();
    let (filter, rejected) = filter_from(directives.as_deref());

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal() && !env::no_color())
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        if let Some(bad) = rejected {
            tracing::warn!(directives = %bad, "ignoring invalid WKH_LOG");
        }
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
