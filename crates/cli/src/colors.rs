// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help and report output.
//!
//! `NO_COLOR=1` disables colors; `COLOR=1` forces them without a TTY.

use std::io::IsTerminal;

use wkh_core::HealthLevel;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers
    pub const HEADER: u8 = 74;
    /// Commands and literals
    pub const LITERAL: u8 = 250;
    /// Placeholders and secondary text
    pub const CONTEXT: u8 = 245;
    pub const HEALTHY: u8 = 114;
    pub const WARNING: u8 = 179;
    pub const CRITICAL: u8 = 167;
}

const RESET: &str = "\x1b[0m";

/// Whether stdout output should carry ANSI colors.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Color code for a health level.
pub fn level_code(level: HealthLevel) -> u8 {
    match level {
        HealthLevel::Healthy => codes::HEALTHY,
        HealthLevel::Warning => codes::WARNING,
        HealthLevel::Critical => codes::CRITICAL,
    }
}

/// Paints `text` in the color of `level` when `enabled`.
pub fn level(text: &str, level: HealthLevel, enabled: bool) -> String {
    if enabled {
        paint(level_code(level), text)
    } else {
        text.to_string()
    }
}

/// Colors an examples block for `after_help`.
///
/// Lines ending in `:` become headers. Example lines split at the first run
/// of two or more spaces into a literal command and a plain description.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                format!("{indent}{}", header(trimmed))
            } else if let Some(split) = trimmed.find("  ") {
                let (cmd, desc) = trimmed.split_at(split);
                format!("{indent}{}{desc}", literal(cmd))
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
