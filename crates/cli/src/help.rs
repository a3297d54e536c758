// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help layout and styling.

use anstyle::{Ansi256Color, Color, Style};
use clap::builder::styling::Styles;

use crate::colors;

fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

/// clap styles matching the report colors, or plain when colors are off.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    let header = fg(colors::codes::HEADER);
    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

/// Top-level help template with the command list ahead of options.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{}
{{subcommands}}
{}
{{options}}{{after-help}}",
        colors::header("Commands:"),
        colors::header("Options:")
    )
}

/// Short walkthrough shown after the main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Quickstart:
  wkh health                         Score every label
  wkh health --flow -o json          Full report with cross-label flow
  wkh label api                      Detail for one label
  wkh flow                           Which labels block which
  wkh labels                         Label catalog and co-occurrence",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
