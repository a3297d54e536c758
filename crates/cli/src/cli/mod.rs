// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};

use crate::colors;
use crate::help;

pub use args::InputArgs;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for report commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "wkh")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Label health and cross-label dependency flow for issue exports")]
#[command(help_template = help::template())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Run as if wkh was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score every label
    #[command(after_help = colors::examples("\
Examples:
  wkh health                           Health table for .wok/issues.jsonl
  wkh health -i export.jsonl           Read a specific export
  wkh health --flow -o json            JSON report with cross-label flow
  wkh health --stale-days 7            Stricter staleness"))]
    Health {
        #[command(flatten)]
        input: InputArgs,

        /// Attach the cross-label flow to the report
        #[arg(long)]
        flow: bool,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show health detail for one label
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  wkh label api                        Detail for the api label
  wkh label api -o json                Same, as JSON")
    )]
    Label {
        /// Label to inspect
        #[arg(value_parser = non_empty_string)]
        label: String,

        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show blocking flow between labels
    #[command(after_help = colors::examples("\
Examples:
  wkh flow                             Dependencies and bottlenecks
  wkh flow --include-closed            Count closed issues too
  wkh flow -o json                     Matrix and blocking pairs as JSON"))]
    Flow {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List labels with counts and co-occurrence
    #[command(after_help = colors::examples("\
Examples:
  wkh labels                           Labels by issue count
  wkh labels -o json                   Full catalog as JSON"))]
    Labels {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Output JSON Schema for report output
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  wkh schema health                    Schema for 'wkh health -o json'
  wkh schema flow                      Schema for 'wkh flow -o json'")
    )]
    Schema(SchemaCommand),
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Schema for 'wkh health' JSON output
    Health,
    /// Schema for 'wkh label' JSON output
    Label,
    /// Schema for 'wkh flow' JSON output
    Flow,
    /// Schema for 'wkh labels' JSON output
    Labels,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
