// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wkhrs: the library behind the `wkh` command.
//!
//! `wkh` reads a JSON Lines issue export and reports label health and
//! cross-label dependency flow, computed by [`wkh_core`].
//!
//! # Inputs
//!
//! - Issues: `--issues <path>` (`-` for stdin), else `[input] issues` from the
//!   config, else `.wok/issues.jsonl` found by walking up from the current
//!   directory.
//! - Centrality: `--centrality <path>`, else config, else
//!   `.wok/centrality.json` when present. Without it criticality scores are 0.
//! - Config: `--config <path>`, else `.wok/health.toml`. See [`config`].
//!
//! ```rust,ignore
//! use clap::Parser;
//! use wkhrs::{run_cli, Cli};
//!
//! run_cli(Cli::parse())?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod logging;
mod schema;
pub mod timings;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, InputArgs, OutputFormat, SchemaCommand};
pub use config::{find_work_dir, Config};
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Health {
            input,
            flow,
            output,
        } => commands::health::run(&input, flow, output),
        Command::Label {
            label,
            input,
            output,
        } => commands::label::run(&label, &input, output),
        Command::Flow { input, output } => commands::flow::run(&input, output),
        Command::Labels { input, output } => commands::labels::run(&input, output),
        Command::Schema(cmd) => commands::schema::run(cmd),
    }
}

/// Applies global options, then runs the command.
pub fn run_cli(cli: Cli) -> Result<()> {
    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir)?;
    }
    run(cli.command)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
