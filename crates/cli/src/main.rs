// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use wkhrs::Cli;

fn main() {
    let cli = Cli::parse();
    wkhrs::logging::setup_logging();
    if let Err(e) = wkhrs::run_cli(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
