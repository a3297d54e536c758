// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use wkh_core::compute_cross_label_flow;

use super::{load_inputs, print_json, print_lines};
use crate::cli::{InputArgs, OutputFormat};
use crate::display::format_flow;
use crate::error::Result;
use crate::time_phase;

pub fn run(input: &InputArgs, output: OutputFormat) -> Result<()> {
    let inputs = load_inputs(input)?;
    let flow = time_phase!(
        "analyze::flow",
        compute_cross_label_flow(&inputs.issues, &inputs.config)
    );

    match output {
        OutputFormat::Json => print_json(&flow)?,
        OutputFormat::Text => print_lines(&format_flow(&flow)),
    }
    Ok(())
}
