// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use wkh_core::analyze_labels;

use super::{load_inputs, print_json, print_lines};
use crate::cli::{InputArgs, OutputFormat};
use crate::colors;
use crate::display::{format_flow, format_health_table};
use crate::error::Result;
use crate::time_phase;

pub fn run(input: &InputArgs, flow: bool, output: OutputFormat) -> Result<()> {
    let inputs = load_inputs(input)?;
    let result = time_phase!(
        "analyze::labels",
        analyze_labels(
            &inputs.issues,
            &inputs.config,
            inputs.now,
            &inputs.analyzer(),
            flow,
        )
    );

    match output {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => {
            let mut lines = format_health_table(&result, colors::should_colorize());
            if let Some(cross) = &result.cross_label_flow {
                lines.push(String::new());
                lines.extend(format_flow(cross));
            }
            print_lines(&lines);
        }
    }
    Ok(())
}
