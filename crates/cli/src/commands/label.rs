// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use wkh_core::{compute_label_health, GraphAnalyzer};

use super::{load_inputs, print_json, print_lines};
use crate::cli::{InputArgs, OutputFormat};
use crate::colors;
use crate::display::format_label_detail;
use crate::error::{Error, Result};
use crate::time_phase;

/// Health detail for a single label. Unknown or empty labels are an error.
pub fn run(label: &str, input: &InputArgs, output: OutputFormat) -> Result<()> {
    if label.is_empty() {
        return Err(Error::LabelNotFound(label.to_string()));
    }
    let inputs = load_inputs(input)?;
    if !inputs.issues.iter().any(|i| i.has_label(label)) {
        return Err(Error::LabelNotFound(label.to_string()));
    }

    let stats = time_phase!("analyze::centrality", inputs.analyzer().analyze(&inputs.issues));
    let health = time_phase!(
        "analyze::label",
        compute_label_health(label, &inputs.issues, &inputs.config, inputs.now, &stats)
    );

    match output {
        OutputFormat::Json => print_json(&health)?,
        OutputFormat::Text => {
            print_lines(&format_label_detail(&health, colors::should_colorize()))
        }
    }
    Ok(())
}
