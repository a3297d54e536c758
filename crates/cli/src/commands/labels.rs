// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use wkh_core::{compute_blocked_by_label, extract_labels, get_label_cooccurrence, GraphAnalyzer};

use super::{load_inputs, print_json, print_lines, Inputs};
use crate::cli::{InputArgs, OutputFormat};
use crate::display::format_labels;
use crate::error::Result;
use crate::schema::labels::LabelsOutputJson;

/// Builds the `labels` report from loaded inputs.
pub(crate) fn build(inputs: &Inputs) -> LabelsOutputJson {
    let stats = inputs.analyzer().analyze(&inputs.issues);
    LabelsOutputJson {
        catalog: extract_labels(&inputs.issues),
        blocked_by_label: compute_blocked_by_label(&inputs.issues, &stats),
        cooccurrence: get_label_cooccurrence(&inputs.issues),
    }
}

pub fn run(input: &InputArgs, output: OutputFormat) -> Result<()> {
    let inputs = load_inputs(input)?;
    let report = build(&inputs);

    match output {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            print_lines(&format_labels(&report.catalog, &report.blocked_by_label))
        }
    }
    Ok(())
}
