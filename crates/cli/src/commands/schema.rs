// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON Schema for each report's `-o json` output.

use schemars::schema::RootSchema;
use schemars::schema_for;
use wkh_core::{CrossLabelFlow, LabelAnalysisResult, LabelHealth};

use super::print_json;
use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::labels::LabelsOutputJson;

pub(crate) fn schema(cmd: SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::Health => schema_for!(LabelAnalysisResult),
        SchemaCommand::Label => schema_for!(LabelHealth),
        SchemaCommand::Flow => schema_for!(CrossLabelFlow),
        SchemaCommand::Labels => schema_for!(LabelsOutputJson),
    }
}

pub fn run(cmd: SchemaCommand) -> Result<()> {
    print_json(&schema(cmd))
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
