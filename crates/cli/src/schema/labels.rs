// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;
use wkh_core::LabelExtractionResult;

/// JSON output of `wkh labels`.
#[derive(Debug, JsonSchema, Serialize)]
pub struct LabelsOutputJson {
    /// The label catalog.
    #[serde(flatten)]
    pub catalog: LabelExtractionResult,
    /// Non-closed issues with open blockers, per label.
    pub blocked_by_label: BTreeMap<String, usize>,
    /// Issues sharing each pair of labels.
    pub cooccurrence: BTreeMap<String, BTreeMap<String, usize>>,
}
