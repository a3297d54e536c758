// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output types owned by the CLI.
//!
//! Reports from `health`, `label` and `flow` serialize the engine's own types
//! directly. Only `labels` combines several results into one document.

pub mod labels;
