// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Fixed evaluation time for reproducible scores.
pub const NOW: &str = "2026-01-15T00:00:00Z";

/// Five issues across api, ui and core; E is closed.
pub const FLOW_EXAMPLE: &str = r#"{"id":"A","status":"open","labels":["api"]}
{"id":"B","status":"open","labels":["ui"],"dependencies":[{"depends_on_id":"A","type":"blocks"}]}
{"id":"C","status":"in_progress","labels":["api","core"]}
{"id":"D","status":"open","labels":["ui","core"],"dependencies":[{"depends_on_id":"C","type":"blocks"}]}
{"id":"E","status":"closed","labels":["api"],"closed_at":"2026-01-10T00:00:00Z","dependencies":[{"depends_on_id":"A","type":"blocks"}]}
"#;

pub fn wkh() -> Command {
    let mut cmd = cargo_bin_cmd!("wkh");
    cmd.env_remove("WKH_LOG").env("NO_COLOR", "1");
    cmd
}

/// A temp project with `.wok/issues.jsonl` holding `issues`.
pub fn project_with(issues: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let work_dir = temp.path().join(".wok");
    fs::create_dir(&work_dir).unwrap();
    fs::write(work_dir.join("issues.jsonl"), issues).unwrap();
    temp
}

/// Writes `contents` to `.wok/<name>` in `temp`.
pub fn write_wok_file(temp: &TempDir, name: &str, contents: &str) {
    fs::write(temp.path().join(".wok").join(name), contents).unwrap();
}

/// Runs `wkh` in `dir` and parses stdout as JSON.
pub fn json_output(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = wkh()
        .args(args)
        .arg("--now")
        .arg(NOW)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "wkh {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
