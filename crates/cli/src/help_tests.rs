// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn template_keeps_clap_placeholders() {
    let t = template();
    for placeholder in ["{usage}", "{subcommands}", "{options}", "{after-help}"] {
        assert!(t.contains(placeholder), "missing {placeholder}");
    }
}

#[test]
fn quickstart_lists_each_command() {
    let text = quickstart();
    for cmd in ["wkh health", "wkh label", "wkh flow", "wkh labels"] {
        assert!(text.contains(cmd), "missing {cmd}");
    }
}
