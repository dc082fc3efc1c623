// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_command_groups() {
    Sandbox::new()
        .waybill()
        .args(&["--help"])
        .passes()
        .stdout_has("status")
        .stdout_has("shipment")
        .stdout_has("order")
        .stdout_has("courier")
        .stdout_has("--api-url");
}

#[test]
fn shipment_help_lists_update() {
    Sandbox::new()
        .waybill()
        .args(&["shipment", "--help"])
        .passes()
        .stdout_has("update")
        .stdout_has("mine");
}

#[test]
fn version_prints_name() {
    Sandbox::new()
        .waybill()
        .args(&["--version"])
        .passes()
        .stdout_has("waybill");
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    Sandbox::new().waybill().exits(2).stderr_has("Usage");
}
