// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `status check` specs
//!
//! Exit 0 when the move may be requested, 2 when it may not, 1 on bad input.

use crate::prelude::*;

fn check(args: &[&str]) -> Cli {
    let mut full = vec!["status", "check"];
    full.extend_from_slice(args);
    Sandbox::new().into_waybill().args(&full)
}

#[test]
fn allowed_moves_exit_zero() {
    for (from, to) in [
        ("assigned", "picked_up"),
        ("assigned", "failed"),
        ("picked_up", "out_for_delivery"),
        ("picked_up", "returned"),
        ("out_for_delivery", "delivered"),
        ("failed", "returned"),
    ] {
        check(&[from, to])
            .passes()
            .stdout_eq(&format!("allowed: {} -> {}\n", from, to));
    }
}

#[test]
fn moves_outside_the_table_exit_two() {
    for (from, to) in [
        ("assigned", "delivered"),
        ("assigned", "out_for_delivery"),
        ("failed", "picked_up"),
        ("delivered", "returned"),
        ("returned", "failed"),
        ("pending_assignment", "picked_up"),
    ] {
        check(&[from, to]).exits(2).stdout_has("denied:");
    }
}

#[test]
fn self_transition_is_denied() {
    check(&["picked_up", "picked_up"])
        .exits(2)
        .stdout_eq("denied: picked_up -> picked_up (already in that status)\n");
}

#[test]
fn busy_denies_an_otherwise_allowed_move() {
    check(&["assigned", "picked_up", "--busy"])
        .exits(2)
        .stdout_has("an update is already in flight");
}

#[test]
fn unknown_current_status_is_denied() {
    check(&["held_at_customs", "returned"])
        .exits(2)
        .stdout_has("unknown current status");
}

#[test]
fn unknown_target_is_an_error() {
    check(&["assigned", "shipped"])
        .fails()
        .stderr_has("error: Unknown shipment status 'shipped'")
        .stderr_has("waybill status transitions");
}

#[test]
fn json_verdict() {
    let run = Sandbox::new()
        .waybill()
        .args(&["--format", "json", "status", "check", "assigned", "delivered"])
        .exits(2);
    let json = run.stdout_json();
    assert_eq!(json["allowed"], false);
    assert_eq!(json["from"], "assigned");
    assert_eq!(json["to"], "delivered");
    assert_eq!(json["reason"], "not in the transition table");
}
