// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `status transitions` specs

use crate::prelude::*;

#[test]
fn table_text() {
    Sandbox::new()
        .waybill()
        .args(&["status", "transitions"])
        .passes()
        .stdout_eq(
            "STATUS               LABEL                NEXT
pending_assignment   Pending Assignment   -
assigned             Assigned             picked_up, failed
picked_up            Picked Up            out_for_delivery, failed, returned
out_for_delivery     Out For Delivery     delivered, failed, returned
delivered            Delivered            -
failed               Failed               returned
returned             Returned             -
",
        );
}

#[test]
fn table_json() {
    let run = Sandbox::new()
        .waybill()
        .args(&["status", "transitions", "--format", "json"])
        .passes();
    let rows = run.stdout_json();
    assert_eq!(rows.as_array().unwrap().len(), 7);
    assert_eq!(rows[1]["status"], "assigned");
    assert_eq!(rows[1]["next"], json!(["picked_up", "failed"]));
    assert_eq!(rows[4]["terminal"], true);
}
