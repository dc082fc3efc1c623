// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shipment show` specs

use crate::prelude::*;

#[test]
fn show_prints_detail_and_next_statuses() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/warehouse/courier/shipment/7/");
        then.status(200).json_body(shipment_json(7, "picked_up"));
    });

    Sandbox::new()
        .against(&server)
        .args(&["shipment", "show", "7"])
        .passes()
        .stdout_has("Shipment 7")
        .stdout_has("Status:    Picked Up (picked_up)")
        .stdout_has("Next:      out_for_delivery, failed, returned")
        .stdout_has("Timeline:");
}

#[test]
fn unknown_shipment_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/warehouse/courier/shipment/99/");
        then.status(404).json_body(json!({ "detail": "Not found." }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/warehouse/courier/my-shipments/");
        then.status(200).json_body(json!([]));
    });

    Sandbox::new()
        .against(&server)
        .args(&["shipment", "show", "99"])
        .fails()
        .stderr_has("error: Lookup failed: Not found.");
}
