// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `order track` specs

use crate::prelude::*;

#[test]
fn track_shows_shipment_progress() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/warehouse/track/order/ord-2/");
        then.status(200).json_body(json!({
            "order": order_json("ord-2"),
            "shipment": shipment_json(2, "out_for_delivery"),
        }));
    });

    Sandbox::new()
        .against(&server)
        .args(&["order", "track", "ord-2"])
        .passes()
        .stdout_has("Order ord-2")
        .stdout_has("Shipment:  2 (Out For Delivery)")
        .stdout_has("Courier:   Ada Rider");
}

#[test]
fn track_before_assignment() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/warehouse/track/order/ord-2/");
        then.status(200)
            .json_body(json!({ "order": order_json("ord-2"), "shipment": null }));
    });

    Sandbox::new()
        .against(&server)
        .args(&["order", "track", "ord-2"])
        .passes()
        .stdout_has("Shipment:  not created yet")
        .stdout_lacks("Courier:");
}

#[test]
fn track_unknown_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/warehouse/track/order/nope/");
        then.status(404).json_body(json!({ "detail": "Not found." }));
    });

    Sandbox::new()
        .against(&server)
        .args(&["order", "track", "nope"])
        .fails()
        .stderr_has("error: Tracking failed: Not found.");
}
