// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shipment list` and `shipment mine` specs

use crate::prelude::*;

#[test]
fn list_shows_rows_and_totals() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/warehouse/shipments/");
        then.status(200).json_body(json!([
            shipment_json(1, "assigned"),
            shipment_json(2, "delivered"),
            shipment_json(3, "delivered"),
        ]));
    });

    Sandbox::new()
        .against(&server)
        .args(&["shipment", "list"])
        .passes()
        .stdout_has("ord-1")
        .stdout_has("Total                3")
        .stdout_has("Delivered            2");
}

#[test]
fn list_passes_status_filter() {
    let server = MockServer::start();
    let filtered = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/warehouse/shipments/")
            .query_param("status", "failed");
        then.status(200).json_body(json!([shipment_json(5, "failed")]));
    });

    Sandbox::new()
        .against(&server)
        .args(&["shipment", "list", "--status", "failed"])
        .passes()
        .stdout_has("failed");

    filtered.assert();
}

#[test]
fn list_rejects_unknown_filter() {
    Sandbox::new()
        .waybill()
        .args(&["shipment", "list", "--status", "lost"])
        .fails()
        .stderr_has("Unknown shipment status 'lost'");
}

#[test]
fn mine_as_json() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/warehouse/courier/my-shipments/");
        then.status(200).json_body(json!([shipment_json(4, "out_for_delivery")]));
    });

    let run = Sandbox::new()
        .against(&server)
        .args(&["shipment", "mine", "--format", "json"])
        .passes();
    let json = run.stdout_json();
    assert_eq!(json["shipments"][0]["id"], 4);
    assert_eq!(json["counts"]["total"], 1);
    assert_eq!(json["counts"]["by_status"]["out_for_delivery"], 1);
}

#[test]
fn empty_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/warehouse/courier/my-shipments/");
        then.status(200).json_body(json!([]));
    });

    Sandbox::new()
        .against(&server)
        .args(&["shipment", "mine"])
        .passes()
        .stdout_eq("No shipments\n");
}
