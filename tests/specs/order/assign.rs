// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `order assign` and `order unassigned` specs

use crate::prelude::*;

#[test]
fn assign_posts_order_and_courier() {
    let server = MockServer::start();
    let assign = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/warehouse/assign/")
            .json_body(json!({ "order_oid": "ord-9", "courier_user_id": 5 }));
        then.status(201).json_body(shipment_json(9, "assigned"));
    });

    Sandbox::new()
        .against(&server)
        .args(&["order", "assign", "ord-9", "--courier", "5"])
        .passes()
        .stdout_eq("Courier assigned\nShipment 9 for order ord-9 assigned to Ada Rider\n");

    assign.assert();
}

#[test]
fn assign_by_numeric_id() {
    let server = MockServer::start();
    let assign = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/warehouse/assign/")
            .json_body(json!({ "order_id": 40, "courier_user_id": 5 }));
        then.status(201).json_body(shipment_json(9, "assigned"));
    });

    Sandbox::new()
        .against(&server)
        .args(&["order", "assign", "40", "--by-id", "--courier", "5"])
        .passes();

    assign.assert();
}

#[test]
fn missing_courier_is_refused_before_any_request() {
    let server = MockServer::start();
    let any = server.mock(|_, then| {
        then.status(200);
    });

    Sandbox::new()
        .against(&server)
        .args(&["order", "assign", "ord-9"])
        .fails()
        .stderr_has("error: Please select a courier")
        .stderr_has("waybill courier list");

    assert_eq!(any.hits(), 0);
}

#[test]
fn rejected_assignment_shows_backend_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/warehouse/assign/");
        then.status(400).json_body(json!({ "message": "Invalid courier" }));
    });

    Sandbox::new()
        .against(&server)
        .args(&["order", "assign", "ord-9", "--courier", "77"])
        .fails()
        .stderr_has("error: Invalid courier");
}

#[test]
fn failed_assignment_without_message_uses_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/warehouse/assign/");
        then.status(502);
    });

    Sandbox::new()
        .against(&server)
        .args(&["order", "assign", "ord-9", "--courier", "5"])
        .fails()
        .stderr_has("error: Failed to assign courier");
}

#[test]
fn unassigned_orders_are_listed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/warehouse/orders/unassigned/");
        then.status(200).json_body(json!([order_json("ord-3")]));
    });

    Sandbox::new()
        .against(&server)
        .args(&["order", "unassigned"])
        .passes()
        .stdout_has("ord-3")
        .stdout_has("Grace Buyer")
        .stdout_has("PAID");
}
