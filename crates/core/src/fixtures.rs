// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backend-shaped JSON fixtures for tests
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::order::Order;
use crate::shipment::Shipment;
use crate::user::UserLite;
use serde_json::{json, Value};

/// Shipment payload as the backend serializes it, with one `assigned` event
pub fn shipment_json(id: u64, status: &str) -> Value {
    json!({
        "id": id,
        "order": order_json(&format!("ord-{}", id)),
        "courier": { "id": 5, "email": "rider@example.com", "username": "rider", "full_name": "Ada Rider" },
        "assigned_by": { "id": 2, "email": "wh@example.com", "username": "wh", "full_name": "Warehouse Lead" },
        "status": status,
        "assigned_at": "2026-03-01T09:00:00Z",
        "picked_up_at": null,
        "delivered_at": null,
        "created_at": "2026-03-01T08:00:00Z",
        "updated_at": "2026-03-01T09:00:00Z",
        "events": [
            {
                "id": id * 100 + 1,
                "shipment": id,
                "event_type": "assigned",
                "message": "Assigned to courier user_id=5",
                "created_by": { "id": 2, "email": "wh@example.com", "username": "wh", "full_name": "Warehouse Lead" },
                "created_at": "2026-03-01T09:00:00Z"
            }
        ]
    })
}

/// Order payload as the backend serializes it
pub fn order_json(oid: &str) -> Value {
    json!({
        "id": 40,
        "oid": oid,
        "full_name": "Grace Buyer",
        "email": "grace@example.com",
        "mobile": "+15550100",
        "address": "12 Harbour Road",
        "city": "Portsmouth",
        "state": "Hampshire",
        "country": "UK",
        "payment_status": "paid",
        "order_status": "Pending",
        "total": "59.90",
        "date": "2026-02-28T17:30:00Z",
    })
}

/// Decoded [`shipment_json`]
pub fn shipment(id: u64, status: &str) -> Shipment {
    match serde_json::from_value(shipment_json(id, status)) {
        Ok(shipment) => shipment,
        Err(e) => unreachable!("fixture must decode: {}", e),
    }
}

/// Decoded [`order_json`]
pub fn order(oid: &str) -> Order {
    match serde_json::from_value(order_json(oid)) {
        Ok(order) => order,
        Err(e) => unreachable!("fixture must decode: {}", e),
    }
}

/// A courier account
pub fn courier(id: u64, full_name: &str) -> UserLite {
    UserLite {
        id,
        email: Some(format!("courier{}@example.com", id)),
        username: Some(format!("courier{}", id)),
        full_name: Some(full_name.to_string()),
    }
}
