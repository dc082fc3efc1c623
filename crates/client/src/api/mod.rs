// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logistics backend API boundary

mod http;
mod traced;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use http::HttpShipmentApi;
pub use traced::TracedShipmentApi;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ApiCall, FakeShipmentApi};

use crate::error::ApiError;
use async_trait::async_trait;
use serde::Serialize;
use waybill_core::{Order, OrderRef, Shipment, ShipmentId, ShipmentStatus, TrackingView, UserLite};

/// Body of a status update request.
///
/// `message` is omitted entirely when there is no note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: ShipmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusUpdate {
    /// Build an update, trimming the note and dropping it when blank
    pub fn new(status: ShipmentStatus, note: Option<&str>) -> Self {
        let message = note
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);
        Self { status, message }
    }
}

/// Body of a courier assignment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignCourier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_oid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    pub courier_user_id: u64,
}

impl AssignCourier {
    pub fn new(order: &OrderRef, courier_user_id: u64) -> Self {
        let (order_oid, order_id) = match order {
            OrderRef::Oid(oid) => (Some(oid.clone()), None),
            OrderRef::Id(id) => (None, Some(*id)),
        };
        Self {
            order_oid,
            order_id,
            courier_user_id,
        }
    }
}

/// Operations the logistics backend exposes
#[async_trait]
pub trait ShipmentApi: Send + Sync + 'static {
    /// Active couriers a shipment can be assigned to
    async fn list_couriers(&self) -> Result<Vec<UserLite>, ApiError>;

    /// Paid orders with no shipment or no courier yet
    async fn unassigned_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// All shipments, optionally filtered by status
    async fn list_shipments(
        &self,
        status: Option<ShipmentStatus>,
    ) -> Result<Vec<Shipment>, ApiError>;

    /// Assign a courier to an order, creating its shipment if needed
    async fn assign_courier(&self, request: &AssignCourier) -> Result<Shipment, ApiError>;

    /// Shipments assigned to the calling courier
    async fn my_shipments(&self) -> Result<Vec<Shipment>, ApiError>;

    async fn get_shipment(&self, id: ShipmentId) -> Result<Shipment, ApiError>;

    /// Request a status change; returns the shipment as the backend stored it
    async fn update_status(
        &self,
        id: ShipmentId,
        update: &StatusUpdate,
    ) -> Result<Shipment, ApiError>;

    /// Order plus shipment for the tracking page
    async fn track_order(&self, oid: &str) -> Result<TrackingView, ApiError>;
}
