// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Warehouse-side operations: courier assignment and shipment overview

use crate::api::{AssignCourier, ShipmentApi};
use crate::error::ApiError;
use crate::notify::Notification;
use serde::Serialize;
use thiserror::Error;
use waybill_core::{
    Order, OrderRef, Shipment, ShipmentStatus, StatusCounts, TrackingView, UserLite,
};

/// Fallback shown when an assignment fails without a reason
pub const ASSIGN_FAILED: &str = "Failed to assign courier";

#[derive(Debug, Error)]
pub enum AssignError {
    #[error("Please select a courier")]
    MissingCourier,

    #[error("order_oid or order_id is required")]
    MissingOrder,

    #[error("{message}")]
    Rejected {
        message: String,
        #[source]
        source: ApiError,
    },
}

impl AssignError {
    pub fn notification(&self) -> Notification {
        Notification::error(self.to_string())
    }
}

/// Assign a courier to an order, creating its shipment if needed.
///
/// A missing courier or blank order reference is refused before any
/// request is sent.
pub async fn assign_courier<A: ShipmentApi + ?Sized>(
    api: &A,
    order: &OrderRef,
    courier_user_id: Option<u64>,
) -> Result<(Shipment, Notification), AssignError> {
    let Some(courier_user_id) = courier_user_id else {
        return Err(AssignError::MissingCourier);
    };
    if matches!(order, OrderRef::Oid(oid) if oid.trim().is_empty()) {
        return Err(AssignError::MissingOrder);
    }

    let request = AssignCourier::new(order, courier_user_id);
    match api.assign_courier(&request).await {
        Ok(shipment) => {
            tracing::info!(order = %order, courier_user_id, shipment_id = %shipment.id, "courier assigned");
            Ok((shipment, Notification::success("Courier assigned")))
        }
        Err(source) => Err(AssignError::Rejected {
            message: source.user_message(ASSIGN_FAILED),
            source,
        }),
    }
}

/// Shipments with per-status totals
#[derive(Debug, Clone, Serialize)]
pub struct ShipmentBoard {
    pub shipments: Vec<Shipment>,
    pub counts: StatusCounts,
}

impl ShipmentBoard {
    /// Fetch shipments, optionally filtered by status, and tally them
    pub async fn load<A: ShipmentApi + ?Sized>(
        api: &A,
        status: Option<ShipmentStatus>,
    ) -> Result<Self, ApiError> {
        let shipments = api.list_shipments(status).await?;
        Ok(Self::from_shipments(shipments))
    }

    /// Fetch the signed-in courier's shipments and tally them
    pub async fn load_mine<A: ShipmentApi + ?Sized>(api: &A) -> Result<Self, ApiError> {
        let shipments = api.my_shipments().await?;
        Ok(Self::from_shipments(shipments))
    }

    pub fn from_shipments(shipments: Vec<Shipment>) -> Self {
        let counts = StatusCounts::tally(&shipments);
        Self { shipments, counts }
    }
}

/// Everything the assignment view needs for one order
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentContext {
    pub couriers: Vec<UserLite>,
    pub tracking: TrackingView,
}

impl AssignmentContext {
    /// Fetch couriers and the order's tracking view concurrently
    pub async fn load<A: ShipmentApi + ?Sized>(api: &A, oid: &str) -> Result<Self, ApiError> {
        let (couriers, tracking) = tokio::try_join!(api.list_couriers(), api.track_order(oid))?;
        Ok(Self { couriers, tracking })
    }

    pub fn order(&self) -> &Order {
        &self.tracking.order
    }

    /// Courier currently on the order's shipment, if any
    pub fn current_courier(&self) -> Option<&UserLite> {
        self.tracking.shipment.as_ref()?.courier.as_ref()
    }
}

#[cfg(test)]
#[path = "warehouse_tests.rs"]
mod tests;
