// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced API wrapper for consistent observability

use super::{AssignCourier, ShipmentApi, StatusUpdate};
use crate::error::ApiError;
use async_trait::async_trait;
use std::future::Future;
use std::time::Instant;
use tracing::Instrument;
use waybill_core::{Order, Shipment, ShipmentId, ShipmentStatus, TrackingView, UserLite};

/// Wrapper that adds tracing to any ShipmentApi
#[derive(Clone)]
pub struct TracedShipmentApi<A> {
    inner: A,
}

impl<A> TracedShipmentApi<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

/// Await `call` inside `span`, logging elapsed time and outcome
async fn observe<T, F>(span: tracing::Span, call: F) -> Result<T, ApiError>
where
    T: Send,
    F: Future<Output = Result<T, ApiError>> + Send,
{
    async move {
        let start = Instant::now();
        let result = call.await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => tracing::debug!(elapsed_ms, "ok"),
            Err(ApiError::Rejected { status, message }) => tracing::warn!(
                elapsed_ms,
                status,
                reason = message.as_deref().unwrap_or(""),
                "rejected by backend"
            ),
            Err(e) => tracing::error!(elapsed_ms, error = %e, "request failed"),
        }
        result
    }
    .instrument(span)
    .await
}

#[async_trait]
impl<A: ShipmentApi> ShipmentApi for TracedShipmentApi<A> {
    async fn list_couriers(&self) -> Result<Vec<UserLite>, ApiError> {
        let span = tracing::info_span!("api.list_couriers");
        observe(span, self.inner.list_couriers()).await
    }

    async fn unassigned_orders(&self) -> Result<Vec<Order>, ApiError> {
        let span = tracing::info_span!("api.unassigned_orders");
        observe(span, self.inner.unassigned_orders()).await
    }

    async fn list_shipments(
        &self,
        status: Option<ShipmentStatus>,
    ) -> Result<Vec<Shipment>, ApiError> {
        let span = tracing::info_span!(
            "api.list_shipments",
            status = status.map(|s| s.as_str()).unwrap_or("all")
        );
        let result = observe(span, self.inner.list_shipments(status)).await;
        if let Ok(shipments) = &result {
            tracing::trace!(count = shipments.len(), "listed");
        }
        result
    }

    async fn assign_courier(&self, request: &AssignCourier) -> Result<Shipment, ApiError> {
        let span = tracing::info_span!(
            "api.assign_courier",
            order_oid = request.order_oid.as_deref(),
            order_id = request.order_id,
            courier_user_id = request.courier_user_id
        );
        observe(span, self.inner.assign_courier(request)).await
    }

    async fn my_shipments(&self) -> Result<Vec<Shipment>, ApiError> {
        let span = tracing::info_span!("api.my_shipments");
        observe(span, self.inner.my_shipments()).await
    }

    async fn get_shipment(&self, id: ShipmentId) -> Result<Shipment, ApiError> {
        let span = tracing::info_span!("api.get_shipment", shipment_id = id.0);
        observe(span, self.inner.get_shipment(id)).await
    }

    async fn update_status(
        &self,
        id: ShipmentId,
        update: &StatusUpdate,
    ) -> Result<Shipment, ApiError> {
        let span = tracing::info_span!(
            "api.update_status",
            shipment_id = id.0,
            to_status = update.status.as_str(),
            has_note = update.message.is_some()
        );
        observe(span, self.inner.update_status(id, update)).await
    }

    async fn track_order(&self, oid: &str) -> Result<TrackingView, ApiError> {
        let span = tracing::info_span!("api.track_order", oid);
        observe(span, self.inner.track_order(oid)).await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
