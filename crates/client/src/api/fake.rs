// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake backend for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{AssignCourier, ShipmentApi, StatusUpdate};
use crate::error::ApiError;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use waybill_core::{
    EventType, Order, Shipment, ShipmentEvent, ShipmentId, ShipmentStatus, TrackingView, UserLite,
};

/// Recorded API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListCouriers,
    UnassignedOrders,
    ListShipments { status: Option<ShipmentStatus> },
    AssignCourier(AssignCourier),
    MyShipments,
    GetShipment(ShipmentId),
    UpdateStatus { id: ShipmentId, update: StatusUpdate },
    TrackOrder(String),
}

#[derive(Default)]
struct FakeState {
    shipments: BTreeMap<ShipmentId, Shipment>,
    orders: Vec<Order>,
    couriers: Vec<UserLite>,
    calls: Vec<ApiCall>,
    fail_next: Option<ApiError>,
    delay: Option<Duration>,
    next_event_id: u64,
}

/// In-memory backend that mimics the server's responses.
///
/// Like the real server it accepts any known status on update; the
/// transition table is a client-side concern.
#[derive(Clone, Default)]
pub struct FakeShipmentApi {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeShipmentApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn add_shipment(&self, shipment: Shipment) {
        self.state().shipments.insert(shipment.id, shipment);
    }

    pub fn add_order(&self, order: Order) {
        self.state().orders.push(order);
    }

    pub fn add_courier(&self, courier: UserLite) {
        self.state().couriers.push(courier);
    }

    /// Make the next call fail with `error`
    pub fn fail_next(&self, error: ApiError) {
        self.state().fail_next = Some(error);
    }

    /// Delay every response, to hold requests in flight
    pub fn set_delay(&self, delay: Duration) {
        self.state().delay = Some(delay);
    }

    pub fn shipment(&self, id: ShipmentId) -> Option<Shipment> {
        self.state().shipments.get(&id).cloned()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state().calls.clone()
    }

    /// Record a call and return the scripted failure, if any
    async fn begin(&self, call: ApiCall) -> Result<(), ApiError> {
        let (delay, failure) = {
            let mut state = self.state();
            state.calls.push(call);
            (state.delay, state.fail_next.take())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Rejected {
            status: 404,
            message: Some("Not found.".to_string()),
        }
    }

    fn bad_request(message: &str) -> ApiError {
        ApiError::Rejected {
            status: 400,
            message: Some(message.to_string()),
        }
    }

    fn push_event(state: &mut FakeState, id: ShipmentId, event_type: EventType, message: Option<String>) {
        state.next_event_id += 1;
        let event = ShipmentEvent {
            id: state.next_event_id,
            event_type,
            message,
            created_by: None,
            created_at: Utc::now(),
        };
        if let Some(shipment) = state.shipments.get_mut(&id) {
            shipment.events.push(event);
        }
    }
}

#[async_trait]
impl ShipmentApi for FakeShipmentApi {
    async fn list_couriers(&self) -> Result<Vec<UserLite>, ApiError> {
        self.begin(ApiCall::ListCouriers).await?;
        Ok(self.state().couriers.clone())
    }

    async fn unassigned_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.begin(ApiCall::UnassignedOrders).await?;
        let state = self.state();
        let assigned: Vec<&str> = state
            .shipments
            .values()
            .filter(|s| s.courier.is_some())
            .filter_map(|s| s.order_oid())
            .collect();
        Ok(state
            .orders
            .iter()
            .filter(|o| o.payment_status.as_deref() == Some("paid"))
            .filter(|o| !assigned.contains(&o.oid.as_str()))
            .cloned()
            .collect())
    }

    async fn list_shipments(
        &self,
        status: Option<ShipmentStatus>,
    ) -> Result<Vec<Shipment>, ApiError> {
        self.begin(ApiCall::ListShipments { status }).await?;
        Ok(self
            .state()
            .shipments
            .values()
            .filter(|s| status.map_or(true, |status| s.status == status.as_str()))
            .cloned()
            .collect())
    }

    async fn assign_courier(&self, request: &AssignCourier) -> Result<Shipment, ApiError> {
        self.begin(ApiCall::AssignCourier(request.clone())).await?;
        let mut state = self.state();

        let order = state
            .orders
            .iter()
            .find(|o| match (&request.order_oid, request.order_id) {
                (Some(oid), _) => &o.oid == oid,
                (None, Some(id)) => o.id == id,
                (None, None) => false,
            })
            .cloned()
            .ok_or_else(Self::not_found)?;
        let courier = state
            .couriers
            .iter()
            .find(|c| c.id == request.courier_user_id)
            .cloned()
            .ok_or_else(|| Self::bad_request("Invalid courier"))?;

        let existing = state
            .shipments
            .values()
            .find(|s| s.order_oid() == Some(order.oid.as_str()))
            .map(|s| s.id);
        let id = existing.unwrap_or_else(|| {
            let next = state.shipments.keys().next_back().map_or(1, |id| id.0 + 1);
            ShipmentId(next)
        });

        let now = Utc::now();
        let shipment = state.shipments.entry(id).or_insert_with(|| Shipment {
            id,
            order: Some(order),
            courier: None,
            assigned_by: None,
            status: ShipmentStatus::PendingAssignment.as_str().to_string(),
            assigned_at: None,
            picked_up_at: None,
            delivered_at: None,
            created_at: Some(now),
            updated_at: Some(now),
            events: Vec::new(),
        });
        shipment.courier = Some(courier);
        shipment.status = ShipmentStatus::Assigned.as_str().to_string();
        shipment.assigned_at = Some(now);
        shipment.updated_at = Some(now);

        let message = format!("Assigned to courier user_id={}", request.courier_user_id);
        Self::push_event(&mut state, id, EventType::Assigned, Some(message));
        state.shipments.get(&id).cloned().ok_or_else(Self::not_found)
    }

    async fn my_shipments(&self) -> Result<Vec<Shipment>, ApiError> {
        self.begin(ApiCall::MyShipments).await?;
        Ok(self
            .state()
            .shipments
            .values()
            .filter(|s| s.courier.is_some())
            .cloned()
            .collect())
    }

    async fn get_shipment(&self, id: ShipmentId) -> Result<Shipment, ApiError> {
        self.begin(ApiCall::GetShipment(id)).await?;
        self.shipment(id).ok_or_else(Self::not_found)
    }

    async fn update_status(
        &self,
        id: ShipmentId,
        update: &StatusUpdate,
    ) -> Result<Shipment, ApiError> {
        self.begin(ApiCall::UpdateStatus {
            id,
            update: update.clone(),
        })
        .await?;
        let mut state = self.state();

        let now = Utc::now();
        let shipment = state.shipments.get_mut(&id).ok_or_else(Self::not_found)?;
        shipment.status = update.status.as_str().to_string();
        shipment.updated_at = Some(now);
        match update.status {
            ShipmentStatus::PickedUp => {
                shipment.picked_up_at.get_or_insert(now);
            }
            ShipmentStatus::Delivered => {
                shipment.delivered_at.get_or_insert(now);
            }
            _ => {}
        }

        Self::push_event(&mut state, id, update.status.into(), update.message.clone());
        state.shipments.get(&id).cloned().ok_or_else(Self::not_found)
    }

    async fn track_order(&self, oid: &str) -> Result<TrackingView, ApiError> {
        self.begin(ApiCall::TrackOrder(oid.to_string())).await?;
        let state = self.state();
        let order = state
            .orders
            .iter()
            .find(|o| o.oid == oid)
            .cloned()
            .ok_or_else(Self::not_found)?;
        let shipment = state
            .shipments
            .values()
            .find(|s| s.order_oid() == Some(oid))
            .cloned();
        Ok(TrackingView { order, shipment })
    }
}
