// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local copy of a backend shipment

use super::event::ShipmentEvent;
use crate::order::Order;
use crate::status::ShipmentStatus;
use crate::transition;
use crate::user::UserLite;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend identifier of a shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentId(pub u64);

impl fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ShipmentId {
    fn from(id: u64) -> Self {
        ShipmentId(id)
    }
}

/// A shipment as last returned by the backend.
///
/// The status is kept as the raw wire string so that a value this client
/// does not know survives display; [`Shipment::status`] parses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: ShipmentId,
    #[serde(default)]
    pub order: Option<Order>,
    #[serde(default)]
    pub courier: Option<UserLite>,
    #[serde(default)]
    pub assigned_by: Option<UserLite>,
    pub status: String,
    #[serde(default)]
    pub assigned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub picked_up_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub events: Vec<ShipmentEvent>,
}

impl Shipment {
    /// Parsed status, `None` when the backend sent something unknown
    pub fn status(&self) -> Option<ShipmentStatus> {
        self.status.parse().ok()
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_some_and(transition::is_terminal)
    }

    /// Check if an update to `target` may be requested right now
    pub fn can_transition_to(&self, target: ShipmentStatus, busy: bool) -> bool {
        transition::is_transition_allowed(self.status(), target, busy)
    }

    /// Selectable targets the guard allows from the current status
    pub fn available_targets(&self, busy: bool) -> Vec<ShipmentStatus> {
        transition::available_targets(self.status(), busy)
    }

    /// Events oldest first
    pub fn timeline(&self) -> Vec<&ShipmentEvent> {
        let mut events: Vec<_> = self.events.iter().collect();
        events.sort_by_key(|e| (e.created_at, e.id));
        events
    }

    /// Public order id, if the order is embedded
    pub fn order_oid(&self) -> Option<&str> {
        self.order.as_ref().map(|o| o.oid.as_str())
    }
}

/// Tracking payload: an order and its shipment, if one exists yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingView {
    pub order: Order,
    #[serde(default)]
    pub shipment: Option<Shipment>,
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
