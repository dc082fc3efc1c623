// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shipment timeline entries

use crate::status::ShipmentStatus;
use crate::user::UserLite;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Created,
    Assigned,
    PickedUp,
    OutForDelivery,
    Delivered,
    Failed,
    Returned,
    /// Free-text entry, also used for any kind the client does not know
    #[serde(other)]
    Note,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Created => "created",
            EventType::Assigned => "assigned",
            EventType::PickedUp => "picked_up",
            EventType::OutForDelivery => "out_for_delivery",
            EventType::Delivered => "delivered",
            EventType::Failed => "failed",
            EventType::Returned => "returned",
            EventType::Note => "note",
        }
    }
}

impl From<ShipmentStatus> for EventType {
    fn from(status: ShipmentStatus) -> Self {
        match status {
            // The backend logs no dedicated event for re-entering pending
            ShipmentStatus::PendingAssignment => EventType::Note,
            ShipmentStatus::Assigned => EventType::Assigned,
            ShipmentStatus::PickedUp => EventType::PickedUp,
            ShipmentStatus::OutForDelivery => EventType::OutForDelivery,
            ShipmentStatus::Delivered => EventType::Delivered,
            ShipmentStatus::Failed => EventType::Failed,
            ShipmentStatus::Returned => EventType::Returned,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One entry of a shipment's ordered event log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentEvent {
    pub id: u64,
    pub event_type: EventType,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_by: Option<UserLite>,
    pub created_at: DateTime<Utc>,
}
