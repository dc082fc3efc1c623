// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shipment status values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle status of a shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    /// Created for a paid order, no courier yet
    PendingAssignment,
    /// A courier has been assigned by the warehouse
    Assigned,
    /// Courier collected the parcel
    PickedUp,
    /// On the way to the customer
    OutForDelivery,
    /// Handed to the customer
    Delivered,
    /// Delivery attempt failed
    Failed,
    /// Parcel went back to the warehouse
    Returned,
}

impl ShipmentStatus {
    /// Every status, in lifecycle order
    pub const ALL: [ShipmentStatus; 7] = [
        ShipmentStatus::PendingAssignment,
        ShipmentStatus::Assigned,
        ShipmentStatus::PickedUp,
        ShipmentStatus::OutForDelivery,
        ShipmentStatus::Delivered,
        ShipmentStatus::Failed,
        ShipmentStatus::Returned,
    ];

    /// Statuses a courier may pick as an update target.
    ///
    /// `PendingAssignment` and `Assigned` are only ever set by the warehouse.
    pub const SELECTABLE_TARGETS: [ShipmentStatus; 5] = [
        ShipmentStatus::PickedUp,
        ShipmentStatus::OutForDelivery,
        ShipmentStatus::Delivered,
        ShipmentStatus::Failed,
        ShipmentStatus::Returned,
    ];

    /// Wire representation used by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::PendingAssignment => "pending_assignment",
            ShipmentStatus::Assigned => "assigned",
            ShipmentStatus::PickedUp => "picked_up",
            ShipmentStatus::OutForDelivery => "out_for_delivery",
            ShipmentStatus::Delivered => "delivered",
            ShipmentStatus::Failed => "failed",
            ShipmentStatus::Returned => "returned",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ShipmentStatus::PendingAssignment => "Pending Assignment",
            ShipmentStatus::Assigned => "Assigned",
            ShipmentStatus::PickedUp => "Picked Up",
            ShipmentStatus::OutForDelivery => "Out For Delivery",
            ShipmentStatus::Delivered => "Delivered",
            ShipmentStatus::Failed => "Failed",
            ShipmentStatus::Returned => "Returned",
        }
    }

    pub fn is_selectable_target(&self) -> bool {
        Self::SELECTABLE_TARGETS.contains(self)
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error for a status string outside the known set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shipment status: '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for ShipmentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
