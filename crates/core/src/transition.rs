// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shipment status transition guard
//!
//! A static table of which statuses may follow which, plus the predicate
//! that decides whether a status-changing request may be issued. The table
//! only gates the client side; the backend applies its own rule.

use crate::status::ShipmentStatus;

/// Statuses reachable directly from `current`
pub fn allowed_next(current: ShipmentStatus) -> &'static [ShipmentStatus] {
    use ShipmentStatus::*;

    match current {
        PendingAssignment => &[],
        Assigned => &[PickedUp, Failed],
        PickedUp => &[OutForDelivery, Failed, Returned],
        OutForDelivery => &[Delivered, Failed, Returned],
        Failed => &[Returned],
        Returned => &[],
        Delivered => &[],
    }
}

/// Check if a status has no outgoing transitions
pub fn is_terminal(status: ShipmentStatus) -> bool {
    matches!(status, ShipmentStatus::Delivered | ShipmentStatus::Returned)
}

/// Decide whether moving from `current` to `target` may be requested.
///
/// Denies when the current status is unknown, when a mutation is already
/// in flight, on self-transitions, and for anything outside the table.
pub fn is_transition_allowed(
    current: Option<ShipmentStatus>,
    target: ShipmentStatus,
    busy: bool,
) -> bool {
    let Some(current) = current else {
        return false;
    };
    if busy || current == target {
        return false;
    }
    allowed_next(current).contains(&target)
}

/// String form of [`is_transition_allowed`] for raw wire values.
///
/// Any value that does not parse as a known status denies.
pub fn is_transition_allowed_str(current: Option<&str>, target: &str, busy: bool) -> bool {
    let current = current.and_then(|s| s.parse().ok());
    match target.parse() {
        Ok(target) => is_transition_allowed(current, target, busy),
        Err(_) => false,
    }
}

/// Selectable targets the guard currently allows from `current`
pub fn available_targets(current: Option<ShipmentStatus>, busy: bool) -> Vec<ShipmentStatus> {
    ShipmentStatus::SELECTABLE_TARGETS
        .into_iter()
        .filter(|target| is_transition_allowed(current, *target, busy))
        .collect()
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
