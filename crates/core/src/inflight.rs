// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-shipment busy flags
//!
//! At most one status-changing request may be outstanding per shipment.
//! A permit marks the shipment busy and clears the mark when dropped, so
//! the flag is released on success, on error and on early return alike.

use crate::shipment::ShipmentId;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Registry of shipments with a mutation in flight
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    active: Arc<Mutex<HashSet<ShipmentId>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` busy, or return `None` if it already is
    pub fn try_begin(&self, id: ShipmentId) -> Option<InFlightPermit> {
        let mut active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        if !active.insert(id) {
            tracing::debug!(shipment_id = %id, "mutation already in flight");
            return None;
        }
        tracing::trace!(shipment_id = %id, "busy");
        Some(InFlightPermit {
            id,
            active: Arc::clone(&self.active),
        })
    }

    /// Check if a mutation is outstanding for `id`
    pub fn is_busy(&self, id: ShipmentId) -> bool {
        self.active
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&id)
    }

    /// Number of shipments currently busy
    pub fn len(&self) -> usize {
        self.active.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Busy mark for one shipment, cleared on drop
#[derive(Debug)]
pub struct InFlightPermit {
    id: ShipmentId,
    active: Arc<Mutex<HashSet<ShipmentId>>>,
}

impl InFlightPermit {
    pub fn shipment_id(&self) -> ShipmentId {
        self.id
    }
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        self.active
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.id);
        tracing::trace!(shipment_id = %self.id, "idle");
    }
}

#[cfg(test)]
#[path = "inflight_tests.rs"]
mod tests;
