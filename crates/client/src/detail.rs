// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shipment detail controller
//!
//! Holds the courier's local copy of one shipment, gates status changes
//! through the transition guard, and replaces the copy only with what the
//! backend returns.

use crate::api::{ShipmentApi, StatusUpdate};
use crate::error::ApiError;
use crate::notify::Notification;
use thiserror::Error;
use waybill_core::{transition, InFlight, Shipment, ShipmentId, ShipmentStatus};

/// Fallback shown when the backend gives no reason
pub const UPDATE_FAILED: &str = "Failed to update status";

/// Why a status update did not go through
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("shipment {0} is not loaded")]
    NotLoaded(ShipmentId),

    #[error("an update for shipment {0} is already in progress")]
    Busy(ShipmentId),

    #[error("cannot change status from '{from}' to '{to}'")]
    TransitionNotAllowed { from: String, to: ShipmentStatus },

    #[error("{message}")]
    Rejected {
        message: String,
        #[source]
        source: ApiError,
    },
}

impl UpdateError {
    /// Error notification for display
    pub fn notification(&self) -> Notification {
        Notification::error(self.to_string())
    }

    /// Check if the request reached the backend
    pub fn was_sent(&self) -> bool {
        matches!(self, UpdateError::Rejected { .. })
    }
}

/// View model for a single shipment
pub struct ShipmentDetail<A> {
    api: A,
    id: ShipmentId,
    shipment: Option<Shipment>,
    note: String,
    inflight: InFlight,
}

impl<A: ShipmentApi> ShipmentDetail<A> {
    /// Create an unloaded detail view.
    ///
    /// Views that share `inflight` never run two updates for the same
    /// shipment at once.
    pub fn new(api: A, id: ShipmentId, inflight: InFlight) -> Self {
        Self {
            api,
            id,
            shipment: None,
            note: String::new(),
            inflight,
        }
    }

    /// Create a detail view from an already fetched shipment
    pub fn with_shipment(api: A, shipment: Shipment, inflight: InFlight) -> Self {
        Self {
            id: shipment.id,
            shipment: Some(shipment),
            ..Self::new(api, ShipmentId(0), inflight)
        }
    }

    /// Fetch the shipment. On failure the previous copy is kept.
    pub async fn load(&mut self) -> Result<&Shipment, ApiError> {
        let shipment = self.api.get_shipment(self.id).await?;
        tracing::debug!(shipment_id = %self.id, status = %shipment.status, "loaded");
        Ok(self.shipment.insert(shipment))
    }

    pub fn id(&self) -> ShipmentId {
        self.id
    }

    pub fn shipment(&self) -> Option<&Shipment> {
        self.shipment.as_ref()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Check if an update is in flight for this shipment
    pub fn is_busy(&self) -> bool {
        self.inflight.is_busy(self.id)
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Set the optional note sent with the next update
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Check if the control for `target` should be enabled
    pub fn can_set_status(&self, target: ShipmentStatus) -> bool {
        let current = self.shipment.as_ref().and_then(Shipment::status);
        transition::is_transition_allowed(current, target, self.is_busy())
    }

    /// Targets whose controls should be enabled
    pub fn available_targets(&self) -> Vec<ShipmentStatus> {
        let current = self.shipment.as_ref().and_then(Shipment::status);
        transition::available_targets(current, self.is_busy())
    }

    /// Ask the backend to move the shipment to `target`.
    ///
    /// Refused locally, with no request sent, when the shipment is not
    /// loaded, is busy, or the move is not in the transition table. On
    /// success the local copy is replaced by the response and the note is
    /// cleared. On failure local state is left as it was.
    pub async fn update_status(
        &mut self,
        target: ShipmentStatus,
    ) -> Result<Notification, UpdateError> {
        let Some(shipment) = &self.shipment else {
            return Err(UpdateError::NotLoaded(self.id));
        };
        if self.is_busy() {
            return Err(UpdateError::Busy(self.id));
        }
        if !transition::is_transition_allowed(shipment.status(), target, false) {
            return Err(UpdateError::TransitionNotAllowed {
                from: shipment.status.clone(),
                to: target,
            });
        }

        // Held until this function returns, whatever the outcome
        let Some(_permit) = self.inflight.try_begin(self.id) else {
            return Err(UpdateError::Busy(self.id));
        };

        let update = StatusUpdate::new(target, Some(self.note.as_str()));
        match self.api.update_status(self.id, &update).await {
            Ok(updated) => {
                tracing::info!(
                    shipment_id = %self.id,
                    from = %shipment_status(&self.shipment),
                    to = %updated.status,
                    "status updated"
                );
                self.shipment = Some(updated);
                self.note.clear();
                Ok(Notification::success("Status updated"))
            }
            Err(source) => {
                let message = source.user_message(UPDATE_FAILED);
                tracing::warn!(shipment_id = %self.id, to = %target, error = %source, "update rejected");
                Err(UpdateError::Rejected { message, source })
            }
        }
    }
}

fn shipment_status(shipment: &Option<Shipment>) -> &str {
    shipment.as_ref().map_or("-", |s| s.status.as_str())
}

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
