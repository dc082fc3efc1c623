// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shipment records and their event log

mod counts;
mod event;
mod record;

pub use counts::StatusCounts;
pub use event::{EventType, ShipmentEvent};
pub use record::{Shipment, ShipmentId, TrackingView};
