// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! waybill-core: shipment domain for the Waybill logistics client
//!
//! This crate provides:
//! - The shipment status set and its transition guard
//! - Wire types for shipments, orders and users
//! - Per-shipment busy tracking for outbound mutations

pub mod inflight;
pub mod order;
pub mod shipment;
pub mod status;
pub mod transition;
pub mod user;

#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;

// Re-exports
pub use inflight::{InFlight, InFlightPermit};
pub use order::{external_tracking_links, ExternalTrackingLink, Order, OrderItem, OrderRef};
pub use shipment::{EventType, Shipment, ShipmentEvent, ShipmentId, StatusCounts, TrackingView};
pub use status::{ParseStatusError, ShipmentStatus};
pub use transition::{allowed_next, is_terminal, is_transition_allowed, is_transition_allowed_str};
pub use user::UserLite;
