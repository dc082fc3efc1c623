// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! waybill-client: talks to the logistics backend
//!
//! This crate provides:
//! - The [`ShipmentApi`] boundary with HTTP, traced and fake implementations
//! - Configuration resolution from flags, environment and file
//! - The shipment detail controller that gates status updates
//! - Warehouse assignment and overview helpers

pub mod api;
pub mod config;
pub mod detail;
pub mod error;
pub mod notify;
pub mod warehouse;

pub use api::{AssignCourier, HttpShipmentApi, ShipmentApi, StatusUpdate, TracedShipmentApi};
pub use config::{ClientConfig, ConfigError, ConfigOverrides};
pub use detail::{ShipmentDetail, UpdateError};
pub use error::ApiError;
pub use notify::{Notification, NotifyLevel};
pub use warehouse::{assign_courier, AssignError, AssignmentContext, ShipmentBoard};

#[cfg(any(test, feature = "test-support"))]
pub use api::{ApiCall, FakeShipmentApi};
