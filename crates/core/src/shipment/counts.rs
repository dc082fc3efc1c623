// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-status shipment tallies for the warehouse overview

use super::record::Shipment;
use crate::status::ShipmentStatus;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Number of shipments in each status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub by_status: BTreeMap<ShipmentStatus, usize>,
}

impl StatusCounts {
    /// Count shipments by status.
    ///
    /// Every known status gets an entry, zero included. Shipments with an
    /// unknown status count toward `total` only.
    pub fn tally(shipments: &[Shipment]) -> Self {
        let mut by_status: BTreeMap<ShipmentStatus, usize> =
            ShipmentStatus::ALL.into_iter().map(|s| (s, 0)).collect();

        for status in shipments.iter().filter_map(Shipment::status) {
            *by_status.entry(status).or_default() += 1;
        }

        Self {
            total: shipments.len(),
            by_status,
        }
    }

    pub fn get(&self, status: ShipmentStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

impl fmt::Display for StatusCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<20} {}", "Total", self.total)?;
        for (status, count) in &self.by_status {
            writeln!(f, "{:<20} {}", status.label(), count)?;
        }
        Ok(())
    }
}
