// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shipment commands

use super::{timestamp, Api, Context};
use crate::error::CliError;
use crate::output::{self, or_dash, truncate};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::fmt;
use waybill_client::{ApiError, Notification, ShipmentApi, ShipmentBoard, ShipmentDetail};
use waybill_core::{InFlight, Shipment, ShipmentId, ShipmentStatus};

#[derive(Args)]
pub struct ShipmentArgs {
    #[command(subcommand)]
    pub command: ShipmentCommand,
}

#[derive(Subcommand)]
pub enum ShipmentCommand {
    /// Show one shipment with its timeline
    Show {
        /// Shipment id
        id: u64,
    },
    /// List all shipments with per-status totals
    List {
        /// Only shipments in this status
        #[arg(long)]
        status: Option<String>,
    },
    /// List shipments assigned to the signed-in courier
    Mine,
    /// Request a status change
    Update {
        /// Shipment id
        id: u64,
        /// Requested status
        status: String,
        /// Note recorded on the timeline
        #[arg(long)]
        note: Option<String>,
    },
}

pub async fn handle(command: ShipmentCommand, ctx: &Context) -> anyhow::Result<()> {
    let api = ctx.connect()?;
    match command {
        ShipmentCommand::Show { id } => {
            let shipment = fetch(&api, ShipmentId(id)).await?;
            output::print(&ShipmentView(&shipment), ctx.format)
        }
        ShipmentCommand::List { status } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            let board = ShipmentBoard::load(&api, status)
                .await
                .map_err(|e| CliError::api("Listing failed", "Failed to load shipments", e))?;
            output::print(&BoardView(&board), ctx.format)
        }
        ShipmentCommand::Mine => {
            let board = ShipmentBoard::load_mine(&api)
                .await
                .map_err(|e| CliError::api("Listing failed", "Failed to load shipments", e))?;
            output::print(&BoardView(&board), ctx.format)
        }
        ShipmentCommand::Update { id, status, note } => {
            let target = parse_status(&status)?;
            let shipment = fetch(&api, ShipmentId(id)).await?;

            let mut detail = ShipmentDetail::with_shipment(api, shipment, InFlight::new());
            if let Some(note) = note {
                detail.set_note(note);
            }
            let notification = detail.update_status(target).await.map_err(CliError::from)?;

            let Some(shipment) = detail.shipment() else {
                return Err(CliError::new("Shipment not loaded").into());
            };
            output::print(
                &UpdateView {
                    notification,
                    shipment,
                },
                ctx.format,
            )
        }
    }
}

fn parse_status(value: &str) -> Result<ShipmentStatus, CliError> {
    value.parse().map_err(|_| CliError::unknown_status(value))
}

/// Fetch one shipment.
///
/// Backends without the single-shipment route answer 404, so the courier's
/// own list is searched before giving up.
async fn fetch(api: &Api, id: ShipmentId) -> Result<Shipment, CliError> {
    let not_found = |e: ApiError| CliError::api("Lookup failed", "Shipment not found", e);
    match api.get_shipment(id).await {
        Ok(shipment) => Ok(shipment),
        Err(e) if e.is_not_found() => {
            tracing::debug!(shipment_id = %id, "searching assigned shipments");
            let mine = api.my_shipments().await.map_err(not_found)?;
            mine.into_iter()
                .find(|s| s.id == id)
                .ok_or_else(|| not_found(e))
        }
        Err(e) => Err(not_found(e)),
    }
}

fn status_text(shipment: &Shipment) -> String {
    match shipment.status() {
        Some(status) => format!("{} ({})", status.label(), status),
        None => format!("{} (unknown)", shipment.status),
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct ShipmentView<'a>(&'a Shipment);

impl fmt::Display for ShipmentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "Shipment {}", s.id)?;
        writeln!(f, "  Status:    {}", status_text(s))?;
        if let Some(order) = &s.order {
            writeln!(
                f,
                "  Order:     {} ({})",
                order.oid,
                or_dash(order.full_name.as_deref())
            )?;
            writeln!(
                f,
                "  Ship to:   {}, {}",
                or_dash(order.address.as_deref()),
                order.destination()
            )?;
        }
        let courier = s.courier.as_ref().map(|c| c.display_name());
        writeln!(f, "  Courier:   {}", or_dash(courier.as_deref()))?;
        writeln!(f, "  Assigned:  {}", timestamp(s.assigned_at))?;
        writeln!(f, "  Picked up: {}", timestamp(s.picked_up_at))?;
        writeln!(f, "  Delivered: {}", timestamp(s.delivered_at))?;

        let next = s.available_targets(false);
        if next.is_empty() {
            writeln!(f, "  Next:      -")?;
        } else {
            let next: Vec<_> = next.iter().map(|t| t.as_str()).collect();
            writeln!(f, "  Next:      {}", next.join(", "))?;
        }

        let timeline = s.timeline();
        if !timeline.is_empty() {
            writeln!(f)?;
            writeln!(f, "Timeline:")?;
            for event in timeline {
                let by = event.created_by.as_ref().map(|u| u.display_name());
                writeln!(
                    f,
                    "  {}  {:<17} {}  ({})",
                    timestamp(Some(event.created_at)),
                    event.event_type,
                    or_dash(event.message.as_deref()),
                    or_dash(by.as_deref())
                )?;
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct BoardView<'a>(&'a ShipmentBoard);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        if board.shipments.is_empty() {
            return writeln!(f, "No shipments");
        }

        writeln!(
            f,
            "{:<6} {:<18} {:<14} {:<20} UPDATED",
            "ID", "STATUS", "ORDER", "COURIER"
        )?;
        for s in &board.shipments {
            let courier = s.courier.as_ref().map(|c| c.display_name());
            writeln!(
                f,
                "{:<6} {:<18} {:<14} {:<20} {}",
                s.id,
                truncate(&s.status, 18),
                truncate(or_dash(s.order_oid()), 14),
                truncate(or_dash(courier.as_deref()), 20),
                timestamp(s.updated_at)
            )?;
        }
        writeln!(f)?;
        write!(f, "{}", board.counts)
    }
}

#[derive(Serialize)]
struct UpdateView<'a> {
    notification: Notification,
    shipment: &'a Shipment,
}

impl fmt::Display for UpdateView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.notification)?;
        writeln!(
            f,
            "Shipment {} is now {}",
            self.shipment.id,
            status_text(self.shipment)
        )
    }
}

#[cfg(test)]
#[path = "shipment_tests.rs"]
mod tests;
