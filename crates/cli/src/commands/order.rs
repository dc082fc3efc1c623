// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Order commands: assignment and tracking

use super::{timestamp, Context};
use crate::error::CliError;
use crate::output::{self, or_dash, truncate};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::fmt;
use waybill_client::{assign_courier, Notification, ShipmentApi};
use waybill_core::{external_tracking_links, ExternalTrackingLink, Order, OrderRef, Shipment, TrackingView};

#[derive(Args)]
pub struct OrderArgs {
    #[command(subcommand)]
    pub command: OrderCommand,
}

#[derive(Subcommand)]
pub enum OrderCommand {
    /// List paid orders that still need a courier
    Unassigned,
    /// Assign a courier to an order
    Assign {
        /// Public order id (or numeric id with --by-id)
        order: String,
        /// Courier user id
        #[arg(long)]
        courier: Option<u64>,
        /// Treat ORDER as the numeric order id
        #[arg(long)]
        by_id: bool,
    },
    /// Show an order's shipment progress
    Track {
        /// Public order id
        oid: String,
    },
}

pub async fn handle(command: OrderCommand, ctx: &Context) -> anyhow::Result<()> {
    match command {
        OrderCommand::Unassigned => {
            let api = ctx.connect()?;
            let orders = api
                .unassigned_orders()
                .await
                .map_err(|e| CliError::api("Listing failed", "Failed to load orders", e))?;
            output::print(&OrderList(orders), ctx.format)
        }
        OrderCommand::Assign {
            order,
            courier,
            by_id,
        } => {
            let order = order_ref(&order, by_id)?;
            let api = ctx.connect()?;
            let (shipment, notification) = assign_courier(&api, &order, courier)
                .await
                .map_err(CliError::from)?;
            output::print(
                &AssignView {
                    notification,
                    shipment,
                },
                ctx.format,
            )
        }
        OrderCommand::Track { oid } => {
            let api = ctx.connect()?;
            let view = api
                .track_order(&oid)
                .await
                .map_err(|e| CliError::api("Tracking failed", "Order not found", e))?;
            output::print(&TrackView::new(view), ctx.format)
        }
    }
}

fn order_ref(order: &str, by_id: bool) -> Result<OrderRef, CliError> {
    if !by_id {
        return Ok(OrderRef::Oid(order.trim().to_string()));
    }
    order
        .trim()
        .parse()
        .map(OrderRef::Id)
        .map_err(|_| CliError::new(format!("'{}' is not a numeric order id", order)))
}

#[derive(Serialize)]
#[serde(transparent)]
struct OrderList(Vec<Order>);

impl fmt::Display for OrderList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No unassigned orders");
        }
        writeln!(
            f,
            "{:<14} {:<20} {:<30} {:<8} TOTAL",
            "OID", "CUSTOMER", "DESTINATION", "PAYMENT"
        )?;
        for order in &self.0 {
            writeln!(
                f,
                "{:<14} {:<20} {:<30} {:<8} {}",
                truncate(&order.oid, 14),
                truncate(or_dash(order.full_name.as_deref()), 20),
                truncate(or_dash(Some(order.destination().as_str())), 30),
                or_dash(Some(order.payment_label().as_str())),
                or_dash(order.total.as_deref())
            )?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct AssignView {
    notification: Notification,
    shipment: Shipment,
}

impl fmt::Display for AssignView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.notification)?;
        let courier = self.shipment.courier.as_ref().map(|c| c.display_name());
        writeln!(
            f,
            "Shipment {} for order {} assigned to {}",
            self.shipment.id,
            or_dash(self.shipment.order_oid()),
            or_dash(courier.as_deref())
        )
    }
}

#[derive(Serialize)]
struct TrackView {
    #[serde(flatten)]
    view: TrackingView,
    external_links: Vec<ExternalTrackingLink>,
}

impl TrackView {
    fn new(view: TrackingView) -> Self {
        let external_links = external_tracking_links(&view.order);
        Self {
            view,
            external_links,
        }
    }
}

impl fmt::Display for TrackView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = &self.view.order;
        writeln!(f, "Order {}", order.oid)?;
        writeln!(f, "  Customer:  {}", or_dash(order.full_name.as_deref()))?;
        writeln!(f, "  Ship to:   {}", or_dash(Some(order.destination().as_str())))?;

        match &self.view.shipment {
            None => writeln!(f, "  Shipment:  not created yet")?,
            Some(s) => {
                let status = s
                    .status()
                    .map_or(s.status.as_str(), |status| status.label());
                writeln!(f, "  Shipment:  {} ({})", s.id, status)?;
                let courier = s.courier.as_ref().map(|c| c.display_name());
                writeln!(f, "  Courier:   {}", or_dash(courier.as_deref()))?;
                writeln!(f, "  Delivered: {}", timestamp(s.delivered_at))?;
                for event in s.timeline() {
                    writeln!(
                        f,
                        "    {}  {:<17} {}",
                        timestamp(Some(event.created_at)),
                        event.event_type,
                        or_dash(event.message.as_deref())
                    )?;
                }
            }
        }

        if !self.external_links.is_empty() {
            writeln!(f)?;
            writeln!(f, "Carrier tracking:")?;
            for link in &self.external_links {
                writeln!(
                    f,
                    "  {} via {}: {}",
                    or_dash(link.product_title.as_deref()),
                    or_dash(link.courier_name.as_deref()),
                    link.url
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
