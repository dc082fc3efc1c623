// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Courier commands

use super::Context;
use crate::error::CliError;
use crate::output::{self, or_dash};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::fmt;
use waybill_client::ShipmentApi;
use waybill_core::UserLite;

#[derive(Args)]
pub struct CourierArgs {
    #[command(subcommand)]
    pub command: CourierCommand,
}

#[derive(Subcommand)]
pub enum CourierCommand {
    /// List active couriers
    List,
}

pub async fn handle(command: CourierCommand, ctx: &Context) -> anyhow::Result<()> {
    match command {
        CourierCommand::List => {
            let api = ctx.connect()?;
            let couriers = api
                .list_couriers()
                .await
                .map_err(|e| CliError::api("Listing failed", "Failed to load couriers", e))?;
            output::print(&CourierList(couriers), ctx.format)
        }
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct CourierList(Vec<UserLite>);

impl fmt::Display for CourierList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No couriers");
        }
        writeln!(f, "{:<6} {:<24} EMAIL", "ID", "NAME")?;
        for courier in &self.0 {
            writeln!(
                f,
                "{:<6} {:<24} {}",
                courier.id,
                courier.display_name(),
                or_dash(courier.email.as_deref())
            )?;
        }
        Ok(())
    }
}
