// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! waybill - shipment status CLI for couriers and warehouse staff

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use commands::{courier, order, shipment, status, Context};
use error::CliError;
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use waybill_client::ConfigOverrides;

/// Environment variable holding the log filter
const ENV_LOG: &str = "WAYBILL_LOG";

#[derive(Parser)]
#[command(
    name = "waybill",
    version,
    about = "Waybill - shipment status transitions for couriers and warehouses"
)]
struct Cli {
    /// Backend API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Bearer token for the backend
    #[arg(long, global = true)]
    token: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the status transition table (offline)
    Status(status::StatusArgs),
    /// View and update shipments
    Shipment(shipment::ShipmentArgs),
    /// Assign and track orders
    Order(order::OrderArgs),
    /// Courier management
    Courier(courier::CourierArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(cli_err) => eprint!("{}", cli_err),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let ctx = Context {
        format: cli.format,
        overrides: ConfigOverrides {
            api_url: cli.api_url,
            token: cli.token,
            config_path: cli.config,
        },
    };

    match cli.command {
        Commands::Status(args) => return status::handle(args.command, ctx.format),
        Commands::Shipment(args) => shipment::handle(args.command, &ctx).await?,
        Commands::Order(args) => order::handle(args.command, &ctx).await?,
        Commands::Courier(args) => courier::handle(args.command, &ctx).await?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Log to stderr so stdout stays machine-readable
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}
