// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod courier;
pub mod order;
pub mod shipment;
pub mod status;

use crate::error::CliError;
use crate::output::OutputFormat;
use chrono::{DateTime, Utc};
use waybill_client::{ClientConfig, ConfigOverrides, HttpShipmentApi, TracedShipmentApi};

/// Backend client used by every online command
pub type Api = TracedShipmentApi<HttpShipmentApi>;

/// Settings shared by all commands
pub struct Context {
    pub format: OutputFormat,
    pub overrides: ConfigOverrides,
}

impl Context {
    /// Resolve configuration and build a traced HTTP client
    pub fn connect(&self) -> Result<Api, CliError> {
        let config = ClientConfig::resolve(&self.overrides).map_err(CliError::config)?;
        tracing::debug!(
            api_url = %config.api_base_url,
            has_token = config.token.is_some(),
            timeout_ms = config.timeout.as_millis() as u64,
            "resolved config"
        );
        Ok(TracedShipmentApi::new(HttpShipmentApi::new(&config)))
    }
}

/// Format a timestamp for tables, `-` when absent
pub fn timestamp(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "-".to_string())
}
