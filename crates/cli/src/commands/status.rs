// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status commands: the transition table, offline

use crate::error::CliError;
use crate::output::{self, OutputFormat};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::fmt;
use std::process::ExitCode;
use waybill_core::{allowed_next, is_terminal, is_transition_allowed, ShipmentStatus};

/// Exit code for a move the guard denies
pub const EXIT_DENIED: u8 = 2;

#[derive(Args)]
pub struct StatusArgs {
    #[command(subcommand)]
    pub command: StatusCommand,
}

#[derive(Subcommand)]
pub enum StatusCommand {
    /// Show which statuses may follow which
    Transitions,
    /// Check whether a status change may be requested (exit 2 when denied)
    Check {
        /// Current status
        from: String,
        /// Requested status
        to: String,
        /// Treat the shipment as having an update in flight
        #[arg(long)]
        busy: bool,
    },
}

pub fn handle(command: StatusCommand, format: OutputFormat) -> anyhow::Result<ExitCode> {
    match command {
        StatusCommand::Transitions => {
            output::print(&TransitionTable::build(), format)?;
            Ok(ExitCode::SUCCESS)
        }
        StatusCommand::Check { from, to, busy } => {
            let to: ShipmentStatus = to.parse().map_err(|_| CliError::unknown_status(&to))?;
            let verdict = Verdict::check(&from, to, busy);
            output::print(&verdict, format)?;
            Ok(if verdict.allowed {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_DENIED)
            })
        }
    }
}

#[derive(Serialize)]
struct TransitionRow {
    status: ShipmentStatus,
    label: &'static str,
    next: &'static [ShipmentStatus],
    terminal: bool,
}

#[derive(Serialize)]
#[serde(transparent)]
struct TransitionTable(Vec<TransitionRow>);

impl TransitionTable {
    fn build() -> Self {
        Self(
            ShipmentStatus::ALL
                .into_iter()
                .map(|status| TransitionRow {
                    status,
                    label: status.label(),
                    next: allowed_next(status),
                    terminal: is_terminal(status),
                })
                .collect(),
        )
    }
}

impl fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<20} {:<20} NEXT", "STATUS", "LABEL")?;
        for row in &self.0 {
            let next = if row.next.is_empty() {
                "-".to_string()
            } else {
                row.next
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            writeln!(f, "{:<20} {:<20} {}", row.status, row.label, next)?;
        }
        Ok(())
    }
}

/// Outcome of `status check`
#[derive(Serialize)]
struct Verdict {
    from: String,
    to: ShipmentStatus,
    busy: bool,
    allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

impl Verdict {
    fn check(from: &str, to: ShipmentStatus, busy: bool) -> Self {
        let current = from.parse::<ShipmentStatus>().ok();
        let allowed = is_transition_allowed(current, to, busy);
        let reason = match current {
            _ if allowed => None,
            None => Some("unknown current status"),
            Some(_) if busy => Some("an update is already in flight"),
            Some(current) if current == to => Some("already in that status"),
            Some(current) if is_terminal(current) => Some("current status is final"),
            Some(_) => Some("not in the transition table"),
        };
        Self {
            from: from.to_string(),
            to,
            busy,
            allowed,
            reason,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            None => writeln!(f, "allowed: {} -> {}", self.from, self.to),
            Some(reason) => writeln!(f, "denied: {} -> {} ({})", self.from, self.to, reason),
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
