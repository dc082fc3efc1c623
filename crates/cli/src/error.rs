// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use std::fmt;
use waybill_client::{ApiError, AssignError, ConfigError, UpdateError};
use waybill_core::{allowed_next, ShipmentStatus};

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

fn known_statuses() -> String {
    ShipmentStatus::ALL
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Common error builders for typical failure scenarios.
impl CliError {
    /// A status name that is not one of the known statuses
    pub fn unknown_status(value: &str) -> Self {
        CliError::new(format!("Unknown shipment status '{}'", value))
            .with_context(format!("Known statuses: {}", known_statuses()))
            .with_suggestion("List the transition table: waybill status transitions")
    }

    /// The guard refused a status change
    pub fn transition_denied(from: &str, to: ShipmentStatus) -> Self {
        let err = CliError::new(format!("Cannot change status from '{}' to '{}'", from, to));
        match from.parse::<ShipmentStatus>() {
            Ok(current) if allowed_next(current).is_empty() => {
                err.with_context(format!("'{}' is a final status", current))
            }
            Ok(current) => err
                .with_context(format!(
                    "Allowed from '{}': {}",
                    current,
                    allowed_next(current)
                        .iter()
                        .map(|s| s.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
                .with_suggestion(format!("Check a move first: waybill status check {} {}", from, to)),
            Err(_) => err.with_context(format!("'{}' is not a status this client knows", from)),
        }
    }

    /// A backend call failed
    pub fn api(action: &str, fallback: &str, error: ApiError) -> Self {
        let mut err = CliError::new(format!("{}: {}", action, error.user_message(fallback)));
        err = match &error {
            ApiError::Rejected { status: 401, .. } | ApiError::Rejected { status: 403, .. } => err
                .with_context("The backend refused the credentials")
                .with_suggestion("Pass a token with --token or set WAYBILL_TOKEN"),
            ApiError::Rejected { status: 404, .. } => {
                err.with_context("The backend has no such record")
            }
            ApiError::Transport(detail) => err
                .with_context(detail.clone())
                .with_suggestion("Check the backend address with --api-url or WAYBILL_API_URL"),
            ApiError::Decode(detail) => {
                err.with_context(format!("Unexpected response: {}", detail))
            }
            _ => err,
        };
        err.with_source(error)
    }

    /// Settings could not be resolved
    pub fn config(error: ConfigError) -> Self {
        CliError::new(error.to_string())
            .with_suggestion("Fix the value, or pass --api-url and --token directly")
            .with_source(error)
    }
}

impl From<UpdateError> for CliError {
    fn from(error: UpdateError) -> Self {
        match error {
            UpdateError::TransitionNotAllowed { from, to } => CliError::transition_denied(&from, to),
            UpdateError::Rejected { message, source } => {
                CliError::new(message).with_source(source)
            }
            other => CliError::new(other.notification().title),
        }
    }
}

impl From<AssignError> for CliError {
    fn from(error: AssignError) -> Self {
        match error {
            AssignError::MissingCourier => CliError::new(error.to_string())
                .with_suggestion("List couriers: waybill courier list"),
            AssignError::MissingOrder => CliError::new(error.to_string())
                .with_suggestion("List unassigned orders: waybill order unassigned"),
            AssignError::Rejected { message, source } => {
                CliError::new(message).with_source(source)
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
