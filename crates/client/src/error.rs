// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors from the REST boundary

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by a [`crate::ShipmentApi`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status
    #[error("request rejected ({status}): {}", display_message(.message))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Refused before any request was sent
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    /// Message to show the user: the backend's own text when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Invalid(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Build a rejection from a raw error body, picking out `message`
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.detail));
        ApiError::Rejected { status, message }
    }
}

fn display_message(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("no message")
}

/// Error payload shape used by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    /// Framework-generated errors (auth, 404) use `detail` instead
    #[serde(default)]
    detail: Option<String>,
}
