// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing outcome messages

use serde::Serialize;
use std::fmt;

/// Whether an operation succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyLevel {
    Success,
    Error,
}

/// A short message to show after an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotifyLevel,
    pub title: String,
}

impl Notification {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: NotifyLevel::Success,
            title: title.into(),
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            level: NotifyLevel::Error,
            title: title.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotifyLevel::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
