// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal user projection returned by the backend

use serde::{Deserialize, Serialize};
use std::fmt;

/// A courier, warehouse manager or customer as the backend exposes them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLite {
    pub id: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl UserLite {
    /// Best available name: full name, then username, then email, then the id
    pub fn display_name(&self) -> String {
        [&self.full_name, &self.username, &self.email]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| format!("user #{}", self.id))
    }
}

impl fmt::Display for UserLite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
