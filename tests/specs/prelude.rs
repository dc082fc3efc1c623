// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs

#![allow(dead_code)]

pub use httpmock::prelude::*;
pub use httpmock::Method::PATCH;
pub use serde_json::json;

use assert_cmd::assert::Assert;
use std::path::Path;
use tempfile::TempDir;

/// Isolated home directory so no real config or env leaks into a run
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the sandbox root
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Build a waybill invocation
    pub fn waybill(&self) -> Cli {
        let mut cmd = assert_cmd::Command::cargo_bin("waybill").unwrap();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env_remove("WAYBILL_API_URL")
            .env_remove("WAYBILL_TOKEN")
            .env_remove("WAYBILL_TIMEOUT_MS")
            .env_remove("WAYBILL_LOG")
            .env_remove("RUST_LOG");
        Cli { cmd, _sandbox: None }
    }

    /// Build a waybill invocation that keeps this sandbox alive until it runs
    pub fn into_waybill(self) -> Cli {
        let mut cli = self.waybill();
        cli._sandbox = Some(self);
        cli
    }

    /// Build a waybill invocation pointed at `server`
    pub fn against(&self, server: &MockServer) -> Cli {
        self.waybill().args(&["--api-url", &server.url("/api/v1/")])
    }
}

pub struct Cli {
    cmd: assert_cmd::Command,
    _sandbox: Option<Sandbox>,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and expect exit code 0
    pub fn passes(mut self) -> Run {
        Run(self.cmd.assert().success())
    }

    /// Run and expect exit code 1
    pub fn fails(mut self) -> Run {
        Run(self.cmd.assert().code(1))
    }

    /// Run and expect a specific exit code
    pub fn exits(mut self, code: i32) -> Run {
        Run(self.cmd.assert().code(code))
    }
}

pub struct Run(Assert);

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stderr).to_string()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout missing {:?}\n--- stdout ---\n{}",
            expected,
            stdout
        );
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout has {:?}\n--- stdout ---\n{}",
            unexpected,
            stdout
        );
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr missing {:?}\n--- stderr ---\n{}",
            expected,
            stderr
        );
        self
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout is JSON")
    }
}

/// Shipment payload as the backend serializes it
pub fn shipment_json(id: u64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "order": order_json(&format!("ord-{}", id)),
        "courier": { "id": 5, "email": "rider@example.com", "username": "rider", "full_name": "Ada Rider" },
        "assigned_by": { "id": 2, "email": "wh@example.com", "username": "wh", "full_name": "Warehouse Lead" },
        "status": status,
        "assigned_at": "2026-03-01T09:00:00Z",
        "picked_up_at": null,
        "delivered_at": null,
        "created_at": "2026-03-01T08:00:00Z",
        "updated_at": "2026-03-01T09:00:00Z",
        "events": [
            {
                "id": id * 100 + 1,
                "event_type": "assigned",
                "message": "Assigned to courier user_id=5",
                "created_by": { "id": 2, "email": "wh@example.com", "username": "wh", "full_name": "Warehouse Lead" },
                "created_at": "2026-03-01T09:00:00Z"
            }
        ]
    })
}

/// Order payload as the backend serializes it
pub fn order_json(oid: &str) -> serde_json::Value {
    json!({
        "id": 40,
        "oid": oid,
        "full_name": "Grace Buyer",
        "address": "12 Harbour Road",
        "city": "Portsmouth",
        "state": "Hampshire",
        "country": "UK",
        "payment_status": "paid",
        "total": "59.90",
    })
}
