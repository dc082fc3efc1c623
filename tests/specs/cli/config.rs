// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration precedence specs

use crate::prelude::*;

fn couriers_with_token<'a>(server: &'a MockServer, token: &str) -> httpmock::Mock<'a> {
    let auth = format!("Bearer {}", token);
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/warehouse/couriers/")
            .header("authorization", auth);
        then.status(200)
            .json_body(json!([{ "id": 5, "email": "rider@example.com", "full_name": "Ada Rider" }]));
    })
}

#[test]
fn config_file_supplies_url_and_token() {
    let server = MockServer::start();
    let mock = couriers_with_token(&server, "from-file");
    let sandbox = Sandbox::new();
    sandbox.file(
        "waybill.toml",
        &format!(
            "api_url = \"{}\"\ntoken = \"from-file\"\ntimeout = \"10s\"\n",
            server.url("/api/v1")
        ),
    );

    sandbox
        .waybill()
        .args(&["--config", "waybill.toml", "courier", "list"])
        .passes()
        .stdout_has("Ada Rider");

    mock.assert();
}

#[test]
fn env_token_overrides_config_file() {
    let server = MockServer::start();
    let mock = couriers_with_token(&server, "from-env");
    let sandbox = Sandbox::new();
    sandbox.file(".config/waybill/config.toml", "token = \"from-file\"\n");

    sandbox
        .against(&server)
        .env("WAYBILL_TOKEN", "from-env")
        .args(&["courier", "list"])
        .passes();

    mock.assert();
}

#[test]
fn flag_token_overrides_env() {
    let server = MockServer::start();
    let mock = couriers_with_token(&server, "from-flag");

    Sandbox::new()
        .against(&server)
        .env("WAYBILL_TOKEN", "from-env")
        .args(&["--token", "from-flag", "courier", "list"])
        .passes();

    mock.assert();
}

#[test]
fn missing_explicit_config_file_fails() {
    Sandbox::new()
        .waybill()
        .args(&["--config", "/nonexistent/waybill.toml", "courier", "list"])
        .fails()
        .stderr_has("failed to read config /nonexistent/waybill.toml");
}

#[test]
fn unknown_config_key_fails() {
    let sandbox = Sandbox::new();
    sandbox.file(".config/waybill/config.toml", "endpoint = \"http://x\"\n");

    sandbox
        .waybill()
        .args(&["courier", "list"])
        .fails()
        .stderr_has("failed to parse config");
}
