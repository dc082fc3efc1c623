// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error reporting specs

use crate::prelude::*;

#[test]
fn unreachable_backend_suggests_checking_address() {
    Sandbox::new()
        .waybill()
        .args(&["--api-url", "http://127.0.0.1:9/api/v1/", "courier", "list"])
        .fails()
        .stderr_has("error: Listing failed: Failed to load couriers")
        .stderr_has("suggestions:")
        .stderr_has("--api-url");
}

#[test]
fn invalid_api_url_is_reported() {
    Sandbox::new()
        .waybill()
        .args(&["--api-url", "ftp://example.com", "courier", "list"])
        .fails()
        .stderr_has("invalid API url 'ftp://example.com'");
}

#[test]
fn unauthorized_suggests_token() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/warehouse/couriers/");
        then.status(401)
            .json_body(json!({ "detail": "Authentication credentials were not provided." }));
    });

    Sandbox::new()
        .against(&server)
        .args(&["courier", "list"])
        .fails()
        .stderr_has("Authentication credentials were not provided.")
        .stderr_has("WAYBILL_TOKEN");
}
