// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of the backend API

use super::{AssignCourier, ShipmentApi, StatusUpdate};
use crate::config::ClientConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use ureq::Agent;
use url::Url;
use waybill_core::{Order, Shipment, ShipmentId, ShipmentStatus, TrackingView, UserLite};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
}

/// Talks to the backend over HTTP.
///
/// Requests run on the blocking pool so callers can await them without
/// stalling the runtime.
#[derive(Clone)]
pub struct HttpShipmentApi {
    agent: Agent,
    base_url: Url,
    token: Option<String>,
}

impl HttpShipmentApi {
    pub fn new(config: &ClientConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            // Error bodies carry the message shown to the user
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.api_base_url.clone(),
            token: config.token.clone(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    async fn request<T>(&self, method: Method, url: Url, body: Option<Value>) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        let agent = self.agent.clone();
        let token = self.token.clone();

        let text = tokio::task::spawn_blocking(move || {
            execute(&agent, method, url.as_str(), token.as_deref(), body.as_ref())
        })
        .await
        .map_err(|e| ApiError::Transport(format!("request task failed: {}", e)))??;

        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path)?;
        self.request(Method::Get, url, None).await
    }

    fn to_body<B: serde::Serialize>(body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::Invalid(e.to_string()))
    }
}

/// Run one request and return the body of a 2xx response
fn execute(
    agent: &Agent,
    method: Method,
    url: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> Result<String, ApiError> {
    let auth = token.map(|t| format!("Bearer {}", t));

    let result = match method {
        Method::Get => {
            let mut request = agent.get(url).header("Accept", "application/json");
            if let Some(auth) = &auth {
                request = request.header("Authorization", auth.as_str());
            }
            request.call()
        }
        Method::Post | Method::Patch => {
            let mut request = if method == Method::Post {
                agent.post(url)
            } else {
                agent.patch(url)
            };
            request = request.header("Accept", "application/json");
            if let Some(auth) = &auth {
                request = request.header("Authorization", auth.as_str());
            }
            request.send_json(body.unwrap_or(&Value::Null))
        }
    };

    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let text = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !(200..300).contains(&status) {
        return Err(ApiError::rejected(status, &text));
    }
    Ok(text)
}

#[async_trait]
impl ShipmentApi for HttpShipmentApi {
    async fn list_couriers(&self) -> Result<Vec<UserLite>, ApiError> {
        self.get("warehouse/couriers/").await
    }

    async fn unassigned_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("warehouse/orders/unassigned/").await
    }

    async fn list_shipments(
        &self,
        status: Option<ShipmentStatus>,
    ) -> Result<Vec<Shipment>, ApiError> {
        let mut url = self.url("warehouse/shipments/")?;
        if let Some(status) = status {
            url.query_pairs_mut().append_pair("status", status.as_str());
        }
        self.request(Method::Get, url, None).await
    }

    async fn assign_courier(&self, request: &AssignCourier) -> Result<Shipment, ApiError> {
        let url = self.url("warehouse/assign/")?;
        let body = Self::to_body(request)?;
        self.request(Method::Post, url, Some(body)).await
    }

    async fn my_shipments(&self) -> Result<Vec<Shipment>, ApiError> {
        self.get("warehouse/courier/my-shipments/").await
    }

    async fn get_shipment(&self, id: ShipmentId) -> Result<Shipment, ApiError> {
        self.get(&format!("warehouse/courier/shipment/{}/", id)).await
    }

    async fn update_status(
        &self,
        id: ShipmentId,
        update: &StatusUpdate,
    ) -> Result<Shipment, ApiError> {
        let url = self.url(&format!("warehouse/courier/shipment/{}/status/", id))?;
        let body = Self::to_body(update)?;
        self.request(Method::Patch, url, Some(body)).await
    }

    async fn track_order(&self, oid: &str) -> Result<TrackingView, ApiError> {
        if oid.trim().is_empty() {
            return Err(ApiError::Invalid("order id is required".to_string()));
        }
        self.get(&format!("warehouse/track/order/{}/", urlencoding::encode(oid)))
            .await
    }
}
