// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Orders as seen from the logistics side
//!
//! The backend owns orders; these types carry only the fields the
//! warehouse, courier and tracking views read.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    /// Public order identifier used in tracking links
    pub oid: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub order_status: Option<String>,
    /// Decimal amount kept as text; the backend sends it as a string
    #[serde(default, deserialize_with = "amount_text")]
    pub total: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "orderitem")]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// City, state and country joined with `, `, skipping blanks
    pub fn destination(&self) -> String {
        [&self.city, &self.state, &self.country]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Payment status upper-cased for display, empty when absent
    pub fn payment_label(&self) -> String {
        self.payment_status
            .as_deref()
            .unwrap_or_default()
            .to_uppercase()
    }
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: u64,
    #[serde(default)]
    pub product: Option<ProductRef>,
    #[serde(default)]
    pub qty: Option<u32>,
    #[serde(default)]
    pub delivery_status: Option<String>,
    #[serde(default)]
    pub tracking_id: Option<String>,
    #[serde(default, rename = "delivery_couriers")]
    pub courier: Option<ExternalCourier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    #[serde(default)]
    pub title: Option<String>,
}

/// Third-party courier a vendor shipped an item with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalCourier {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tracking_website: Option<String>,
    #[serde(default)]
    pub url_parameter: Option<String>,
}

/// Link to a third-party tracking page for one order item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalTrackingLink {
    pub order_item_id: u64,
    pub product_title: Option<String>,
    pub courier_name: Option<String>,
    pub tracking_id: String,
    pub url: String,
}

/// Build third-party tracking links for every item that has a courier
/// website, URL parameter and tracking id.
pub fn external_tracking_links(order: &Order) -> Vec<ExternalTrackingLink> {
    order
        .items
        .iter()
        .filter_map(|item| {
            let courier = item.courier.as_ref()?;
            let website = non_blank(courier.tracking_website.as_deref())?;
            let param = non_blank(courier.url_parameter.as_deref())?;
            let tracking_id = non_blank(item.tracking_id.as_deref())?;

            Some(ExternalTrackingLink {
                order_item_id: item.id,
                product_title: item.product.as_ref().and_then(|p| p.title.clone()),
                courier_name: courier.name.clone(),
                tracking_id: tracking_id.to_string(),
                url: format!(
                    "{}?{}={}",
                    website,
                    param,
                    urlencoding::encode(tracking_id)
                ),
            })
        })
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// How an assignment request identifies the order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderRef {
    Oid(String),
    Id(u64),
}

impl fmt::Display for OrderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderRef::Oid(oid) => write!(f, "{}", oid),
            OrderRef::Id(id) => write!(f, "#{}", id),
        }
    }
}

/// Accept a decimal sent either as a JSON string or a number
fn amount_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
