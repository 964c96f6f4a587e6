//! Shared DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server serializes these exact types in its JSON handlers, so the
//! browser and the API agree on one schema. All of them are transient value
//! objects: fetched per request or render, never cached or mutated.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Subject resolved from the auth provider for the current session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Provider-assigned subject identifier (UUID string).
    pub id: String,
    /// Primary email, when the provider exposes one.
    #[serde(default)]
    pub email: Option<String>,
}

/// Row of the administrator registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRecord {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Promotional offer shown on the offers page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub description: String,
    pub discount_percent: i32,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub valid_until: Option<String>,
    pub active: bool,
}

/// Per-user todo item from the data store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub done: bool,
}

/// Entry of the static service catalog.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceItem {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    /// Starting price in whole US dollars.
    pub price_usd: u32,
    pub features: &'static [&'static str],
}

/// Portfolio case study.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaseStudy {
    pub slug: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub summary: &'static str,
    pub outcome: &'static str,
    pub stack: &'static [&'static str],
}

/// Body of `GET /api/exchange-rates`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    pub success: bool,
    pub rate: f64,
    pub currency: String,
    pub base: String,
    pub timestamp: String,
    /// Present (and `true`) only when the live source failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
}

impl RateQuote {
    /// Whether this quote carries the fallback rate instead of a live one.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback.unwrap_or(false)
    }
}

/// Body of `GET /api/special-offers` on success.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OffersResponse {
    pub offers: Vec<Offer>,
    pub success: bool,
}

/// Body of `GET /api/flags/{gate}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagCheck {
    pub gate: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
}

/// Request body of `POST /api/checkout/order`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub service: String,
}

/// Gateway order created for a checkout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOrder {
    pub order_id: String,
    /// Amount in the currency's minor unit (cents).
    pub amount: u64,
    pub currency: String,
    /// Public key id the browser checkout widget needs.
    pub key_id: String,
    pub service: String,
}

/// Generic `{ success }` acknowledgement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

/// Body of `GET /api/todos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosResponse {
    pub todos: Vec<Todo>,
}

/// Body of `GET /api/admin/overview`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub admin: AdminRecord,
    pub active_offers: usize,
    pub services: usize,
    pub case_studies: usize,
}

/// Request body of `POST /api/auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    pub access_token: String,
}
