//! Feature-gate service.
//!
//! Gates are evaluated server-side with the secret server key so the key
//! never reaches the browser. Requests follow the hosted gate API:
//! `POST {base}/check_gate` with `{ gateName, user: { userID } }`,
//! answered by `{ name, value }`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::FlagsConfig;
use crate::error::ProviderError;

const PROVIDER: &str = "flags";
const ANONYMOUS_USER: &str = "anonymous";
const MAX_GATE_NAME_LEN: usize = 64;

#[async_trait]
pub trait FlagService: Send + Sync {
    /// Whether `gate` is enabled for `user_id` (anonymous when `None`).
    async fn check_gate(&self, gate: &str, user_id: Option<&str>) -> Result<bool, ProviderError>;
}

/// Gate names are short lowercase identifiers: `[a-z0-9_-]{1,64}`.
#[must_use]
pub fn is_valid_gate_name(gate: &str) -> bool {
    !gate.is_empty()
        && gate.len() <= MAX_GATE_NAME_LEN
        && gate
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GateRequest<'a> {
    gate_name: &'a str,
    user: GateUser<'a>,
}

#[derive(Debug, Serialize)]
struct GateUser<'a> {
    #[serde(rename = "userID")]
    user_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct GateResponse {
    value: bool,
}

pub struct HttpFlagService {
    http: reqwest::Client,
    config: FlagsConfig,
}

impl HttpFlagService {
    #[must_use]
    pub fn new(http: reqwest::Client, config: FlagsConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl FlagService for HttpFlagService {
    async fn check_gate(&self, gate: &str, user_id: Option<&str>) -> Result<bool, ProviderError> {
        let body = GateRequest { gate_name: gate, user: GateUser { user_id: user_id.unwrap_or(ANONYMOUS_USER) } };
        let resp = self
            .http
            .post(format!("{}/check_gate", self.config.base_url))
            .header("statsig-api-key", &self.config.server_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::request(PROVIDER, &e))?;
        if !resp.status().is_success() {
            return Err(ProviderError::Status { provider: PROVIDER, status: resp.status().as_u16() });
        }
        let gate: GateResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::invalid(PROVIDER, e.to_string()))?;
        Ok(gate.value)
    }
}
