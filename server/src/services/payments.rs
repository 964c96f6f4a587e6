//! Payment gateway: order creation with the secret key pair.
//!
//! Only the key id is ever exposed to the browser; the secret stays in this
//! adapter. There is no built-in test key: without both keys configured the
//! gateway is simply absent and checkout answers 503.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::PaymentConfig;
use crate::error::ProviderError;

const PROVIDER: &str = "payments";

/// Order as acknowledged by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: u64,
    pub currency: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Public key id for the browser checkout widget.
    fn key_id(&self) -> &str;

    /// Create an order for `amount` minor units of `currency`.
    async fn create_order(&self, amount: u64, currency: &str, receipt: &str) -> Result<GatewayOrder, ProviderError>;
}

#[derive(Debug, Serialize)]
struct OrderRequest<'a> {
    amount: u64,
    currency: &'a str,
    receipt: &'a str,
}

pub struct HttpPaymentGateway {
    http: reqwest::Client,
    config: PaymentConfig,
}

impl HttpPaymentGateway {
    #[must_use]
    pub fn new(http: reqwest::Client, config: PaymentConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    fn key_id(&self) -> &str {
        &self.config.key_id
    }

    async fn create_order(&self, amount: u64, currency: &str, receipt: &str) -> Result<GatewayOrder, ProviderError> {
        let resp = self
            .http
            .post(format!("{}/orders", self.config.api_url))
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&OrderRequest { amount, currency, receipt })
            .send()
            .await
            .map_err(|e| ProviderError::request(PROVIDER, &e))?;
        if !resp.status().is_success() {
            return Err(ProviderError::Status { provider: PROVIDER, status: resp.status().as_u16() });
        }
        resp.json::<GatewayOrder>()
            .await
            .map_err(|e| ProviderError::invalid(PROVIDER, e.to_string()))
    }
}
