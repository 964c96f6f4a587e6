//! USD→INR exchange-rate source.
//!
//! The live source is a public JSON feed shaped like
//! `{ "base": "USD", "rates": { "INR": 83.12, ... } }`. The route layer
//! substitutes [`FALLBACK_RATE`] when this source fails.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::ProviderError;

const PROVIDER: &str = "rates";

/// Rate served when the live source is unavailable.
pub const FALLBACK_RATE: f64 = 83.0;
pub const QUOTE_CURRENCY: &str = "INR";
pub const BASE_CURRENCY: &str = "USD";

#[async_trait]
pub trait RateSource: Send + Sync {
    /// Current INR per 1 USD.
    async fn usd_to_inr(&self) -> Result<f64, ProviderError>;
}

#[derive(Debug, Deserialize)]
struct RatesFeed {
    rates: HashMap<String, f64>,
}

/// Pull the INR rate out of a feed body, rejecting absent or nonsensical values.
pub(crate) fn parse_inr(body: &str) -> Result<f64, ProviderError> {
    let feed: RatesFeed = serde_json::from_str(body).map_err(|e| ProviderError::invalid(PROVIDER, e.to_string()))?;
    let rate = feed
        .rates
        .get(QUOTE_CURRENCY)
        .copied()
        .ok_or_else(|| ProviderError::invalid(PROVIDER, "no INR rate in feed"))?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(ProviderError::invalid(PROVIDER, format!("implausible INR rate {rate}")));
    }
    Ok(rate)
}

pub struct HttpRateSource {
    http: reqwest::Client,
    url: String,
}

impl HttpRateSource {
    #[must_use]
    pub fn new(http: reqwest::Client, url: String) -> Self {
        Self { http, url }
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn usd_to_inr(&self) -> Result<f64, ProviderError> {
        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ProviderError::request(PROVIDER, &e))?;
        if !resp.status().is_success() {
            return Err(ProviderError::Status { provider: PROVIDER, status: resp.status().as_u16() });
        }
        let body = resp.text().await.map_err(|e| ProviderError::request(PROVIDER, &e))?;
        parse_inr(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_inr_reads_rate() {
        let rate = parse_inr(r#"{"base":"USD","rates":{"EUR":0.92,"INR":83.42}}"#).unwrap();
        assert!((rate - 83.42).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_inr_missing_currency_is_error() {
        assert!(parse_inr(r#"{"rates":{"EUR":0.92}}"#).is_err());
    }

    #[test]
    fn parse_inr_rejects_non_positive() {
        assert!(parse_inr(r#"{"rates":{"INR":0}}"#).is_err());
        assert!(parse_inr(r#"{"rates":{"INR":-3.5}}"#).is_err());
    }

    #[test]
    fn parse_inr_rejects_garbage() {
        assert!(parse_inr("<html>rate limited</html>").is_err());
    }
}
