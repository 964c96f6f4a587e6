//! Upstream provider adapters used by the HTTP routes and the access guard.
//!
//! ARCHITECTURE
//! ============
//! Each provider is an `async_trait` object held in `AppState` as
//! `Arc<dyn Trait>`. Production wires the reqwest/sqlx implementations;
//! tests wire in-memory mocks. Handlers decide what a failure means for the
//! response; adapters only report `ProviderError`.

pub mod auth;
pub mod flags;
pub mod payments;
pub mod rates;
pub mod store;

use std::time::Duration;

use crate::error::ProviderError;

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Build the shared HTTP client with the configured upstream timeout.
///
/// # Errors
///
/// Returns an error if the TLS backend fails to initialize.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
        .build()
        .map_err(|e| ProviderError::HttpClientBuild(e.to_string()))
}
