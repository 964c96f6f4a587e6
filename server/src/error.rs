//! Provider error type shared by every upstream adapter.
//!
//! Route handlers never surface these to the browser verbatim; they log the
//! error and answer with the endpoint's documented degraded response.

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("{provider} request failed: {message}")]
    Request { provider: &'static str, message: String },
    #[error("{provider} returned status {status}")]
    Status { provider: &'static str, status: u16 },
    #[error("{provider} response invalid: {message}")]
    InvalidResponse { provider: &'static str, message: String },
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl ProviderError {
    pub(crate) fn request(provider: &'static str, err: &reqwest::Error) -> Self {
        Self::Request { provider, message: err.to_string() }
    }

    pub(crate) fn invalid(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidResponse { provider, message: message.into() }
    }
}
