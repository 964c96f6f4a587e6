//! Auth provider adapter: session validation, sign-out, hosted login URL.
//!
//! The provider speaks the GoTrue REST dialect: `GET /auth/v1/user` resolves
//! an access token, `POST /auth/v1/logout` revokes it, and
//! `/auth/v1/authorize` hosts the OAuth login page. Every call carries the
//! public `apikey` header plus the user's bearer token.

use async_trait::async_trait;
use client::net::types::SessionUser;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::AuthConfig;
use crate::error::ProviderError;

const PROVIDER: &str = "auth";

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve the subject behind an access token.
    ///
    /// `Ok(None)` means the provider rejected the token (expired, revoked,
    /// malformed). `Err` means the provider could not be asked.
    async fn user_for_token(&self, token: &str) -> Result<Option<SessionUser>, ProviderError>;

    /// Revoke the session behind `token`.
    async fn sign_out(&self, token: &str) -> Result<(), ProviderError>;

    /// URL of the provider-hosted login page that returns to `redirect_to`.
    fn login_url(&self, redirect_to: &str) -> String;
}

#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

pub struct GoTrueAuth {
    http: reqwest::Client,
    config: AuthConfig,
}

impl GoTrueAuth {
    #[must_use]
    pub fn new(http: reqwest::Client, config: AuthConfig) -> Self {
        Self { http, config }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.config.base_url)
    }
}

#[async_trait]
impl AuthProvider for GoTrueAuth {
    async fn user_for_token(&self, token: &str) -> Result<Option<SessionUser>, ProviderError> {
        let resp = self
            .http
            .get(self.endpoint("user"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ProviderError::request(PROVIDER, &e))?;

        match resp.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Ok(None),
            status if !status.is_success() => {
                return Err(ProviderError::Status { provider: PROVIDER, status: status.as_u16() });
            }
            _ => {}
        }

        let user: ProviderUser = resp
            .json()
            .await
            .map_err(|e| ProviderError::invalid(PROVIDER, e.to_string()))?;
        Ok(Some(SessionUser { id: user.id, email: user.email }))
    }

    async fn sign_out(&self, token: &str) -> Result<(), ProviderError> {
        let resp = self
            .http
            .post(self.endpoint("logout"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ProviderError::request(PROVIDER, &e))?;
        if !resp.status().is_success() {
            return Err(ProviderError::Status { provider: PROVIDER, status: resp.status().as_u16() });
        }
        Ok(())
    }

    fn login_url(&self, redirect_to: &str) -> String {
        authorize_url(&self.config, redirect_to)
    }
}

/// Build the hosted-login URL for `config` returning to `redirect_to`.
#[must_use]
pub fn authorize_url(config: &AuthConfig, redirect_to: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("provider", &config.login_provider)
        .append_pair("redirect_to", redirect_to)
        .finish();
    format!("{}/auth/v1/authorize?{query}", config.base_url)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
