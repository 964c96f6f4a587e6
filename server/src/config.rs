//! Application configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through a lookup function rather than `std::env` directly so
//! tests can feed a map instead of mutating process-wide environment.
//! Optional integrations (flags, payments) parse to `None` when their keys
//! are missing; the features that need them degrade instead of failing
//! startup.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const DEFAULT_SESSION_COOKIE: &str = "sb-access-token";
pub const DEFAULT_LOGIN_PROVIDER: &str = "github";
pub const DEFAULT_EXCHANGE_RATE_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";
pub const DEFAULT_FLAGS_URL: &str = "https://api.statsig.com/v1";
pub const DEFAULT_PAYMENT_API_URL: &str = "https://api.razorpay.com/v1";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Auth provider endpoint and public (anon) key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub base_url: String,
    pub anon_key: String,
    /// OAuth provider used for hosted login (e.g. `github`).
    pub login_provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagsConfig {
    pub base_url: String,
    pub server_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfig {
    pub api_url: String,
    pub key_id: String,
    pub key_secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Public origin, no trailing slash. Used for the sitemap and auth redirects.
    pub site_url: String,
    pub database_url: String,
    /// Upper bound on pooled database connections.
    pub db_max_connections: u32,
    pub auth: AuthConfig,
    pub session_cookie: String,
    pub cookie_secure: bool,
    pub exchange_rate_url: String,
    pub flags: Option<FlagsConfig>,
    pub payments: Option<PaymentConfig>,
    pub upstream_timeout: Duration,
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Required: `DATABASE_URL`, `AUTH_URL`, `AUTH_ANON_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a required key is missing or a value fails to parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let site_url = trim_url(get("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_owned()));

        let cookie_secure = match get("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "COOKIE_SECURE", value: raw })?,
            None => site_url.starts_with("https://"),
        };

        let upstream_timeout_secs = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid { key: "UPSTREAM_TIMEOUT_SECS", value: raw })?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", value: raw })?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let auth = AuthConfig {
            base_url: trim_url(require("AUTH_URL")?),
            anon_key: require("AUTH_ANON_KEY")?,
            login_provider: get("AUTH_LOGIN_PROVIDER").unwrap_or_else(|| DEFAULT_LOGIN_PROVIDER.to_owned()),
        };

        let flags = get("FLAGS_SERVER_KEY").map(|server_key| FlagsConfig {
            base_url: trim_url(get("FLAGS_URL").unwrap_or_else(|| DEFAULT_FLAGS_URL.to_owned())),
            server_key,
        });

        let payments = match (get("PAYMENT_KEY_ID"), get("PAYMENT_KEY_SECRET")) {
            (Some(key_id), Some(key_secret)) => Some(PaymentConfig {
                api_url: trim_url(get("PAYMENT_API_URL").unwrap_or_else(|| DEFAULT_PAYMENT_API_URL.to_owned())),
                key_id,
                key_secret,
            }),
            _ => None,
        };

        Ok(Self {
            port,
            site_url,
            database_url: require("DATABASE_URL")?,
            db_max_connections,
            auth,
            session_cookie: get("SESSION_COOKIE").unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_owned()),
            cookie_secure,
            exchange_rate_url: get("EXCHANGE_RATE_URL").unwrap_or_else(|| DEFAULT_EXCHANGE_RATE_URL.to_owned()),
            flags,
            payments,
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
        })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_owned()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
