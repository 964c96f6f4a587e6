//! Per-request context handed to guards and handlers.
//!
//! DESIGN
//! ======
//! One `RequestContext` is built per request from the session cookie and the
//! shared state. The session is resolved against the auth provider at most
//! once per request and never cached across requests. A provider failure
//! resolves to "no session": callers that need a session fail closed.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use client::net::types::SessionUser;
use tokio::sync::OnceCell;

use crate::services::store::DataStore;
use crate::state::AppState;

pub struct RequestContext {
    path: String,
    token: Option<String>,
    state: AppState,
    session: OnceCell<Option<SessionUser>>,
}

impl RequestContext {
    #[must_use]
    pub fn new(state: AppState, path: impl Into<String>, token: Option<String>) -> Self {
        let token = token.filter(|t| !t.is_empty());
        Self { path: path.into(), token, state, session: OnceCell::new() }
    }

    /// Build from request headers, reading the configured session cookie.
    #[must_use]
    pub fn from_headers(state: AppState, path: impl Into<String>, headers: &HeaderMap) -> Self {
        let jar = CookieJar::from_headers(headers);
        let token = jar.get(&state.config.session_cookie).map(|c| c.value().to_owned());
        Self::new(state, path, token)
    }

    /// Path and query of the request, e.g. `/admin?tab=offers`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn DataStore> {
        &self.state.store
    }

    /// The signed-in user, or `None` when there is no valid session.
    pub async fn session(&self) -> Option<&SessionUser> {
        self.session
            .get_or_init(|| async {
                let token = self.token.as_deref()?;
                match self.state.auth.user_for_token(token).await {
                    Ok(user) => user,
                    Err(e) => {
                        tracing::warn!(error = %e, "session lookup failed; treating request as signed out");
                        None
                    }
                }
            })
            .await
            .as_ref()
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts
            .uri
            .path_and_query()
            .map_or_else(|| parts.uri.path().to_owned(), |pq| pq.as_str().to_owned());
        Ok(Self::from_headers(AppState::from_ref(state), path, &parts.headers))
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
