//! Auth routes: hosted login redirect, session cookie handoff, sign-out.

use axum::extract::{FromRef, FromRequestParts, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::types::{Ack, SessionRequest, SessionUser};
use serde::Deserialize;
use time::Duration;

use crate::config::AppConfig;
use crate::context::RequestContext;
use crate::state::AppState;

const DEFAULT_NEXT: &str = "/dashboard";
const SESSION_MAX_AGE_DAYS: i64 = 7;

/// Session cookie carrying the provider access token.
pub(crate) fn session_cookie(config: &AppConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.session_cookie.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}

/// Expired replacement that clears the session cookie.
pub(crate) fn cleared_session_cookie(config: &AppConfig) -> Cookie<'static> {
    Cookie::build((config.session_cookie.clone(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(Duration::ZERO)
        .build()
}

/// Post-login destination: only same-site absolute paths, else the dashboard.
#[must_use]
pub fn safe_next(raw: Option<&str>) -> &str {
    match raw {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path,
        _ => DEFAULT_NEXT,
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user resolved from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(ctx) = RequestContext::from_request_parts(parts, state).await;
        let user = ctx.session().await.cloned().ok_or(StatusCode::UNAUTHORIZED)?;
        Ok(Self { user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginQuery {
    next: Option<String>,
}

/// `GET /auth/login` — redirect to the provider's hosted login page, which
/// returns to `/auth/callback?next=...`.
pub async fn login_redirect(State(state): State<AppState>, Query(query): Query<LoginQuery>) -> Redirect {
    let next = safe_next(query.next.as_deref());
    let callback_query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("next", next)
        .finish();
    let callback = format!("{}/auth/callback?{callback_query}", state.config.site_url);
    Redirect::temporary(&state.auth.login_url(&callback))
}

/// `POST /api/auth/session` — validate a provider token and store it in the
/// HttpOnly session cookie.
pub async fn establish_session(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<SessionRequest>,
) -> Response {
    let token = body.access_token.trim();
    if token.is_empty() {
        return (StatusCode::BAD_REQUEST, "missing access token").into_response();
    }

    match state.auth.user_for_token(token).await {
        Ok(Some(user)) => {
            tracing::info!(user_id = %user.id, "session established");
            let jar = jar.add(session_cookie(&state.config, token.to_owned()));
            (jar, Json(user)).into_response()
        }
        Ok(None) => (StatusCode::UNAUTHORIZED, "invalid access token").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "session validation failed");
            (StatusCode::BAD_GATEWAY, "auth provider unavailable").into_response()
        }
    }
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/signout` — revoke upstream, clear the cookie, always
/// acknowledge. A failed revocation is logged, never surfaced.
pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let token = jar
        .get(&state.config.session_cookie)
        .map(|c| c.value().to_owned())
        .filter(|t| !t.is_empty());
    if let Some(token) = token {
        if let Err(e) = state.auth.sign_out(&token).await {
            tracing::warn!(error = %e, "upstream sign-out failed; clearing cookie anyway");
        }
    }

    let jar = jar.add(cleared_session_cookie(&state.config));
    (jar, Json(Ack { success: true }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
