//! Access guard for protected pages and admin APIs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `admin_gate` and `session_gate` run in front of the SSR router; each acts
//! only on its own path prefix. `/admin` requires a session
//! whose subject is in the administrator registry; `/dashboard` requires any
//! session. Rejections are 307 redirects: no session goes to the login page
//! (carrying the original path as `next`), a non-admin or a failed registry
//! lookup goes to `/`. The guard fails closed: nothing is rendered unless
//! the check positively succeeds.

use axum::extract::{FromRef, FromRequestParts, Request, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use client::net::types::{AdminRecord, SessionUser};

use crate::context::RequestContext;
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/login";

/// Why a request was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardRejection {
    /// No valid session; send to login and come back to `next` afterwards.
    Login { next: String },
    /// Signed in but not allowed (or the check could not be completed).
    Root,
}

impl GuardRejection {
    /// Redirect target for this rejection.
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            Self::Login { next } => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("next", next)
                    .finish();
                format!("{LOGIN_PATH}?{query}")
            }
            Self::Root => "/".to_owned(),
        }
    }

    /// Status for JSON endpoints, which answer instead of redirecting.
    #[must_use]
    pub fn api_status(&self) -> StatusCode {
        match self {
            Self::Login { .. } => StatusCode::UNAUTHORIZED,
            Self::Root => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for GuardRejection {
    fn into_response(self) -> Response {
        Redirect::temporary(&self.location()).into_response()
    }
}

/// Access level a path requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    Public,
    Session,
    Admin,
}

fn under(path: &str, prefix: &str) -> bool {
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

#[must_use]
pub fn protection_for(path: &str) -> Protection {
    if under(path, "/admin") {
        Protection::Admin
    } else if under(path, "/dashboard") {
        Protection::Session
    } else {
        Protection::Public
    }
}

// =============================================================================
// CHECKS
// =============================================================================

/// Require any valid session.
///
/// # Errors
///
/// `Login` when the request carries no valid session.
pub async fn require_session(ctx: &RequestContext) -> Result<SessionUser, GuardRejection> {
    ctx.session()
        .await
        .cloned()
        .ok_or_else(|| GuardRejection::Login { next: ctx.path().to_owned() })
}

/// Require a session whose subject is a registered administrator.
///
/// # Errors
///
/// `Login` without a session; `Root` when the user is not an admin or the
/// registry lookup fails.
pub async fn require_admin(ctx: &RequestContext) -> Result<AdminRecord, GuardRejection> {
    let user = require_session(ctx).await?;
    match ctx.store().find_admin(&user.id).await {
        Ok(Some(admin)) => Ok(admin),
        Ok(None) => {
            tracing::info!(user_id = %user.id, path = ctx.path(), "non-admin denied");
            Err(GuardRejection::Root)
        }
        Err(e) => {
            tracing::error!(error = %e, user_id = %user.id, "admin lookup failed; denying");
            Err(GuardRejection::Root)
        }
    }
}

/// Check `ctx` against the protection its path requires.
///
/// # Errors
///
/// The rejection of the failed check.
pub async fn check(ctx: &RequestContext, protection: Protection) -> Result<(), GuardRejection> {
    match protection {
        Protection::Public => Ok(()),
        Protection::Session => require_session(ctx).await.map(|_| ()),
        Protection::Admin => require_admin(ctx).await.map(|_| ()),
    }
}

// =============================================================================
// MIDDLEWARE
// =============================================================================

/// Redirect `/admin` and `/admin/*` unless the request is from an admin.
pub async fn admin_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    gate(state, Protection::Admin, request, next).await
}

/// Redirect `/dashboard` and `/dashboard/*` unless the request has a session.
pub async fn session_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    gate(state, Protection::Session, request, next).await
}

async fn gate(state: AppState, level: Protection, request: Request, next: Next) -> Response {
    if protection_for(request.uri().path()) != level {
        return next.run(request).await;
    }

    let path = request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().path().to_owned(), |pq| pq.as_str().to_owned());
    let ctx = RequestContext::from_headers(state, path, request.headers());
    match check(&ctx, level).await {
        Ok(()) => next.run(request).await,
        Err(rejection) => rejection.into_response(),
    }
}

// =============================================================================
// ADMIN EXTRACTOR
// =============================================================================

/// Registered administrator behind the request. Use as a handler parameter
/// on admin JSON endpoints; rejects with 401 or 403.
pub struct AdminUser(pub AdminRecord);

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(ctx) = RequestContext::from_request_parts(parts, state).await;
        let admin = require_admin(&ctx).await.map_err(|r| r.api_status())?;
        Ok(Self(admin))
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
