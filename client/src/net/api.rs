//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so upstream
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AdminOverview, CheckoutOrder, FlagCheck, Offer, RateQuote, SessionUser, Todo};

#[cfg(any(test, feature = "hydrate"))]
fn flag_endpoint(gate: &str) -> String {
    format!("/api/flags/{gate}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

#[cfg(not(feature = "hydrate"))]
const SERVER_UNAVAILABLE: &str = "not available on server";

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign out via `POST /api/auth/signout`. The server always acknowledges.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/signout")
            .send()
            .await;
    }
}

/// Hand the provider's access token to `POST /api/auth/session`, which sets
/// the HttpOnly session cookie.
///
/// # Errors
///
/// Returns an error string if the request fails or the token is rejected.
pub async fn establish_session(access_token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::SessionRequest { access_token: access_token.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/session")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("session", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Fetch active offers from `/api/special-offers`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server reports failure.
pub async fn fetch_offers() -> Result<Vec<Offer>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/special-offers")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("offers", resp.status()));
        }
        let body: super::types::OffersResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.offers)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Fetch the USD→INR quote from `/api/exchange-rates`.
pub async fn fetch_rate() -> Option<RateQuote> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/exchange-rates")
            .send()
            .await
            .ok()?;
        resp.json::<RateQuote>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Check a feature gate via `/api/flags/{gate}`.
pub async fn check_flag(gate: &str) -> Option<FlagCheck> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&flag_endpoint(gate))
            .send()
            .await
            .ok()?;
        resp.json::<FlagCheck>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = gate;
        None
    }
}

/// Fetch the signed-in user's todos from `/api/todos`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_todos() -> Result<Vec<Todo>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/todos")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("todos", resp.status()));
        }
        let body: super::types::TodosResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.todos)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Fetch the admin overview from `/api/admin/overview`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_admin_overview() -> Result<AdminOverview, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/overview")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("admin overview", resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Create a payment order for a catalog service via `POST /api/checkout/order`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn create_order(service: &str) -> Result<CheckoutOrder, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::CheckoutRequest { service: service.to_owned() };
        let resp = gloo_net::http::Request::post("/api/checkout/order")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("checkout", resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = service;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}
