//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API, crawler files and the Leptos SSR app under
//! a single Axum router. Protected pages sit behind the guard middleware so
//! they never render for a rejected request. A panic anywhere in a handler
//! or during SSR becomes the full-page apology instead of a dropped
//! connection.

pub mod admin;
pub mod auth;
pub mod checkout;
pub mod flags;
pub mod offers;
pub mod rates;
pub mod seo;
pub mod todos;

use std::any::Any;
use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::guard::{admin_gate, session_gate};
use crate::state::AppState;

pub const APOLOGY_TITLE: &str = "Something went wrong";

/// JSON API, auth redirects, crawler files and health check.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route("/auth/login", get(auth::login_redirect))
        .route("/api/auth/session", post(auth::establish_session))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/signout", post(auth::sign_out))
        .route("/api/exchange-rates", get(rates::exchange_rates))
        .route("/api/special-offers", get(offers::special_offers))
        .route("/api/flags/{gate}", get(flags::check_flag))
        .route("/api/todos", get(todos::list_todos))
        .route("/api/admin/overview", get(admin::overview))
        .route("/api/payments/config", get(checkout::payments_config))
        .route("/api/checkout/order", post(checkout::create_order))
        .route("/robots.txt", get(seo::robots))
        .route("/sitemap.xml", get(seo::sitemap))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Wrap `router` with the global layers: panic apology, compression, request tracing.
pub fn with_global_layers(router: Router) -> Router {
    router
        .layer(CompressionLayer::new())
        .layer(CatchPanicLayer::custom(apology))
        .layer(TraceLayer::new_for_http())
}

/// Full app: API routes + guarded Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone())
        .layer(middleware::from_fn_with_state(state.clone(), admin_gate))
        .layer(middleware::from_fn_with_state(state.clone(), session_gate));

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(with_global_layers(
        api_routes(state)
            .merge(leptos_router)
            .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))),
    ))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

fn panic_message(err: &(dyn Any + Send)) -> &str {
    if let Some(s) = err.downcast_ref::<String>() {
        s
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    }
}

/// Global failure handler. The panic message is logged, never shown.
fn apology(err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(panic = panic_message(err.as_ref()), "request handler panicked");
    let html = format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
         <title>{APOLOGY_TITLE}</title></head><body>\
         <main class=\"apology\"><h1>{APOLOGY_TITLE}</h1>\
         <p>We hit an unexpected error while loading this page.</p>\
         <button type=\"button\" onclick=\"window.location.reload()\">Try again</button>\
         </main></body></html>"
    );
    (StatusCode::INTERNAL_SERVER_ERROR, [(CONTENT_TYPE, "text/html; charset=utf-8")], html).into_response()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
