//! `GET /api/special-offers` — active promotional offers from the data store.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::net::types::OffersResponse;

use crate::state::AppState;

pub const OFFERS_ERROR: &str = "Failed to fetch special offers";

/// Upstream errors are logged; the client only sees a generic message.
pub async fn special_offers(State(state): State<AppState>) -> Response {
    match state.store.active_offers().await {
        Ok(offers) => Json(OffersResponse { offers, success: true }).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "special offers query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({ "success": false, "error": OFFERS_ERROR })))
                .into_response()
        }
    }
}
