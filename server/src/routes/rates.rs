//! `GET /api/exchange-rates` — USD→INR quote with a fixed fallback.

use axum::extract::State;
use axum::http::header::CACHE_CONTROL;
use axum::response::{IntoResponse, Json, Response};
use client::net::types::RateQuote;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::services::rates::{BASE_CURRENCY, FALLBACK_RATE, QUOTE_CURRENCY};
use crate::state::AppState;

pub const LIVE_CACHE_CONTROL: &str = "public, max-age=3600, s-maxage=21600";
pub const FALLBACK_CACHE_CONTROL: &str = "no-store";

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

fn quote(rate: f64, fallback: bool) -> RateQuote {
    RateQuote {
        success: true,
        rate,
        currency: QUOTE_CURRENCY.to_owned(),
        base: BASE_CURRENCY.to_owned(),
        timestamp: now_rfc3339(),
        fallback: fallback.then_some(true),
    }
}

/// Always 200. A failed live lookup answers with [`FALLBACK_RATE`] marked
/// `fallback: true` and is not cacheable.
pub async fn exchange_rates(State(state): State<AppState>) -> Response {
    match state.rates.usd_to_inr().await {
        Ok(rate) => ([(CACHE_CONTROL, LIVE_CACHE_CONTROL)], Json(quote(rate, false))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, fallback_rate = FALLBACK_RATE, "exchange rate lookup failed");
            ([(CACHE_CONTROL, FALLBACK_CACHE_CONTROL)], Json(quote(FALLBACK_RATE, true))).into_response()
        }
    }
}
