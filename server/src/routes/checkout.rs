//! Checkout routes: public payment config and order creation.
//!
//! Prices come from the server-side catalog; the browser only names the
//! service slug, so a tampered request cannot change the amount.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::catalog::{find_service, price_cents};
use client::net::types::{CheckoutOrder, CheckoutRequest};
use serde::Serialize;
use uuid::Uuid;

use crate::state::AppState;

pub const CHECKOUT_CURRENCY: &str = "USD";

#[derive(Debug, Serialize)]
pub struct PaymentsConfig<'a> {
    pub key_id: &'a str,
    pub currency: &'a str,
}

fn unavailable() -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, Json(serde_json::json!({ "error": "payments not configured" }))).into_response()
}

/// `GET /api/payments/config` — key id for the browser checkout widget.
pub async fn payments_config(State(state): State<AppState>) -> Response {
    let Some(payments) = &state.payments else {
        return unavailable();
    };
    Json(PaymentsConfig { key_id: payments.key_id(), currency: CHECKOUT_CURRENCY }).into_response()
}

/// `POST /api/checkout/order` — create a gateway order for a catalog service.
pub async fn create_order(State(state): State<AppState>, Json(body): Json<CheckoutRequest>) -> Response {
    let Some(service) = find_service(&body.service) else {
        return (StatusCode::NOT_FOUND, "unknown service").into_response();
    };
    let Some(payments) = &state.payments else {
        return unavailable();
    };

    let receipt = format!("devstudio-{}", Uuid::new_v4().simple());
    let amount = price_cents(service);
    match payments.create_order(amount, CHECKOUT_CURRENCY, &receipt).await {
        Ok(order) => {
            tracing::info!(order_id = %order.id, service = service.slug, amount, "checkout order created");
            Json(CheckoutOrder {
                order_id: order.id,
                amount: order.amount,
                currency: order.currency,
                key_id: payments.key_id().to_owned(),
                service: service.slug.to_owned(),
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, service = service.slug, "checkout order creation failed");
            (StatusCode::BAD_GATEWAY, "payment gateway unavailable").into_response()
        }
    }
}
