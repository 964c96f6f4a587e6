//! `GET /api/admin/overview` — dashboard summary for administrators.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::catalog::{CASE_STUDIES, SERVICES};
use client::net::types::AdminOverview;

use crate::guard::AdminUser;
use crate::state::AppState;

pub async fn overview(State(state): State<AppState>, AdminUser(admin): AdminUser) -> Result<Json<AdminOverview>, StatusCode> {
    let offers = state.store.active_offers().await.map_err(|e| {
        tracing::error!(error = %e, "admin overview offers query failed");
        StatusCode::BAD_GATEWAY
    })?;
    Ok(Json(AdminOverview {
        admin,
        active_offers: offers.len(),
        services: SERVICES.len(),
        case_studies: CASE_STUDIES.len(),
    }))
}
