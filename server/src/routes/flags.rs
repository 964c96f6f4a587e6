//! `GET /api/flags/{gate}` — server-side feature-gate check.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::FlagCheck;

use crate::context::RequestContext;
use crate::services::flags::is_valid_gate_name;
use crate::state::AppState;

fn fallback(gate: String) -> FlagCheck {
    FlagCheck { gate, enabled: false, fallback: Some(true) }
}

/// Evaluates the gate for the signed-in subject, or anonymously. An
/// unconfigured or failing flag service answers disabled with `fallback`.
pub async fn check_flag(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(gate): Path<String>,
) -> Result<Json<FlagCheck>, StatusCode> {
    if !is_valid_gate_name(&gate) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let Some(flags) = &state.flags else {
        return Ok(Json(fallback(gate)));
    };

    let user_id = ctx.session().await.map(|u| u.id.clone());
    match flags.check_gate(&gate, user_id.as_deref()).await {
        Ok(enabled) => Ok(Json(FlagCheck { gate, enabled, fallback: None })),
        Err(e) => {
            tracing::warn!(error = %e, %gate, "feature gate check failed");
            Ok(Json(fallback(gate)))
        }
    }
}
