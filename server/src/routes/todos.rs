//! `GET /api/todos` — the signed-in user's todos.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::TodosResponse;

use super::auth::AuthUser;
use crate::state::AppState;

pub async fn list_todos(State(state): State<AppState>, auth: AuthUser) -> Result<Json<TodosResponse>, StatusCode> {
    let todos = state.store.todos_for(&auth.user.id).await.map_err(|e| {
        tracing::error!(error = %e, user_id = %auth.user.id, "todos query failed");
        StatusCode::BAD_GATEWAY
    })?;
    Ok(Json(TodosResponse { todos }))
}
