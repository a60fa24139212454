//! # Session Deletion Routes
//!
//! - `DELETE /api/sessions/{session_id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;

use crate::response::ApiResponse;
use db::models::session;
use util::state::AppState;

/// DELETE /api/sessions/{session_id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
) -> impl IntoResponse {
    match session::Entity::delete_by_id(session_id).exec(state.db()).await {
        Ok(res) if res.rows_affected == 0 => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Session not found")),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Session deleted successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
