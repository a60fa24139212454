//! # Professor Deletion Routes
//!
//! - `DELETE /api/professors/{professor_id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;

use crate::response::ApiResponse;
use db::models::professor;
use util::state::AppState;

/// DELETE /api/professors/{professor_id}
pub async fn delete_professor(
    State(state): State<AppState>,
    Path(professor_id): Path<i64>,
) -> impl IntoResponse {
    match professor::Entity::delete_by_id(professor_id).exec(state.db()).await {
        Ok(res) if res.rows_affected == 0 => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Professor not found")),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success(
                (),
                "Professor deleted successfully",
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
