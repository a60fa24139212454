//! # Group Deletion Routes
//!
//! - `DELETE /api/groups/{group_id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;

use crate::response::ApiResponse;
use db::models::group;
use util::state::AppState;

/// DELETE /api/groups/{group_id}
pub async fn delete_group(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
) -> impl IntoResponse {
    match group::Entity::delete_by_id(group_id).exec(state.db()).await {
        Ok(res) if res.rows_affected == 0 => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Group not found")),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Group deleted successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
