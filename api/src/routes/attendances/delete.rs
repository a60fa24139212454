//! # Attendance Deletion Routes
//!
//! - `DELETE /api/attendances/{attendance_id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;

use crate::response::ApiResponse;
use db::models::attendance;
use util::state::AppState;

/// DELETE /api/attendances/{attendance_id}
pub async fn delete_attendance(
    State(state): State<AppState>,
    Path(attendance_id): Path<i64>,
) -> impl IntoResponse {
    match attendance::Entity::delete_by_id(attendance_id).exec(state.db()).await {
        Ok(res) if res.rows_affected == 0 => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Attendance not found")),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success(
                (),
                "Attendance deleted successfully",
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
