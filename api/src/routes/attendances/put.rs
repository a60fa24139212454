//! # Attendance Update Routes
//!
//! - `PUT /api/attendances/{attendance_id}`: Correct a recorded row

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::attendances::common::UpdateAttendanceRequest;
use db::models::attendance;
use util::state::AppState;

/// PUT /api/attendances/{attendance_id}
///
/// Fields left out of the body keep their stored value. Session and student
/// bindings are immutable; delete and re-create to move a row.
pub async fn update_attendance(
    State(state): State<AppState>,
    Path(attendance_id): Path<i64>,
    Json(req): Json<UpdateAttendanceRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    let existing = match attendance::Entity::find_by_id(attendance_id).one(state.db()).await {
        Ok(Some(row)) => row,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Attendance not found")),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    let mut active: attendance::ActiveModel = existing.into();
    if let Some(status) = req.status {
        active.status = Set(status);
    }
    if let Some(time) = req.time {
        active.time = Set(time);
    }
    active.updated_at = Set(Utc::now());

    match active.update(state.db()).await {
        Ok(row) => (
            StatusCode::OK,
            Json(ApiResponse::success(row, "Attendance updated successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
