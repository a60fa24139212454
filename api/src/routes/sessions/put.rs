//! # Session Update Routes
//!
//! - `PUT /api/sessions/{session_id}`: Partial update of the schedule fields

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
use crate::routes::sessions::common::UpdateSessionRequest;
use db::models::session;
use util::state::AppState;

/// PUT /api/sessions/{session_id}
///
/// Fields left out of the body keep their stored value. The cached status is
/// re-derived from the (possibly moved) window.
pub async fn update_session(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
    Json(req): Json<UpdateSessionRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    let existing = match session::Entity::find_by_id(session_id).one(state.db()).await {
        Ok(Some(row)) => row,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Session not found")),
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

    let merged = session::Model {
        course_id: req.course_id.unwrap_or(existing.course_id),
        room: req.room.unwrap_or_else(|| existing.room.clone()),
        date: req.date.unwrap_or(existing.date),
        start_time: req.start_time.unwrap_or(existing.start_time),
        end_time: req.end_time.unwrap_or(existing.end_time),
        ..existing.clone()
    };
    if merged.end_time <= merged.start_time {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("end_time must be after start_time")),
        )
            .into_response();
    }

    let now = Utc::now();
    let status = merged.derived_status(now);

    let mut active: session::ActiveModel = existing.into();
    active.course_id = Set(merged.course_id);
    active.room = Set(merged.room);
    active.date = Set(merged.date);
    active.start_time = Set(merged.start_time);
    active.end_time = Set(merged.end_time);
    active.status = Set(status);
    active.updated_at = Set(now);

    match active.update(state.db()).await {
        Ok(row) => (
            StatusCode::OK,
            Json(ApiResponse::success(row, "Session updated successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
