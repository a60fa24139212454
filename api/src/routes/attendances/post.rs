//! # Attendance Creation Routes
//!
//! - `POST /api/attendances`: Manually record an attendance row
//!
//! This is the administrative path; readers go through `/scan`.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use sea_orm::EntityTrait;
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::attendances::common::CreateAttendanceRequest;
use crate::routes::common::unique_violation;
use db::models::{attendance, session, student};
use util::state::AppState;

/// POST /api/attendances
///
/// ### Responses
/// - 201 Created
/// - 404 Not Found — session or student does not exist
/// - 409 Conflict — the student is already recorded for this session
pub async fn create_attendance(
    State(state): State<AppState>,
    Json(req): Json<CreateAttendanceRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    let session_exists = session::Entity::find_by_id(req.session_id).one(state.db()).await;
    let student_exists = student::Entity::find_by_id(req.student_id).one(state.db()).await;
    match (session_exists, student_exists) {
        (Ok(Some(_)), Ok(Some(_))) => {}
        (Ok(None), _) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Session not found")),
            )
                .into_response();
        }
        (_, Ok(None)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Student not found")),
            )
                .into_response();
        }
        (Err(e), _) | (_, Err(e)) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    }

    let time = req.time.unwrap_or_else(Utc::now);
    match attendance::Model::create(state.db(), req.session_id, req.student_id, req.status, time)
        .await
    {
        Ok(row) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(row, "Attendance created successfully")),
        )
            .into_response(),
        Err(e) if unique_violation(&e) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<()>::error(
                "Student is already recorded for this session",
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
