//! # Session Creation Routes
//!
//! - `POST /api/sessions`: Schedule a class session

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::sessions::common::CreateSessionRequest;
use db::models::{course, session};
use util::state::AppState;

/// POST /api/sessions
///
/// The stored status is derived from the window at creation time; it is a
/// cache and gets recomputed on every read.
///
/// ### Responses
/// - 201 Created
/// - 400 Bad Request — validation failure or inverted time window
/// - 404 Not Found — course does not exist
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }
    if req.end_time <= req.start_time {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("end_time must be after start_time")),
        )
            .into_response();
    }

    match course::Entity::find_by_id(req.course_id).one(state.db()).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Course not found")),
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
    }

    let now = Utc::now();
    let probe = session::Model {
        id: 0,
        course_id: req.course_id,
        room: req.room.clone(),
        date: req.date,
        start_time: req.start_time,
        end_time: req.end_time,
        status: session::Status::NotStarted,
        created_at: now,
        updated_at: now,
    };
    let status = probe.derived_status(now);

    let active = session::ActiveModel {
        course_id: Set(req.course_id),
        room: Set(req.room),
        date: Set(req.date),
        start_time: Set(req.start_time),
        end_time: Set(req.end_time),
        status: Set(status),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match active.insert(state.db()).await {
        Ok(row) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(row, "Session created successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
