//! # Student Creation Routes
//!
//! - `POST /api/students`: Register a student and their RFID card

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::common::unique_violation;
use crate::routes::students::common::CreateStudentRequest;
use db::models::{group, student};
use util::state::AppState;

/// POST /api/students
///
/// ### Responses
/// - 201 Created
/// - 400 Bad Request — validation failure
/// - 404 Not Found — group does not exist
/// - 409 Conflict — RFID card already registered
pub async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    match group::Entity::find_by_id(req.group_id).one(state.db()).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Group not found")),
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
    let active = student::ActiveModel {
        name: Set(req.name),
        group_id: Set(req.group_id),
        rfid_card_id: Set(req.rfid_card_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match active.insert(state.db()).await {
        Ok(row) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(row, "Student created successfully")),
        )
            .into_response(),
        Err(e) if unique_violation(&e) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<()>::error(
                "A student with this RFID card already exists",
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
