//! # Student Update Routes
//!
//! - `PUT /api/students/{student_id}`: Partial update

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
use crate::routes::common::unique_violation;
use crate::routes::students::common::UpdateStudentRequest;
use db::models::{group, student};
use util::state::AppState;

/// PUT /api/students/{student_id}
///
/// Fields left out of the body keep their stored value. Reassigning the RFID
/// card to a value another student holds yields 409 Conflict.
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
    Json(req): Json<UpdateStudentRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    let existing = match student::Entity::find_by_id(student_id).one(state.db()).await {
        Ok(Some(row)) => row,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Student not found")),
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

    if let Some(group_id) = req.group_id {
        match group::Entity::find_by_id(group_id).one(state.db()).await {
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
    }

    let mut active: student::ActiveModel = existing.into();
    if let Some(name) = req.name {
        active.name = Set(name);
    }
    if let Some(group_id) = req.group_id {
        active.group_id = Set(group_id);
    }
    if let Some(card) = req.rfid_card_id {
        active.rfid_card_id = Set(card);
    }
    active.updated_at = Set(Utc::now());

    match active.update(state.db()).await {
        Ok(row) => (
            StatusCode::OK,
            Json(ApiResponse::success(row, "Student updated successfully")),
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
