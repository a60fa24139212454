//! # Course Update Routes
//!
//! - `PUT /api/courses/{course_id}`: Partial update

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
use crate::routes::courses::common::UpdateCourseRequest;
use db::models::{course, professor};
use util::state::AppState;

/// PUT /api/courses/{course_id}
///
/// Fields left out of the body keep their stored value.
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    Json(req): Json<UpdateCourseRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    let existing = match course::Entity::find_by_id(course_id).one(state.db()).await {
        Ok(Some(row)) => row,
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
    };

    if let Some(professor_id) = req.professor_id {
        match professor::Entity::find_by_id(professor_id).one(state.db()).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return (
                    StatusCode::NOT_FOUND,
                    Json(ApiResponse::<()>::error("Professor not found")),
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

    let mut active: course::ActiveModel = existing.into();
    if let Some(name) = req.name {
        active.name = Set(name);
    }
    if let Some(professor_id) = req.professor_id {
        active.professor_id = Set(professor_id);
    }
    active.updated_at = Set(Utc::now());

    match active.update(state.db()).await {
        Ok(row) => (
            StatusCode::OK,
            Json(ApiResponse::success(row, "Course updated successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
