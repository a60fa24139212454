//! # Course Creation Routes
//!
//! - `POST /api/courses`: Create a course
//! - `POST /api/courses/{course_id}/groups/{group_id}`: Link a group to a course

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
use crate::routes::courses::common::CreateCourseRequest;
use db::models::{course, course_group, group, professor};
use util::state::AppState;

/// POST /api/courses
///
/// ### Responses
/// - 201 Created
/// - 400 Bad Request — validation failure
/// - 404 Not Found — professor does not exist
pub async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CreateCourseRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    match professor::Entity::find_by_id(req.professor_id).one(state.db()).await {
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

    let now = Utc::now();
    let active = course::ActiveModel {
        name: Set(req.name),
        professor_id: Set(req.professor_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match active.insert(state.db()).await {
        Ok(row) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(row, "Course created successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// POST /api/courses/{course_id}/groups/{group_id}
///
/// Idempotent at the storage level: linking the same pair twice yields
/// 409 Conflict from the unique index, not a duplicate row.
pub async fn add_group_to_course(
    State(state): State<AppState>,
    Path((course_id, group_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    let course_exists = course::Entity::find_by_id(course_id).one(state.db()).await;
    let group_exists = group::Entity::find_by_id(group_id).one(state.db()).await;
    match (course_exists, group_exists) {
        (Ok(Some(_)), Ok(Some(_))) => {}
        (Ok(None), _) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Course not found")),
            )
                .into_response();
        }
        (_, Ok(None)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Group not found")),
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

    let active = course_group::ActiveModel {
        course_id: Set(course_id),
        group_id: Set(group_id),
        ..Default::default()
    };

    match active.insert(state.db()).await {
        Ok(row) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(row, "Group added to course successfully")),
        )
            .into_response(),
        Err(e) if unique_violation(&e) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<()>::error(
                "Group is already linked to this course",
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
