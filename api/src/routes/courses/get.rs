//! # Course Retrieval Routes
//!
//! - `GET /api/courses`: paginated list
//! - `GET /api/courses/{id}`: single course
//! - `GET /api/courses/{id}/groups`: groups linked to the course

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{EntityTrait, ModelTrait, QuerySelect};

use crate::response::ApiResponse;
use crate::routes::common::PaginationQuery;
use db::models::{course, group};
use util::state::AppState;

/// GET /api/courses?skip=0&limit=100
pub async fn list_courses(
    State(state): State<AppState>,
    Query(page): Query<PaginationQuery>,
) -> impl IntoResponse {
    match course::Entity::find()
        .offset(page.skip())
        .limit(page.limit())
        .all(state.db())
        .await
    {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Courses retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /api/courses/{course_id}
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    match course::Entity::find_by_id(course_id).one(state.db()).await {
        Ok(Some(row)) => (
            StatusCode::OK,
            Json(ApiResponse::success(row, "Course retrieved successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Course not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /api/courses/{course_id}/groups
///
/// Traverses the join table via the many-to-many relation.
pub async fn get_course_groups(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    let course = match course::Entity::find_by_id(course_id).one(state.db()).await {
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

    match course.find_related(group::Entity).all(state.db()).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Groups retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
