//! # Course Deletion Routes
//!
//! - `DELETE /api/courses/{course_id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;

use crate::response::ApiResponse;
use db::models::course;
use util::state::AppState;

/// DELETE /api/courses/{course_id}
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    match course::Entity::delete_by_id(course_id).exec(state.db()).await {
        Ok(res) if res.rows_affected == 0 => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Course not found")),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Course deleted successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
