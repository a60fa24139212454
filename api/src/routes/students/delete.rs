//! # Student Deletion Routes
//!
//! - `DELETE /api/students/{student_id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;

use crate::response::ApiResponse;
use db::models::student;
use util::state::AppState;

/// DELETE /api/students/{student_id}
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    match student::Entity::delete_by_id(student_id).exec(state.db()).await {
        Ok(res) if res.rows_affected == 0 => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Student not found")),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Student deleted successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
