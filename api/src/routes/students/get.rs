//! # Student Retrieval Routes
//!
//! - `GET /api/students`: paginated list
//! - `GET /api/students/{id}`: single student

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{EntityTrait, QuerySelect};

use crate::response::ApiResponse;
use crate::routes::common::PaginationQuery;
use db::models::student;
use util::state::AppState;

/// GET /api/students?skip=0&limit=100
pub async fn list_students(
    State(state): State<AppState>,
    Query(page): Query<PaginationQuery>,
) -> impl IntoResponse {
    match student::Entity::find()
        .offset(page.skip())
        .limit(page.limit())
        .all(state.db())
        .await
    {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Students retrieved successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /api/students/{student_id}
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    match student::Entity::find_by_id(student_id).one(state.db()).await {
        Ok(Some(row)) => (
            StatusCode::OK,
            Json(ApiResponse::success(row, "Student retrieved successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Student not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
