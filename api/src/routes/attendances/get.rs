//! # Attendance Retrieval Routes
//!
//! - `GET /api/attendances`: paginated list, optionally filtered by session
//! - `GET /api/attendances/{id}`: single attendance row

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};
use serde::Deserialize;

use crate::response::ApiResponse;
use db::models::attendance;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListAttendancesQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub session_id: Option<i64>,
    pub student_id: Option<i64>,
}

/// GET /api/attendances?skip=0&limit=100&session_id=&student_id=
pub async fn list_attendances(
    State(state): State<AppState>,
    Query(query): Query<ListAttendancesQuery>,
) -> impl IntoResponse {
    let mut select = attendance::Entity::find();
    if let Some(session_id) = query.session_id {
        select = select.filter(attendance::Column::SessionId.eq(session_id));
    }
    if let Some(student_id) = query.student_id {
        select = select.filter(attendance::Column::StudentId.eq(student_id));
    }

    match select
        .offset(query.skip.unwrap_or(0))
        .limit(query.limit.unwrap_or(100))
        .all(state.db())
        .await
    {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows,
                "Attendances retrieved successfully",
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

/// GET /api/attendances/{attendance_id}
pub async fn get_attendance(
    State(state): State<AppState>,
    Path(attendance_id): Path<i64>,
) -> impl IntoResponse {
    match attendance::Entity::find_by_id(attendance_id).one(state.db()).await {
        Ok(Some(row)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                row,
                "Attendance retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Attendance not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
