//! # Professor Retrieval Routes
//!
//! - `GET /api/professors`: paginated list
//! - `GET /api/professors/{id}`: single professor
//! - `GET /api/professors/{id}/courses`: courses owned by the professor
//! - `GET /api/professors/{id}/sessions`: every session across those courses
//! - `GET /api/professors/{id}/sessions/current`: sessions around "now",
//!   widened by the configured tolerance buffer

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};

use crate::response::ApiResponse;
use crate::routes::common::PaginationQuery;
use crate::routes::professors::common::ProfessorResponse;
use crate::routes::sessions::common::SessionWithRosterResponse;
use db::models::{course, professor, session};
use util::{config, state::AppState};

/// GET /api/professors?skip=0&limit=100
pub async fn list_professors(
    State(state): State<AppState>,
    Query(page): Query<PaginationQuery>,
) -> impl IntoResponse {
    match professor::Entity::find()
        .offset(page.skip())
        .limit(page.limit())
        .all(state.db())
        .await
    {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows.into_iter()
                    .map(ProfessorResponse::from)
                    .collect::<Vec<_>>(),
                "Professors retrieved successfully",
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

/// GET /api/professors/{professor_id}
pub async fn get_professor(
    State(state): State<AppState>,
    Path(professor_id): Path<i64>,
) -> impl IntoResponse {
    match professor::Entity::find_by_id(professor_id).one(state.db()).await {
        Ok(Some(row)) => (
            StatusCode::OK,
            Json(ApiResponse::<ProfessorResponse>::success(
                row.into(),
                "Professor retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Professor not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /api/professors/{professor_id}/courses
pub async fn get_professor_courses(
    State(state): State<AppState>,
    Path(professor_id): Path<i64>,
) -> impl IntoResponse {
    match course::Entity::find()
        .filter(course::Column::ProfessorId.eq(professor_id))
        .all(state.db())
        .await
    {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows,
                "Courses retrieved successfully",
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

/// GET /api/professors/{professor_id}/sessions
///
/// All sessions for the professor's courses, each with its attendance roster
/// (student and group included). Session status is refreshed on read.
pub async fn get_professor_sessions(
    State(state): State<AppState>,
    Path(professor_id): Path<i64>,
) -> impl IntoResponse {
    match session::Entity::find_all_for_professor(state.db(), professor_id, Utc::now()).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows.into_iter()
                    .map(SessionWithRosterResponse::from)
                    .collect::<Vec<_>>(),
                "Sessions retrieved successfully",
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

/// GET /api/professors/{professor_id}/sessions/current
///
/// Sessions whose window, widened by the tolerance buffer on both sides,
/// contains the current time.
pub async fn get_professor_sessions_current(
    State(state): State<AppState>,
    Path(professor_id): Path<i64>,
) -> impl IntoResponse {
    let tolerance = Duration::minutes(config::session_tolerance_minutes());
    match session::Entity::find_current_for_professor(
        state.db(),
        professor_id,
        Utc::now(),
        tolerance,
    )
    .await
    {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows.into_iter()
                    .map(SessionWithRosterResponse::from)
                    .collect::<Vec<_>>(),
                "Current sessions retrieved successfully",
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
