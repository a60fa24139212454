//! # Session Retrieval Routes
//!
//! - `GET /api/sessions`: paginated list
//! - `GET /api/sessions/{id}`: single session with its attendance roster

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use sea_orm::{EntityTrait, QuerySelect};

use crate::response::ApiResponse;
use crate::routes::common::PaginationQuery;
use db::models::session;
use util::state::AppState;

/// GET /api/sessions?skip=0&limit=100
///
/// Statuses are refreshed from the clock before the page is returned.
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(page): Query<PaginationQuery>,
) -> impl IntoResponse {
    let rows = match session::Entity::find()
        .offset(page.skip())
        .limit(page.limit())
        .all(state.db())
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    let now = Utc::now();
    let mut refreshed = Vec::with_capacity(rows.len());
    for row in rows {
        match row.refresh_status(state.db(), now).await {
            Ok(row) => refreshed.push(row),
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
                )
                    .into_response();
            }
        }
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            refreshed,
            "Sessions retrieved successfully",
        )),
    )
        .into_response()
}

/// GET /api/sessions/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
) -> impl IntoResponse {
    match session::Entity::find_by_id(session_id).one(state.db()).await {
        Ok(Some(row)) => match row.refresh_status(state.db(), Utc::now()).await {
            Ok(row) => (
                StatusCode::OK,
                Json(ApiResponse::success(row, "Session retrieved successfully")),
            )
                .into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            )
                .into_response(),
        },
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Session not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
