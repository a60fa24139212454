//! # Group Retrieval Routes
//!
//! - `GET /api/groups`: paginated list
//! - `GET /api/groups/{id}`: single group
//! - `GET /api/groups/{id}/students`: students enrolled in the group

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};

use crate::response::ApiResponse;
use crate::routes::common::PaginationQuery;
use db::models::{group, student};
use util::state::AppState;

/// GET /api/groups?skip=0&limit=100
pub async fn list_groups(
    State(state): State<AppState>,
    Query(page): Query<PaginationQuery>,
) -> impl IntoResponse {
    match group::Entity::find()
        .offset(page.skip())
        .limit(page.limit())
        .all(state.db())
        .await
    {
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

/// GET /api/groups/{group_id}
pub async fn get_group(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
) -> impl IntoResponse {
    match group::Entity::find_by_id(group_id).one(state.db()).await {
        Ok(Some(row)) => (
            StatusCode::OK,
            Json(ApiResponse::success(row, "Group retrieved successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Group not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /api/groups/{group_id}/students
pub async fn get_group_students(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
) -> impl IntoResponse {
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

    match student::Entity::find()
        .filter(student::Column::GroupId.eq(group_id))
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
