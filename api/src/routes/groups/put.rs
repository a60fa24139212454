//! # Group Update Routes
//!
//! - `PUT /api/groups/{group_id}`: Partial update

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
use crate::routes::groups::common::UpdateGroupRequest;
use db::models::group;
use util::state::AppState;

/// PUT /api/groups/{group_id}
///
/// Fields left out of the body keep their stored value.
pub async fn update_group(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
    Json(req): Json<UpdateGroupRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    let existing = match group::Entity::find_by_id(group_id).one(state.db()).await {
        Ok(Some(row)) => row,
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
    };

    let mut active: group::ActiveModel = existing.into();
    if let Some(code) = req.code {
        active.code = Set(code);
    }
    active.updated_at = Set(Utc::now());

    match active.update(state.db()).await {
        Ok(row) => (
            StatusCode::OK,
            Json(ApiResponse::success(row, "Group updated successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
