//! # Group Creation Routes
//!
//! - `POST /api/groups`: Create a student group

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::groups::common::CreateGroupRequest;
use db::models::group;
use util::state::AppState;

/// POST /api/groups
pub async fn create_group(
    State(state): State<AppState>,
    Json(req): Json<CreateGroupRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    let now = Utc::now();
    let active = group::ActiveModel {
        code: Set(req.code),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match active.insert(state.db()).await {
        Ok(row) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(row, "Group created successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
