//! # Professor Update Routes
//!
//! - `PUT /api/professors/{professor_id}`: Partial update of name and/or email

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
use crate::routes::common::unique_violation;
use crate::routes::professors::common::{ProfessorResponse, UpdateProfessorRequest};
use db::models::professor;
use util::state::AppState;

/// PUT /api/professors/{professor_id}
///
/// Fields left out of the body keep their stored value.
pub async fn update_professor(
    State(state): State<AppState>,
    Path(professor_id): Path<i64>,
    Json(req): Json<UpdateProfessorRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    let existing = match professor::Entity::find_by_id(professor_id).one(state.db()).await {
        Ok(Some(row)) => row,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Professor not found")),
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

    let mut active: professor::ActiveModel = existing.into();
    if let Some(name) = req.name {
        active.name = Set(name);
    }
    if let Some(email) = req.email {
        active.email = Set(email);
    }
    active.updated_at = Set(Utc::now());

    match active.update(state.db()).await {
        Ok(row) => (
            StatusCode::OK,
            Json(ApiResponse::<ProfessorResponse>::success(
                row.into(),
                "Professor updated successfully",
            )),
        )
            .into_response(),
        Err(e) if unique_violation(&e) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<()>::error(
                "A professor with this email already exists",
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
