//! # Professor Creation Routes
//!
//! - `POST /api/professors`: Register a professor account

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::common::unique_violation;
use crate::routes::professors::common::{CreateProfessorRequest, ProfessorResponse};
use db::models::professor;
use util::state::AppState;

/// POST /api/professors
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "password": "securepassword"
/// }
/// ```
///
/// ### Responses
/// - 201 Created — full professor object (excluding password hash)
/// - 400 Bad Request — validation failure
/// - 409 Conflict — duplicate email
pub async fn create_professor(
    State(state): State<AppState>,
    Json(req): Json<CreateProfessorRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    match professor::Model::create(state.db(), &req.name, &req.email, &req.password).await {
        Ok(row) => (
            StatusCode::CREATED,
            Json(ApiResponse::<ProfessorResponse>::success(
                row.into(),
                "Professor created successfully",
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
