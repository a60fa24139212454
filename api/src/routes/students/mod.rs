use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_student;
use get::{get_student, list_students};
use post::create_student;
use put::update_student;

/// Routes under `/api/students`.
pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student))
        .route("/", get(list_students))
        .route("/{student_id}", get(get_student))
        .route("/{student_id}", put(update_student))
        .route("/{student_id}", delete(delete_student))
}
