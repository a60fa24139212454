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

use delete::delete_professor;
use get::{get_professor, get_professor_courses, get_professor_sessions,
    get_professor_sessions_current, list_professors};
use post::create_professor;
use put::update_professor;

/// Routes under `/api/professors`.
pub fn professors_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_professor))
        .route("/", get(list_professors))
        .route("/{professor_id}", get(get_professor))
        .route("/{professor_id}", put(update_professor))
        .route("/{professor_id}", delete(delete_professor))
        .route("/{professor_id}/courses", get(get_professor_courses))
        .route("/{professor_id}/sessions", get(get_professor_sessions))
        .route(
            "/{professor_id}/sessions/current",
            get(get_professor_sessions_current),
        )
}
