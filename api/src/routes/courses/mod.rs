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

use delete::delete_course;
use get::{get_course, get_course_groups, list_courses};
use post::{add_group_to_course, create_course};
use put::update_course;

/// Routes under `/api/courses`.
pub fn courses_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course))
        .route("/", get(list_courses))
        .route("/{course_id}", get(get_course))
        .route("/{course_id}", put(update_course))
        .route("/{course_id}", delete(delete_course))
        .route("/{course_id}/groups", get(get_course_groups))
        .route("/{course_id}/groups/{group_id}", post(add_group_to_course))
}
