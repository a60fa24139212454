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

use delete::delete_group;
use get::{get_group, get_group_students, list_groups};
use post::create_group;
use put::update_group;

/// Routes under `/api/groups`.
pub fn groups_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_group))
        .route("/", get(list_groups))
        .route("/{group_id}", get(get_group))
        .route("/{group_id}", put(update_group))
        .route("/{group_id}", delete(delete_group))
        .route("/{group_id}/students", get(get_group_students))
}
