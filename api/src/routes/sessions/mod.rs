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

use delete::delete_session;
use get::{get_session, list_sessions};
use post::create_session;
use put::update_session;

/// Routes under `/api/sessions`.
pub fn sessions_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/", get(list_sessions))
        .route("/{session_id}", get(get_session))
        .route("/{session_id}", put(update_session))
        .route("/{session_id}", delete(delete_session))
}
