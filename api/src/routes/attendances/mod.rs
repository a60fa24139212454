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
pub mod scan;

use delete::delete_attendance;
use get::{get_attendance, list_attendances};
use post::create_attendance;
use put::update_attendance;
use scan::scan_card;

/// Routes under `/api/attendances`.
pub fn attendances_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_attendance))
        .route("/", get(list_attendances))
        .route("/scan", post(scan_card))
        .route("/{attendance_id}", get(get_attendance))
        .route("/{attendance_id}", put(update_attendance))
        .route("/{attendance_id}", delete(delete_attendance))
}
