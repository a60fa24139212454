use axum::{Router, routing::get};
use util::state::AppState;

pub mod emit;
pub mod handlers;
pub mod payload;
pub mod topics;

pub use emit::emit_attendance_marked;
use handlers::attendance_feed_ws_handler;

pub fn ws_attendance_routes() -> Router<AppState> {
    Router::new().route("/feed", get(attendance_feed_ws_handler))
}
