//! WebSocket surface.
//!
//! Live feeds are topic-based: a client connects to a feed endpoint and the
//! server pushes enveloped events broadcast on the matching topic. There is
//! no client-to-server protocol beyond ping/pong.

use axum::Router;
use util::state::AppState;

use crate::ws::attendance::ws_attendance_routes;

pub mod attendance;
pub mod core;

pub fn ws_routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/attendance", ws_attendance_routes())
        .with_state(app_state)
}
