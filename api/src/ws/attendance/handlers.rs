use axum::{
    extract::{State, WebSocketUpgrade},
    response::IntoResponse,
};
use util::state::AppState;
use util::ws::serve::{WsServerOptions, serve_topic};

use super::topics::attendance_feed_topic;

/// GET /ws/attendance/feed
///
/// Connecting subscribes the client to the live feed; there is no history
/// replay. Disconnecting tears down only this client's subscription.
pub async fn attendance_feed_ws_handler(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
) -> impl IntoResponse {
    let manager = app_state.ws_clone();
    ws.on_upgrade(move |socket| {
        serve_topic(
            socket,
            manager,
            attendance_feed_topic(),
            WsServerOptions::default(),
        )
    })
}
