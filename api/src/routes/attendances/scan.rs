//! # Card Scan Intake
//!
//! - `POST /api/attendances/scan`: Entry point for RFID reader taps.
//!
//! The reply is always HTTP 200 with a `{message, status}` body the reader
//! can show on its display; outcome classification lives in the `status`
//! field, never in the HTTP status line.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use validator::Validate;

use crate::routes::attendances::common::{ScanReply, ScanRequest};
use crate::ws::attendance::emit_attendance_marked;
use db::scan_engine::{self, ScanOutcome};
use util::state::AppState;

/// POST /api/attendances/scan
///
/// ### Request Body
/// ```json
/// { "card_id": "04A1B2C3", "room": "101", "time": "09:05:00", "date": "2026-03-02" }
/// ```
///
/// On a successful mark the event is fanned out to the attendance feed
/// after the write has committed.
pub async fn scan_card(
    State(state): State<AppState>,
    Json(req): Json<ScanRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        tracing::warn!("Rejecting malformed scan request: {e}");
        return (
            StatusCode::OK,
            Json(ScanReply {
                message: format!("Invalid scan request: {e}"),
                status: "error",
            }),
        );
    }

    let now = Utc::now();
    let date = req.date.unwrap_or_else(|| now.date_naive());
    let time = req.time.unwrap_or_else(|| now.time());
    let at: DateTime<Utc> = date.and_time(time).and_utc();

    let result = scan_engine::record_scan(state.db(), &req.card_id, &req.room, at).await;

    if let Some(event) = &result.event {
        emit_attendance_marked(state.ws(), event).await;
    }

    let reply = match result.outcome {
        ScanOutcome::Marked(status) => ScanReply {
            message: format!("Attendance recorded as {}", status.as_str()),
            status: status.as_str(),
        },
        ScanOutcome::AlreadyMarked(status) => ScanReply {
            message: format!("Already marked as {}", status.as_str()),
            status: "already_marked",
        },
        ScanOutcome::UnknownCard => ScanReply {
            message: "Card is not registered to any student".to_string(),
            status: "unknown_card",
        },
        ScanOutcome::NoActiveSession => ScanReply {
            message: "No active session in this room right now".to_string(),
            status: "no_active_session",
        },
        ScanOutcome::Failure(reason) => ScanReply {
            message: format!("Scan could not be processed: {reason}"),
            status: "error",
        },
    };

    (StatusCode::OK, Json(reply))
}
