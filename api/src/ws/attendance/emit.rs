use serde::Serialize;
use util::ws::WebSocketManager;

use super::{payload, topics::attendance_feed_topic};
use crate::ws::core::{envelope, event::Event};
use db::events::AttendanceEvent;

#[derive(Debug, Serialize)]
pub struct AttendanceMarkedEvent {
    #[serde(flatten)]
    pub payload: payload::AttendanceMarked,
}
impl Event for AttendanceMarkedEvent {
    const NAME: &'static str = "attendance.marked";
    fn topic_path(&self) -> String {
        attendance_feed_topic()
    }
}

/* ---------- one-liner helpers ---------- */

pub async fn attendance_marked(ws: &WebSocketManager, p: payload::AttendanceMarked) {
    envelope::emit(ws, &AttendanceMarkedEvent { payload: p }).await;
}

/// Bridges the engine's event into the feed payload. Runs after commit;
/// delivery failures are invisible to the scanning student.
pub async fn emit_attendance_marked(ws: &WebSocketManager, event: &AttendanceEvent) {
    match event {
        AttendanceEvent::Marked {
            session_id,
            student_id,
            student_name,
            room,
            status,
            timestamp,
        } => {
            attendance_marked(
                ws,
                payload::AttendanceMarked {
                    session_id: *session_id,
                    student_id: *student_id,
                    student_name: student_name.clone(),
                    room: room.clone(),
                    status: status.as_str().to_string(),
                    timestamp: timestamp.to_rfc3339(),
                },
            )
            .await;
        }
    }
}
