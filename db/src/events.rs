/// Attendance event types.
///
/// Emitted by the scan engine's callers after a successful mark and consumed
/// by the notification fan-out, never by the transactional write path itself.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::attendance;

/// Events pushed to live observers of the attendance feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum AttendanceEvent {
    /// A student was recorded present or late for a session.
    Marked {
        session_id: i64,
        student_id: i64,
        student_name: String,
        room: String,
        status: attendance::Status,
        timestamp: DateTime<Utc>,
    },
}
