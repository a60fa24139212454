use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceMarked {
    pub session_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub room: String,
    pub status: String,
    pub timestamp: String, // RFC3339
}
