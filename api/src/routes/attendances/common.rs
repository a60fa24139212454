use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::attendance;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAttendanceRequest {
    pub session_id: i64,
    pub student_id: i64,
    pub status: attendance::Status,
    /// Defaults to the server clock when omitted.
    pub time: Option<DateTime<Utc>>,
}

/// Partial update. Omitted (or null) fields keep their current value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAttendanceRequest {
    pub status: Option<attendance::Status>,
    pub time: Option<DateTime<Utc>>,
}

/// Body sent by a reader when a card is tapped. `time` and `date` are
/// optional so readers without a clock can lean on the server's.
#[derive(Debug, Deserialize, Validate)]
pub struct ScanRequest {
    #[validate(length(min = 1))]
    pub card_id: String,
    #[validate(length(min = 1))]
    pub room: String,
    pub time: Option<NaiveTime>,
    pub date: Option<NaiveDate>,
}

/// Plain reply the physical reader displays. Always paired with HTTP 200:
/// the device cannot do anything useful with HTTP-level errors.
#[derive(Debug, Serialize)]
pub struct ScanReply {
    pub message: String,
    pub status: &'static str,
}
