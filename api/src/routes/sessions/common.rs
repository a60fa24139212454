use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::session;

/// A session plus its attendance roster, as the dashboard endpoints return it.
#[derive(Debug, Serialize)]
pub struct SessionWithRosterResponse {
    #[serde(flatten)]
    pub session: session::Model,
    pub attendances: Vec<session::AttendanceEntry>,
}

impl From<session::SessionWithRoster> for SessionWithRosterResponse {
    fn from(s: session::SessionWithRoster) -> Self {
        Self {
            session: s.session,
            attendances: s.attendances,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSessionRequest {
    pub course_id: i64,
    #[validate(length(min = 1))]
    pub room: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Partial update. Omitted (or null) fields keep their current value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSessionRequest {
    pub course_id: Option<i64>,
    #[validate(length(min = 1))]
    pub room: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}
