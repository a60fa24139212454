use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub professor_id: i64,
}

/// Partial update. Omitted (or null) fields keep their current value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub professor_id: Option<i64>,
}
