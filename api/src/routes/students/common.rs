use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub group_id: i64,
    #[validate(length(min = 1))]
    pub rfid_card_id: String,
}

/// Partial update. Omitted (or null) fields keep their current value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub group_id: Option<i64>,
    #[validate(length(min = 1))]
    pub rfid_card_id: Option<String>,
}
