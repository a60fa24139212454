use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGroupRequest {
    #[validate(length(min = 1))]
    pub code: String,
}

/// Partial update. Omitted (or null) fields keep their current value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGroupRequest {
    #[validate(length(min = 1))]
    pub code: Option<String>,
}
