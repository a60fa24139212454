use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::professor;

/// Professor as returned by the API. The password hash never leaves the
/// persistence layer.
#[derive(Debug, Serialize)]
pub struct ProfessorResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<professor::Model> for ProfessorResponse {
    fn from(m: professor::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            created_at: m.created_at.to_rfc3339(),
            updated_at: m.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfessorRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Partial update. Omitted (or null) fields keep their current value;
/// clearing a field to null is not expressible through this endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfessorRequest {
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}
