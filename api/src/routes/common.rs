use serde::Deserialize;

/// Standard `skip`/`limit` pagination for list endpoints.
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl PaginationQuery {
    pub fn skip(&self) -> u64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(100)
    }
}

/// True if the SeaORM error stems from a unique-index violation, which the
/// routes surface as 409 Conflict rather than a generic database error.
pub fn unique_violation(e: &sea_orm::DbErr) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}
