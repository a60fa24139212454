//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by entity, one group per module:
//! - `/health` → liveness probe
//! - `/professors` → professor CRUD plus course/session lookups
//! - `/courses` → course CRUD plus group links
//! - `/groups` → group CRUD
//! - `/students` → student CRUD
//! - `/sessions` → session CRUD (status recomputed on every read)
//! - `/attendances` → attendance CRUD plus the reader scan intake

use axum::Router;
use util::state::AppState;

pub mod attendances;
pub mod common;
pub mod courses;
pub mod groups;
pub mod health;
pub mod professors;
pub mod sessions;
pub mod students;

/// Builds the complete application router for all HTTP endpoints.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .nest("/professors", professors::professors_routes())
        .nest("/courses", courses::courses_routes())
        .nest("/groups", groups::groups_routes())
        .nest("/students", students::students_routes())
        .nest("/sessions", sessions::sessions_routes())
        .nest("/attendances", attendances::attendances_routes())
        .with_state(app_state)
}
