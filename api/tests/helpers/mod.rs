#![allow(dead_code)]

use axum::{Router, body::Body, http::Request, response::Response};
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use api::{routes::routes, ws::ws_routes};
use db::models::{course, group, professor, session, student};
use db::test_utils::setup_test_db;
use util::{state::AppState, ws::WebSocketManager};

/// Fresh in-memory database, migrated, wrapped in the full app router.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let state = AppState::new(db, WebSocketManager::new());
    let router = Router::new()
        .nest("/api", routes(state.clone()))
        .nest("/ws", ws_routes(state.clone()));
    (router, state)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn seed_professor(db: &DatabaseConnection, email: &str) -> professor::Model {
    professor::Model::create(db, "Nadia Brink", email, "password123")
        .await
        .unwrap()
}

pub async fn seed_group(db: &DatabaseConnection, code: &str) -> group::Model {
    let now = Utc::now();
    group::ActiveModel {
        code: Set(code.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_student(
    db: &DatabaseConnection,
    group_id: i64,
    name: &str,
    card: &str,
) -> student::Model {
    let now = Utc::now();
    student::ActiveModel {
        name: Set(name.to_string()),
        group_id: Set(group_id),
        rfid_card_id: Set(card.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_course(db: &DatabaseConnection, professor_id: i64, name: &str) -> course::Model {
    let now = Utc::now();
    course::ActiveModel {
        name: Set(name.to_string()),
        professor_id: Set(professor_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_session(
    db: &DatabaseConnection,
    course_id: i64,
    room: &str,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    status: session::Status,
) -> session::Model {
    let now = Utc::now();
    session::ActiveModel {
        course_id: Set(course_id),
        room: Set(room.to_string()),
        date: Set(date),
        start_time: Set(start),
        end_time: Set(end),
        status: Set(status),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
