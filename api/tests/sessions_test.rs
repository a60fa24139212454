//! Session CRUD and professor session-view tests.

mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use serde_json::json;
use tower::util::ServiceExt;

use db::models::session;
use helpers::*;

#[tokio::test]
async fn stale_cached_status_is_refreshed_on_read() {
    let (app, state) = make_test_app().await;
    let professor = seed_professor(state.db(), "prof@example.com").await;
    let course = seed_course(state.db(), professor.id, "Networks 221").await;
    // Window long past, but the cached column still says "not started".
    let stale = seed_session(
        state.db(),
        course.id,
        "101",
        NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        session::Status::NotStarted,
    )
    .await;

    let response = app
        .oneshot(empty_request("GET", &format!("/api/sessions/{}", stale.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"]["status"], "ended");
}

#[tokio::test]
async fn current_sessions_view_is_tolerance_windowed() {
    let (app, state) = make_test_app().await;
    let professor = seed_professor(state.db(), "prof@example.com").await;
    let course = seed_course(state.db(), professor.id, "Networks 221").await;

    let now = Utc::now();
    // Covers the whole of today, so "now" is always inside.
    seed_session(
        state.db(),
        course.id,
        "101",
        now.date_naive(),
        NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(23, 59, 59).unwrap(),
        session::Status::NotStarted,
    )
    .await;
    // Yesterday: never current.
    seed_session(
        state.db(),
        course.id,
        "102",
        (now - Duration::days(1)).date_naive(),
        NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(23, 59, 59).unwrap(),
        session::Status::Ended,
    )
    .await;

    let response = app
        .oneshot(empty_request(
            "GET",
            &format!("/api/professors/{}/sessions/current", professor.id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let sessions = body["data"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["room"], "101");
    assert_eq!(sessions[0]["status"], "active");
    assert!(sessions[0]["attendances"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn all_sessions_view_includes_the_roster() {
    let (app, state) = make_test_app().await;
    let professor = seed_professor(state.db(), "prof@example.com").await;
    let course = seed_course(state.db(), professor.id, "Networks 221").await;
    let group = seed_group(state.db(), "G7").await;
    let student = seed_student(state.db(), group.id, "Lerato Dube", "CARD-9").await;
    let lecture = seed_session(
        state.db(),
        course.id,
        "101",
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        session::Status::NotStarted,
    )
    .await;

    // Mark the student through the reader path.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/attendances/scan",
            json!({
                "card_id": "CARD-9",
                "room": "101",
                "date": "2026-03-02",
                "time": "09:10:00",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(read_json(response).await["status"], "present");

    let response = app
        .oneshot(empty_request(
            "GET",
            &format!("/api/professors/{}/sessions", professor.id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let sessions = body["data"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["id"].as_i64().unwrap(), lecture.id);

    let roster = sessions[0]["attendances"].as_array().unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0]["student"]["id"].as_i64().unwrap(), student.id);
    assert_eq!(roster[0]["group"]["code"], "G7");
    assert_eq!(roster[0]["attendance"]["status"], "present");
}

#[tokio::test]
async fn create_session_rejects_inverted_window() {
    let (app, state) = make_test_app().await;
    let professor = seed_professor(state.db(), "prof@example.com").await;
    let course = seed_course(state.db(), professor.id, "Networks 221").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/sessions",
            json!({
                "course_id": course.id,
                "room": "101",
                "date": "2026-03-02",
                "start_time": "10:00:00",
                "end_time": "09:00:00",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_session_requires_existing_course() {
    let (app, _state) = make_test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/sessions",
            json!({
                "course_id": 999,
                "room": "101",
                "date": "2026-03-02",
                "start_time": "09:00:00",
                "end_time": "10:00:00",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_session_rederives_status_from_moved_window() {
    let (app, state) = make_test_app().await;
    let professor = seed_professor(state.db(), "prof@example.com").await;
    let course = seed_course(state.db(), professor.id, "Networks 221").await;
    let lecture = seed_session(
        state.db(),
        course.id,
        "101",
        NaiveDate::from_ymd_opt(2030, 1, 7).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        session::Status::NotStarted,
    )
    .await;

    // Move the session into the past; the cached status must follow.
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/sessions/{}", lecture.id),
            json!({ "date": "2020-01-06" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"]["status"], "ended");
    assert_eq!(body["data"]["room"], "101");
}
