//! End-to-end tests for the reader scan intake.

mod helpers;

use axum::http::StatusCode;
use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use tokio::time::{Duration, timeout};
use tower::util::ServiceExt;

use db::models::{attendance, session};
use helpers::*;

const ROOM: &str = "101";

fn lecture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

/// Professor, course, one 09:00-10:00 session in room 101, and a student
/// holding card "CARD-1".
async fn seed_lecture(state: &util::state::AppState) {
    let db = state.db();
    let professor = seed_professor(db, "prof@example.com").await;
    let course = seed_course(db, professor.id, "Databases 301").await;
    let group = seed_group(db, "G1").await;
    seed_student(db, group.id, "Thabo Mokoena", "CARD-1").await;
    seed_session(
        db,
        course.id,
        ROOM,
        lecture_date(),
        chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        chrono::NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        session::Status::NotStarted,
    )
    .await;
}

fn scan_body(card: &str, time: &str) -> serde_json::Value {
    json!({
        "card_id": card,
        "room": ROOM,
        "date": "2026-03-02",
        "time": time,
    })
}

#[tokio::test]
async fn scan_within_window_marks_present() {
    let (app, state) = make_test_app().await;
    seed_lecture(&state).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/attendances/scan",
            scan_body("CARD-1", "09:10:00"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "present");

    let count = attendance::Entity::find().count(state.db()).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn scan_fifteen_minutes_in_is_still_present() {
    let (app, state) = make_test_app().await;
    seed_lecture(&state).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/attendances/scan",
            scan_body("CARD-1", "09:15:00"),
        ))
        .await
        .unwrap();

    let body = read_json(response).await;
    assert_eq!(body["status"], "present");
}

#[tokio::test]
async fn scan_past_threshold_marks_late() {
    let (app, state) = make_test_app().await;
    seed_lecture(&state).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/attendances/scan",
            scan_body("CARD-1", "09:16:00"),
        ))
        .await
        .unwrap();

    let body = read_json(response).await;
    assert_eq!(body["status"], "late");

    let row = attendance::Entity::find().one(state.db()).await.unwrap().unwrap();
    assert_eq!(row.status, attendance::Status::Late);
}

#[tokio::test]
async fn second_scan_reports_already_marked_and_keeps_one_row() {
    let (app, state) = make_test_app().await;
    seed_lecture(&state).await;

    let first = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/attendances/scan",
            scan_body("CARD-1", "09:05:00"),
        ))
        .await
        .unwrap();
    assert_eq!(read_json(first).await["status"], "present");

    let second = app
        .oneshot(json_request(
            "POST",
            "/api/attendances/scan",
            scan_body("CARD-1", "09:20:00"),
        ))
        .await
        .unwrap();
    assert_eq!(read_json(second).await["status"], "already_marked");

    let count = attendance::Entity::find().count(state.db()).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn concurrent_duplicate_scans_insert_exactly_one_row() {
    let (app, state) = make_test_app().await;
    seed_lecture(&state).await;

    let a = app.clone().oneshot(json_request(
        "POST",
        "/api/attendances/scan",
        scan_body("CARD-1", "09:05:00"),
    ));
    let b = app.clone().oneshot(json_request(
        "POST",
        "/api/attendances/scan",
        scan_body("CARD-1", "09:05:00"),
    ));
    let (ra, rb) = futures::join!(a, b);

    for response in [ra.unwrap(), rb.unwrap()] {
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        let status = body["status"].as_str().unwrap();
        assert!(
            status == "present" || status == "already_marked",
            "unexpected status {status}"
        );
    }

    let count = attendance::Entity::find().count(state.db()).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn unknown_card_is_a_plain_reply_not_an_error() {
    let (app, state) = make_test_app().await;
    seed_lecture(&state).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/attendances/scan",
            scan_body("NO-SUCH-CARD", "09:10:00"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "unknown_card");

    let count = attendance::Entity::find().count(state.db()).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn scan_outside_every_window_reports_no_active_session() {
    let (app, state) = make_test_app().await;
    seed_lecture(&state).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/attendances/scan",
            scan_body("CARD-1", "08:00:00"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "no_active_session");
}

#[tokio::test]
async fn successful_mark_is_broadcast_on_the_attendance_feed() {
    let (app, state) = make_test_app().await;
    seed_lecture(&state).await;

    let mut feed = state.ws().subscribe("attendance:feed").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/attendances/scan",
            scan_body("CARD-1", "09:10:00"),
        ))
        .await
        .unwrap();
    assert_eq!(read_json(response).await["status"], "present");

    let raw = timeout(Duration::from_millis(200), feed.recv())
        .await
        .expect("no event on feed")
        .unwrap();
    let event: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(event["event"], "attendance.marked");
    assert_eq!(event["topic"], "attendance:feed");
    assert_eq!(event["payload"]["student_name"], "Thabo Mokoena");
    assert_eq!(event["payload"]["room"], ROOM);
    assert_eq!(event["payload"]["status"], "present");
}

#[tokio::test]
async fn unmatched_outcomes_emit_nothing() {
    let (app, state) = make_test_app().await;
    seed_lecture(&state).await;

    let mut feed = state.ws().subscribe("attendance:feed").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/attendances/scan",
            scan_body("NO-SUCH-CARD", "09:10:00"),
        ))
        .await
        .unwrap();
    assert_eq!(read_json(response).await["status"], "unknown_card");

    let nothing = timeout(Duration::from_millis(100), feed.recv()).await;
    assert!(nothing.is_err(), "unexpected event for unknown card");
}
