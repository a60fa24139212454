//! CRUD tests for the professor endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use tower::util::ServiceExt;

use helpers::*;

#[tokio::test]
async fn create_and_fetch_professor_round_trip() {
    let (app, _state) = make_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/professors",
            json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "password": "securepassword",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "ada@example.com");
    // The hash must never appear in a response.
    assert!(body["data"].get("password_hash").is_none());
    let id = body["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(empty_request("GET", &format!("/api/professors/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"]["name"], "Ada Lovelace");
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let (app, state) = make_test_app().await;
    seed_professor(state.db(), "taken@example.com").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/professors",
            json!({
                "name": "Someone Else",
                "email": "taken@example.com",
                "password": "securepassword",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = read_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn invalid_email_and_short_password_are_rejected() {
    let (app, _state) = make_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/professors",
            json!({ "name": "X", "email": "not-an-email", "password": "securepassword" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/professors",
            json!({ "name": "X", "email": "x@example.com", "password": "short" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn partial_update_keeps_omitted_fields() {
    let (app, state) = make_test_app().await;
    let professor = seed_professor(state.db(), "before@example.com").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/professors/{}", professor.id),
            json!({ "name": "Renamed Only" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"]["name"], "Renamed Only");
    assert_eq!(body["data"]["email"], "before@example.com");
}

#[tokio::test]
async fn delete_then_fetch_yields_not_found() {
    let (app, state) = make_test_app().await;
    let professor = seed_professor(state.db(), "gone@example.com").await;

    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/professors/{}", professor.id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(empty_request(
            "GET",
            &format!("/api/professors/{}", professor.id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_respects_skip_and_limit() {
    let (app, state) = make_test_app().await;
    for i in 0..5 {
        seed_professor(state.db(), &format!("p{i}@example.com")).await;
    }

    let response = app
        .oneshot(empty_request("GET", "/api/professors?skip=2&limit=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}
