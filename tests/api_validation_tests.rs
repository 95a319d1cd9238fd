// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.
//!
//! All of these run against the offline mock database: a validation
//! failure must surface before any store access, so getting a 400 (and
//! not the mock's 500) proves the ordering.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_empty_plan_input_reports_all_fields() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/plans",
            Some(&token),
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::response_json(response).await;
    assert_eq!(body["title"], "Title is required");
    assert_eq!(body["startDate"], "Start date must be a valid Date");
    assert_eq!(body["endDate"], "End date must be a valid Date");
}

#[tokio::test]
async fn test_plan_with_bad_dates_is_rejected() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/plans",
            Some(&token),
            json!({
                "title": "10k Plan",
                "startDate": "01/01/2024",
                "endDate": "2024-03-01"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::response_json(response).await;
    assert_eq!(body["startDate"], "Start date must be a valid Date");
    assert!(body.get("endDate").is_none());
}

#[tokio::test]
async fn test_valid_plan_input_reaches_the_store() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/plans",
            Some(&token),
            json!({
                "title": "10k Plan",
                "startDate": "2024-01-01",
                "endDate": "2024-03-01"
            }),
        ))
        .await
        .unwrap();

    // Validation passed; the offline mock rejects the persist.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_activity_requires_week_and_plan() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/activities",
            Some(&token),
            json!({ "sport": "cycling" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::response_json(response).await;
    assert_eq!(body["week"], "Week is required");
    assert_eq!(body["plan"], "Plan is required");
}

#[tokio::test]
async fn test_profile_handle_rules() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let cases = [
        (json!({}), "Profile handle is required"),
        (json!({ "handle": "abc" }), "Handle needs to be between 4 and 40 characters"),
        (json!({ "handle": "x".repeat(41) }), "Handle needs to be between 4 and 40 characters"),
        (json!({ "handle": "has space" }), "Handle cannot contain spaces"),
    ];

    for (body, expected) in cases {
        let response = app
            .clone()
            .oneshot(common::json_request(
                "POST",
                "/api/profile",
                Some(&token),
                body,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = common::response_json(response).await;
        assert_eq!(body["handle"], expected);
    }
}

#[tokio::test]
async fn test_profile_requires_names() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/profile",
            Some(&token),
            json!({ "handle": "runner42" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::response_json(response).await;
    assert_eq!(body["firstName"], "First Name is required");
    assert_eq!(body["lastName"], "Last Name (or initial) is required");
}

#[tokio::test]
async fn test_comment_requires_text() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/plans/comment/some-id",
            Some(&token),
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::response_json(response).await;
    assert_eq!(body["text"], "Text field is required");
}

#[tokio::test]
async fn test_register_input_rules() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/users/register",
            None,
            json!({
                "name": "A",
                "email": "not-an-email",
                "password": "short"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::response_json(response).await;
    assert_eq!(body["name"], "Name must be between 2 and 30 characters");
    assert_eq!(body["email"], "Email is invalid");
    assert_eq!(body["password"], "Password must be at least 6 characters");
}

#[tokio::test]
async fn test_login_requires_password() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/users/login",
            None,
            json!({ "email": "runner@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::response_json(response).await;
    assert_eq!(body["password"], "Password field is required");
}
