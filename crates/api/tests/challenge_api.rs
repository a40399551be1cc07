//! Integration tests for the challenge catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{assert_error_response, body_json, get};

// ---------------------------------------------------------------------------
// GET /api/challenges
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_challenges_returns_seeded_catalog() {
    let app = common::build_test_app();
    let response = get(app, "/api/challenges").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let challenges = json.as_array().expect("response must be a JSON array");
    assert_eq!(challenges.len(), 2);

    // Listing is sorted by slug.
    assert_eq!(challenges[0]["id"], "day-in-life");
    assert_eq!(challenges[1]["id"], "room-tour");
}

#[tokio::test]
async fn listed_challenges_use_camel_case_fields() {
    let app = common::build_test_app();
    let response = get(app, "/api/challenges").await;
    let json = body_json(response).await;

    let room_tour = &json[1];
    assert_eq!(room_tour["pointsPerStep"], 25);
    assert!(room_tour["createdAt"].is_string());

    let steps = room_tour["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0]["id"], 1);
    assert!(steps[0]["emoji"].is_string());
    assert!(steps[0]["duration"].is_number());
}

// ---------------------------------------------------------------------------
// GET /api/challenges/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_challenge_by_slug() {
    let app = common::build_test_app();
    let response = get(app, "/api/challenges/room-tour").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], "room-tour");
    assert_eq!(json["name"], "Show Your Room in 5 Clips");
    assert_eq!(json["steps"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn get_unknown_challenge_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/challenges/no-such-challenge").await;

    assert_error_response(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}
