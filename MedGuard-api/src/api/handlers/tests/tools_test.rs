use axum::http::StatusCode;
use serde_json::json;

use super::{app, delete, get, post_bytes, post_json, send, send_json, test_state};

#[tokio::test]
async fn test_navigation_lists_every_screen() {
    let (status, body) = send_json(app(test_state()), get("/api/v1/navigation")).await;

    assert_eq!(status, StatusCode::OK);
    let screens = body.as_array().unwrap();
    assert_eq!(screens.len(), 9);
    assert!(screens.iter().any(|s| s["path"] == "/"));
}

#[tokio::test]
async fn test_login() {
    let (status, body) = send_json(
        app(test_state()),
        post_json(
            "/api/v1/auth/login",
            json!({"email": "jane@example.com", "password": "secret"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["redirect_to"], "/");
    assert_eq!(body["notice"]["title"], "Login Successful");

    let (status, body) = send_json(
        app(test_state()),
        post_json(
            "/api/v1/auth/login",
            json!({"email": "jane", "password": "secret"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0], "Please enter a valid email address");
}

#[tokio::test]
async fn test_bmi() {
    let (status, body) = send_json(
        app(test_state()),
        post_json("/api/v1/bmi", json!({"height_cm": 180.0, "weight_kg": 72.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi"], 22.2);
    assert_eq!(body["category"], "Normal");

    let (status, body) = send_json(
        app(test_state()),
        post_json("/api/v1/bmi", json!({"height_cm": 0.0, "weight_kg": 72.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_reminder_lifecycle() {
    let state = test_state();

    let (status, body) = send_json(
        app(state.clone()),
        post_json("/api/v1/reminders", json!({"medicine": "Aspirin", "time": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["added"].is_null());
    assert_eq!(body["book"]["draft"]["medicine"], "Aspirin");

    let (status, body) = send_json(
        app(state.clone()),
        post_json(
            "/api/v1/reminders",
            json!({"medicine": "Aspirin", "time": "08:00", "frequency": "weekly"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["added"]["frequency"], "weekly");
    let id = body["added"]["id"].as_str().unwrap().to_string();

    let (_, body) = send_json(app(state.clone()), get("/api/v1/reminders")).await;
    assert_eq!(body["reminders"].as_array().unwrap().len(), 1);

    let (status, _) = send(app(state.clone()), delete(&format!("/api/v1/reminders/{}", id))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Deleting again is not an error
    let (status, _) = send(app(state.clone()), delete(&format!("/api/v1/reminders/{}", id))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send_json(app(state), get("/api/v1/reminders")).await;
    assert!(body["reminders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_pill_identification() {
    let (status, body) = send_json(
        app(test_state()),
        post_json("/api/v1/pills/identify", json!({"color": "", "shape": "", "imprint": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["notices"][0]["title"], "Missing Information");

    let (status, body) = send_json(
        app(test_state()),
        post_json("/api/v1/pills/identify", json!({"shape": "oval"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matches"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_pill_image_analysis() {
    let (status, body) = send_json(
        app(test_state()),
        post_bytes("/api/v1/pills/analyze", "image/png", vec![0; 64]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["criteria"]["imprint"], "ABC123");
    assert_eq!(body["notice"]["title"], "Image Analysis Complete");

    let (status, body) = send_json(
        app(test_state()),
        post_bytes("/api/v1/pills/analyze", "application/pdf", vec![0; 64]),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["notices"][0]["description"], "Please upload an image file");

    let (status, body) = send_json(
        app(test_state()),
        post_bytes("/api/v1/pills/analyze", "image/png", Vec::new()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["notices"][0]["title"], "No image selected");
}
