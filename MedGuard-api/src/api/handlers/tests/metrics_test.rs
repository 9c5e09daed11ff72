use axum::http::StatusCode;
use serde_json::json;

use super::{app, post_json, send_json, test_state};

#[tokio::test]
async fn test_validate_only_reports_violations() {
    let (status, body) = send_json(
        app(test_state()),
        post_json(
            "/api/v1/metrics/validate",
            json!({ "blood_pressure": { "systolic": "69", "diastolic": "" }, "pulse_rate": 250 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["violations"].as_array().unwrap().len(), 2);
    assert_eq!(body["violations"][0]["field"], "systolic");
    assert_eq!(body["violations"][1]["field"], "pulse_rate");
    assert_eq!(body["notices"][1]["description"], "Pulse rate should be between 40 and 200 bpm");
}

#[tokio::test]
async fn test_out_of_range_submission_is_rejected() {
    let (status, body) = send_json(
        app(test_state()),
        post_json(
            "/api/v1/metrics",
            json!({ "blood_pressure": { "systolic": 120, "diastolic": 150 } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["notices"][0]["title"], "Validation Error");
    assert_eq!(
        body["details"][0],
        "Diastolic blood pressure should be between 40 and 100"
    );
}

#[tokio::test]
async fn test_high_reading_is_saved_with_advice() {
    let (status, body) = send_json(
        app(test_state()),
        post_json(
            "/api/v1/metrics",
            json!({
                "blood_pressure": { "systolic": 150, "diastolic": 80 },
                "blood_sugar": "",
                "pulse_rate": "",
                "cholesterol": { "hdl": 50, "total": "180" }
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"]["blood_pressure"], "high");
    assert_eq!(body["status"]["blood_sugar"], "normal");
    assert_eq!(body["notice"]["title"], "Metrics Saved Successfully");
    assert_eq!(body["notice"]["variant"], "destructive");
    assert_eq!(body["readings"][0], "Blood Pressure: 150/80 mmHg");
    assert_eq!(body["readings"][1], "Cholesterol: HDL: 50 | LDL: - | Total: 180 mg/dL");
}

#[tokio::test]
async fn test_non_numeric_reading_is_malformed() {
    let (status, _) = send_json(
        app(test_state()),
        post_json("/api/v1/metrics", json!({ "blood_sugar": "sweet" })),
    )
    .await;

    assert!(status.is_client_error());
}
