//! Health Check and Metrics Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{body_json, body_text, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new().await;

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "alive");
}

#[tokio::test]
async fn readiness_reports_storage_backend() {
    let app = TestApp::new().await;

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["backend"], "memory");
}

#[tokio::test]
async fn metrics_expose_request_counts_by_route() {
    let app = TestApp::new().await;
    app.get("/api/jobs/12345").await;

    let response = app.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response).await;
    assert!(text.contains("job_board_http_requests_total"));
    assert!(text.contains("path=\"/api/jobs/{job_id}\""));
    assert!(!text.contains("/api/jobs/12345"));
}
