//! Application API Tests

use axum::http::StatusCode;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{body_json, id_of, TestApp};

fn application(job_id: i64, email: &str) -> Value {
    let name: String = Name().fake();
    json!({
        "jobId": job_id,
        "applicantName": name,
        "applicantEmail": email,
        "coverLetter": "I would love to work here.",
        "resumeUrl": "https://cv.example.com/me.pdf",
    })
}

async fn job_fixture(app: &TestApp) -> i64 {
    let acme = id_of(&app.create_company("Acme").await);
    id_of(&app.create_job(acme, "Rust Engineer").await)
}

#[tokio::test]
async fn second_application_with_same_email_conflicts() {
    let app = TestApp::new().await;
    let job_id = job_fixture(&app).await;
    let email: String = SafeEmail().fake();
    let check_uri = format!("/api/applications/check?jobId={}&email={}", job_id, email);

    let before = body_json(app.get(&check_uri).await).await;
    assert_eq!(before, json!({ "hasApplied": false }));

    let first = app
        .post_json("/api/applications", &application(job_id, &email))
        .await;
    assert_eq!(first.status(), StatusCode::OK);
    let first = body_json(first).await;
    assert_eq!(first["jobId"], job_id);
    assert_eq!(first["applicantEmail"], email.as_str());

    let after = body_json(app.get(&check_uri).await).await;
    assert_eq!(after, json!({ "hasApplied": true }));

    let second = app
        .post_json("/api/applications", &application(job_id, &email))
        .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["code"], 10005);

    let listed = body_json(app.get(&format!("/api/applications/job/{}", job_id)).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn applications_are_listed_newest_first() {
    let app = TestApp::new().await;
    let job_id = job_fixture(&app).await;

    let first = body_json(
        app.post_json("/api/applications", &application(job_id, "ada@example.com"))
            .await,
    )
    .await;
    let second = body_json(
        app.post_json("/api/applications", &application(job_id, "grace@example.com"))
            .await,
    )
    .await;

    let listed = body_json(app.get(&format!("/api/applications/job/{}", job_id)).await).await;
    let ids: Vec<i64> = listed.as_array().unwrap().iter().map(id_of).collect();

    assert_eq!(ids, vec![id_of(&second), id_of(&first)]);
}

#[tokio::test]
async fn applying_to_missing_job_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/api/applications", &application(404, "ada@example.com"))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn job_id_may_be_a_numeric_string() {
    let app = TestApp::new().await;
    let job_id = job_fixture(&app).await;
    let mut body = application(job_id, "ada@example.com");
    body["jobId"] = json!(job_id.to_string());

    let response = app.post_json("/api/applications", &body).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn invalid_applications_are_bad_requests() {
    let app = TestApp::new().await;
    let job_id = job_fixture(&app).await;

    let bad_email = app
        .post_json("/api/applications", &application(job_id, "not-an-email"))
        .await;
    assert_eq!(bad_email.status(), StatusCode::BAD_REQUEST);

    let mut bad_resume = application(job_id, "ada@example.com");
    bad_resume["resumeUrl"] = json!("my resume");
    let response = app.post_json("/api/applications", &bad_resume).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut script_resume = application(job_id, "ada@example.com");
    script_resume["resumeUrl"] = json!("javascript:alert(1)");
    let response = app.post_json("/api/applications", &script_resume).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut no_name = application(job_id, "ada@example.com");
    no_name["applicantName"] = json!("");
    let response = app.post_json("/api/applications", &no_name).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn optional_fields_may_be_blank() {
    let app = TestApp::new().await;
    let job_id = job_fixture(&app).await;
    let mut body = application(job_id, "ada@example.com");
    body["coverLetter"] = json!("");
    body["resumeUrl"] = json!("");

    let response = app.post_json("/api/applications", &body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let created = body_json(response).await;
    assert_eq!(created["coverLetter"], Value::Null);
    assert_eq!(created["resumeUrl"], Value::Null);
}

#[tokio::test]
async fn check_requires_job_id_and_email() {
    let app = TestApp::new().await;

    let missing = app.get("/api/applications/check?jobId=1").await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let bad_id = app
        .get("/api/applications/check?jobId=abc&email=ada@example.com")
        .await;
    assert_eq!(bad_id.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_a_job_removes_its_applications() {
    let app = TestApp::new().await;
    let job_id = job_fixture(&app).await;
    app.post_json("/api/applications", &application(job_id, "ada@example.com"))
        .await;

    app.delete(&format!("/api/jobs/{}", job_id)).await;

    let listed = body_json(app.get(&format!("/api/applications/job/{}", job_id)).await).await;
    assert_eq!(listed, json!([]));
}
