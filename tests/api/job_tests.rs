//! Job API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{body_json, id_of, TestApp};

fn ids(jobs: &Value) -> Vec<i64> {
    jobs.as_array().unwrap().iter().map(id_of).collect()
}

#[tokio::test]
async fn created_job_embeds_company_and_defaults_to_draft() {
    let app = TestApp::new().await;
    let acme = app.create_company("Acme").await;

    let job = app.create_job(id_of(&acme), "Rust Engineer").await;

    assert_eq!(job["title"], "Rust Engineer");
    assert_eq!(job["status"], "DRAFT");
    assert_eq!(job["company"]["name"], "Acme");
    assert_eq!(job["company"]["id"], acme["id"]);
    assert_eq!(job["createdAt"], job["updatedAt"]);

    let fetched = body_json(app.get(&format!("/api/jobs/{}", id_of(&job))).await).await;
    assert_eq!(fetched, job);
}

#[tokio::test]
async fn search_matches_title_or_company_case_insensitively() {
    let app = TestApp::new().await;
    let acme = id_of(&app.create_company("Acme").await);
    let globex = id_of(&app.create_company("Globex").await);
    let rust = app.create_job(acme, "Rust Engineer").await;
    let designer = app.create_job(globex, "Product Designer").await;

    let by_company = body_json(app.get("/api/jobs?q=aCmE").await).await;
    assert_eq!(ids(&by_company), vec![id_of(&rust)]);

    let by_title = body_json(app.get("/api/jobs?q=DESIGN").await).await;
    assert_eq!(ids(&by_title), vec![id_of(&designer)]);

    let none = body_json(app.get("/api/jobs?q=python").await).await;
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn padded_query_is_matched_as_given() {
    let app = TestApp::new().await;
    let globex = id_of(&app.create_company("Globex").await);
    let engineer = app.create_job(globex, "Engineer").await;

    let padded = body_json(app.get("/api/jobs?q=%20eng").await).await;
    assert_eq!(padded, json!([]));

    let plain = body_json(app.get("/api/jobs?q=eng").await).await;
    assert_eq!(ids(&plain), vec![id_of(&engineer)]);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let app = TestApp::new().await;
    let acme = id_of(&app.create_company("Acme").await);
    let remote = app.create_job(acme, "100% remote engineer").await;
    app.create_job(acme, "Office engineer").await;

    let response = app.get("/api/jobs?q=%25").await;
    let jobs = body_json(response).await;

    assert_eq!(ids(&jobs), vec![id_of(&remote)]);
}

#[tokio::test]
async fn blank_query_lists_twenty_most_recent() {
    let app = TestApp::new().await;
    let acme = id_of(&app.create_company("Acme").await);
    let mut created = Vec::new();
    for n in 0..22 {
        created.push(id_of(&app.create_job(acme, &format!("Job {}", n)).await));
    }

    let expected: Vec<i64> = created.iter().rev().take(20).copied().collect();

    let all = body_json(app.get("/api/jobs").await).await;
    let empty_q = body_json(app.get("/api/jobs?q=").await).await;
    let spaces_q = body_json(app.get("/api/jobs?q=%20%20").await).await;

    assert_eq!(ids(&all), expected);
    assert_eq!(ids(&empty_q), expected);
    assert_eq!(ids(&spaces_q), expected);
}

#[tokio::test]
async fn create_with_unknown_company_is_not_found_and_persists_nothing() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/api/jobs",
            &json!({ "title": "Ghost", "description": "Nobody", "companyId": 42 }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(app.get("/api/jobs").await).await, json!([]));
}

#[tokio::test]
async fn company_id_may_be_a_numeric_string() {
    let app = TestApp::new().await;
    let acme = id_of(&app.create_company("Acme").await);

    let response = app
        .post_json(
            "/api/jobs",
            &json!({
                "title": "Engineer",
                "description": "Build",
                "companyId": acme.to_string(),
                "status": "PUBLISHED"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "PUBLISHED");
}

#[tokio::test]
async fn invalid_bodies_are_bad_requests() {
    let app = TestApp::new().await;
    let acme = id_of(&app.create_company("Acme").await);

    let empty_title = app
        .post_json(
            "/api/jobs",
            &json!({ "title": "", "description": "Build", "companyId": acme }),
        )
        .await;
    assert_eq!(empty_title.status(), StatusCode::BAD_REQUEST);

    let bad_status = app
        .post_json(
            "/api/jobs",
            &json!({ "title": "T", "description": "D", "companyId": acme, "status": "ARCHIVED" }),
        )
        .await;
    assert_eq!(bad_status.status(), StatusCode::BAD_REQUEST);

    let malformed = app.post_raw("/api/jobs", "{ not json").await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(malformed).await["code"], 10007);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_status_when_omitted() {
    let app = TestApp::new().await;
    let acme = id_of(&app.create_company("Acme").await);
    let job = app.create_job(acme, "Engineer").await;
    let uri = format!("/api/jobs/{}", id_of(&job));

    app.patch_json(&format!("{}/status", uri), &json!({ "status": "PUBLISHED" }))
        .await;

    let response = app
        .put_json(
            &uri,
            &json!({ "title": "Senior Engineer", "description": "Lead", "location": null }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;

    assert_eq!(updated["title"], "Senior Engineer");
    assert_eq!(updated["description"], "Lead");
    assert_eq!(updated["location"], Value::Null);
    assert_eq!(updated["status"], "PUBLISHED");
    assert_eq!(updated["createdAt"], job["createdAt"]);
    assert_eq!(updated["company"]["name"], "Acme");
}

#[tokio::test]
async fn status_can_be_changed_alone() {
    let app = TestApp::new().await;
    let acme = id_of(&app.create_company("Acme").await);
    let job = app.create_job(acme, "Engineer").await;

    let response = app
        .patch_json(
            &format!("/api/jobs/{}/status", id_of(&job)),
            &json!({ "status": "PUBLISHED" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;

    assert_eq!(updated["status"], "PUBLISHED");
    assert_eq!(updated["title"], job["title"]);
}

#[tokio::test]
async fn missing_job_is_not_found() {
    let app = TestApp::new().await;

    assert_eq!(app.get("/api/jobs/999").await.status(), StatusCode::NOT_FOUND);

    let update = app
        .put_json("/api/jobs/999", &json!({ "title": "T", "description": "D" }))
        .await;
    assert_eq!(update.status(), StatusCode::NOT_FOUND);

    let status = app
        .patch_json("/api/jobs/999/status", &json!({ "status": "DRAFT" }))
        .await;
    assert_eq!(status.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = TestApp::new().await;

    let get = app.get("/api/jobs/abc").await;
    assert_eq!(get.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(get).await["code"], 10002);
    assert_eq!(app.delete("/api/jobs/abc").await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let app = TestApp::new().await;
    let acme = id_of(&app.create_company("Acme").await);
    let job = app.create_job(acme, "Engineer").await;
    let uri = format!("/api/jobs/{}", id_of(&job));

    assert_eq!(app.delete(&uri).await.status(), StatusCode::OK);
    assert_eq!(app.get(&uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.delete(&uri).await.status(), StatusCode::OK);

    // the company is untouched
    let company = app.get(&format!("/api/companies/{}", acme)).await;
    assert_eq!(company.status(), StatusCode::OK);
}
