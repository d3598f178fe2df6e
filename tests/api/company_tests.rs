//! Company API Tests

use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::test_router;

fn server() -> TestServer {
    TestServer::new(test_router()).unwrap()
}

#[tokio::test]
async fn companies_are_listed_by_name() {
    let server = server();
    for name in ["Initech", "Acme", "Globex"] {
        server
            .post("/api/companies")
            .json(&json!({ "name": name }))
            .await
            .assert_status_ok();
    }

    let companies: Value = server.get("/api/companies").await.json();
    let names: Vec<&str> = companies
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Acme", "Globex", "Initech"]);
}

#[tokio::test]
async fn company_can_be_fetched_by_id() {
    let server = server();
    let created: Value = server
        .post("/api/companies")
        .json(&json!({ "name": "Acme", "website": "https://acme.example.com" }))
        .await
        .json();

    let fetched: Value = server
        .get(&format!("/api/companies/{}", created["id"]))
        .await
        .json();

    assert_eq!(fetched, created);
    assert_eq!(fetched["website"], "https://acme.example.com");
}

#[tokio::test]
async fn duplicate_name_conflicts() {
    let server = server();
    server
        .post("/api/companies")
        .json(&json!({ "name": "Acme" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/companies")
        .json(&json!({ "name": " Acme " }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn missing_company_is_not_found() {
    server()
        .get("/api/companies/77")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn invalid_website_is_rejected() {
    server()
        .post("/api/companies")
        .json(&json!({ "name": "Acme", "website": "acme dot com" }))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn script_website_is_rejected_and_not_stored() {
    let server = server();

    server
        .post("/api/companies")
        .json(&json!({ "name": "Acme", "website": "javascript:alert(document.cookie)" }))
        .await
        .assert_status_bad_request();

    let companies: Value = server.get("/api/companies").await.json();
    assert_eq!(companies, json!([]));
}
