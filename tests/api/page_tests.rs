//! HTML Page Tests

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;

use job_board::startup::AppState;

use crate::common::{body_text, id_of, location, set_cookie, test_settings, TestApp};

#[tokio::test]
async fn home_page_is_public_and_lists_recent_jobs() {
    let app = TestApp::new().await;
    let acme = id_of(&app.create_company("Acme").await);
    app.create_job(acme, "Rust Engineer").await;

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Rust Engineer"));
    assert!(html.contains("Acme"));
    assert!(html.contains("href=\"/login\""));
}

#[tokio::test]
async fn job_pages_redirect_to_login_without_session() {
    let app = TestApp::new().await;

    for uri in ["/jobs", "/jobs/1"] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(location(&response), "/login");
    }
}

#[tokio::test]
async fn forged_cookie_is_not_a_session() {
    let app = TestApp::new().await;

    let response = app
        .get_with_cookie("/jobs", "JOBBOARD_SESSION=not-a-token")
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn wrong_password_returns_to_login_with_error() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/login", "username=admin&password=nope", None)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?error");
    assert!(set_cookie(&response).is_none());

    let page = body_text(app.get("/login?error").await).await;
    assert!(page.contains("Invalid username or password."));
}

#[tokio::test]
async fn login_sets_strict_http_only_cookie() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/login", "username=admin&password=correct-horse", None)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/jobs");
    let raw = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(raw.starts_with("JOBBOARD_SESSION="));
    assert!(raw.contains("HttpOnly"));
    assert!(raw.contains("SameSite=Strict"));
    assert!(raw.contains("Path=/"));
}

#[tokio::test]
async fn logged_in_admin_can_search_and_view_jobs() {
    let app = TestApp::new().await;
    let cookie = app.login().await;
    let acme = id_of(&app.create_company("Acme").await);
    let job = app.create_job(acme, "Rust Engineer").await;

    let list = app.get_with_cookie("/jobs?q=rust", &cookie).await;
    assert_eq!(list.status(), StatusCode::OK);
    let html = body_text(list).await;
    assert!(html.contains(&format!("href=\"/jobs/{}\"", id_of(&job))));
    assert!(html.contains("Signed in as admin"));

    let empty = body_text(app.get_with_cookie("/jobs?q=cobol", &cookie).await).await;
    assert!(empty.contains("No jobs found."));

    let detail = app
        .get_with_cookie(&format!("/jobs/{}", id_of(&job)), &cookie)
        .await;
    assert_eq!(detail.status(), StatusCode::OK);
    let html = body_text(detail).await;
    assert!(html.contains("<h1>Rust Engineer</h1>"));
    assert!(html.contains("Rust Engineer wanted"));
}

#[tokio::test]
async fn unknown_or_malformed_job_page_redirects_to_list() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    for uri in ["/jobs/999", "/jobs/abc"] {
        let response = app.get_with_cookie(uri, &cookie).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(location(&response), "/jobs");
    }
}

#[tokio::test]
async fn login_page_skips_straight_to_jobs_when_signed_in() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let response = app.get_with_cookie("/login", &cookie).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/jobs");
}

#[tokio::test]
async fn logout_clears_the_session_cookie() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let response = app.post_form("/logout", "", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?logout");
    let cleared = set_cookie(&response).unwrap();
    assert_eq!(cleared, "JOBBOARD_SESSION=");

    let page = body_text(app.get("/login?logout").await).await;
    assert!(page.contains("You have been logged out."));
}

#[tokio::test]
async fn plaintext_admin_password_is_not_kept_in_state() {
    let state = AppState::in_memory(test_settings()).unwrap();

    assert!(state.settings.auth.admin_password.is_empty());
    assert!(state.auth.login("admin", "correct-horse").await.is_ok());
}
