//! Page Handlers
//!
//! Server-rendered pages for browsing jobs and the admin login.

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::dto::request::{LoginForm, SearchQueryParams};
use crate::domain::Job;
use crate::presentation::middleware::{current_session, AdminSession, SESSION_COOKIE};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Job as shown on a page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JobView {
    id: i64,
    title: String,
    description: String,
    location: Option<String>,
    tags: Option<String>,
    status: &'static str,
    company: String,
    website: Option<String>,
    created_at: String,
    posted: String,
}

impl From<Job> for JobView {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            description: job.description,
            location: job.location,
            tags: job.tags,
            status: job.status.as_str(),
            company: job.company.name,
            website: job.company.website,
            created_at: job.created_at.to_rfc3339(),
            posted: job.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

fn views(jobs: Vec<Job>) -> Vec<JobView> {
    jobs.into_iter().map(JobView::from).collect()
}

/// Public home page with the newest jobs
pub async fn home(State(state): State<AppState>, jar: CookieJar) -> Result<Html<String>, AppError> {
    let session = current_session(&jar, &state.auth);
    let jobs = state.jobs.recent().await?;

    state.pages.render(
        "index",
        &json!({
            "title": "Home",
            "username": session.map(|s| s.username),
            "jobs": views(jobs),
        }),
    )
}

/// Job list, filtered by `?q=`
pub async fn jobs_list(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Html<String>, AppError> {
    let jobs = state.jobs.search(params.q.as_deref()).await?;

    state.pages.render(
        "jobs/list",
        &json!({
            "title": "Jobs",
            "username": session.username,
            "q": params.q.as_deref().unwrap_or_default(),
            "count": jobs.len(),
            "jobs": views(jobs),
        }),
    )
}

/// Job detail; unknown or malformed ids go back to the list
pub async fn job_detail(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    Path(job_id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(job_id) = job_id.parse::<i64>() else {
        return Ok(Redirect::to("/jobs").into_response());
    };

    let Some(job) = state.jobs.find_by_id(job_id).await? else {
        tracing::debug!(job_id, "Job page requested for missing job");
        return Ok(Redirect::to("/jobs").into_response());
    };

    let page = state.pages.render(
        "jobs/detail",
        &json!({
            "title": job.title.clone(),
            "username": session.username,
            "job": JobView::from(job),
        }),
    )?;

    Ok(page.into_response())
}

/// `?error` and `?logout` flags on the login page
#[derive(Debug, Default, Deserialize)]
pub struct LoginPageParams {
    pub error: Option<String>,
    pub logout: Option<String>,
}

pub async fn login_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<LoginPageParams>,
) -> Result<Response, AppError> {
    if current_session(&jar, &state.auth).is_some() {
        return Ok(Redirect::to("/jobs").into_response());
    }

    let page = state.pages.render(
        "login",
        &json!({
            "title": "Log in",
            "error": params.error.is_some(),
            "logout": params.logout.is_some(),
        }),
    )?;

    Ok(page.into_response())
}

/// Check the admin credential and start a session
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    let token = match state.auth.login(&form.username, &form.password).await {
        Ok(token) => token,
        Err(e) => {
            tracing::debug!(error = %e, "Login failed");
            return Ok((jar, Redirect::to("/login?error")));
        }
    };

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(state.settings.environment == "production");

    Ok((jar.add(cookie), Redirect::to("/jobs")))
}

/// End the session
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to("/login?logout"))
}
