//! Job Application Handlers

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::application::dto::request::{CheckApplicationParams, SubmitApplicationRequest};
use crate::application::dto::response::{ApplicationResponse, HasAppliedResponse};
use crate::application::services::SubmitApplicationDto;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::shared::validation::parse_id;
use crate::startup::AppState;

/// Apply to a job
pub async fn submit_application(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SubmitApplicationRequest>,
) -> Result<Json<ApplicationResponse>, AppError> {
    let application = state
        .applications
        .submit(SubmitApplicationDto {
            job_id: body.job_id,
            applicant_name: body.applicant_name,
            applicant_email: body.applicant_email,
            cover_letter: body.cover_letter,
            resume_url: body.resume_url,
        })
        .await?;

    Ok(Json(ApplicationResponse::from(application)))
}

/// Applications for a job, newest first
pub async fn list_for_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Vec<ApplicationResponse>>, AppError> {
    let job_id = parse_id(&job_id, "job")?;

    let applications = state.applications.list_for_job(job_id).await?;

    Ok(Json(
        applications
            .into_iter()
            .map(ApplicationResponse::from)
            .collect(),
    ))
}

/// Whether an email has already applied to a job
pub async fn check_application(
    State(state): State<AppState>,
    params: Result<Query<CheckApplicationParams>, QueryRejection>,
) -> Result<Json<HasAppliedResponse>, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let has_applied = state
        .applications
        .has_applied(params.job_id, &params.email)
        .await?;

    Ok(Json(HasAppliedResponse { has_applied }))
}
