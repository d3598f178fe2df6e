//! Job Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{
    CreateJobRequest, SearchQueryParams, UpdateJobRequest, UpdateJobStatusRequest,
};
use crate::application::dto::response::JobResponse;
use crate::application::services::{CreateJobDto, UpdateJobDto};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::shared::validation::parse_id;
use crate::startup::AppState;

/// List recent jobs, or search by title / company name with `?q=`
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<Vec<JobResponse>>, AppError> {
    let jobs = state.jobs.search(params.q.as_deref()).await?;

    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

/// Get job by ID
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobResponse>, AppError> {
    let job_id = parse_id(&job_id, "job")?;

    let job = state
        .jobs
        .find_by_id(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".into()))?;

    Ok(Json(JobResponse::from(job)))
}

/// Create a job under an existing company
pub async fn create_job(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateJobRequest>,
) -> Result<Json<JobResponse>, AppError> {
    let job = state
        .jobs
        .create(CreateJobDto {
            title: body.title,
            description: body.description,
            location: body.location,
            tags: body.tags,
            company_id: body.company_id,
            status: body.status,
        })
        .await?;

    Ok(Json(JobResponse::from(job)))
}

/// Replace a job's editable fields
pub async fn update_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateJobRequest>,
) -> Result<Json<JobResponse>, AppError> {
    let job_id = parse_id(&job_id, "job")?;

    let job = state
        .jobs
        .update(
            job_id,
            UpdateJobDto {
                title: body.title,
                description: body.description,
                location: body.location,
                tags: body.tags,
                status: body.status,
            },
        )
        .await?;

    Ok(Json(JobResponse::from(job)))
}

/// Publish or unpublish a job
pub async fn update_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateJobStatusRequest>,
) -> Result<Json<JobResponse>, AppError> {
    let job_id = parse_id(&job_id, "job")?;

    let job = state.jobs.update_status(job_id, body.status).await?;

    Ok(Json(JobResponse::from(job)))
}

/// Delete a job. Succeeds whether or not the job existed.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let job_id = parse_id(&job_id, "job")?;

    state.jobs.delete(job_id).await?;

    Ok(StatusCode::OK)
}
