//! Application Service
//!
//! Submitting and querying job applications.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Application, ApplicationRepository, JobRepository, NewApplication};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Application service trait
#[async_trait]
pub trait ApplicationService: Send + Sync {
    /// Apply to a job; one application per (job, email)
    async fn submit(&self, request: SubmitApplicationDto) -> Result<Application, ApplicationError>;

    /// Applications for a job, newest first
    async fn list_for_job(&self, job_id: i64) -> Result<Vec<Application>, ApplicationError>;

    /// Whether `email` already applied to the job
    async fn has_applied(&self, job_id: i64, email: &str) -> Result<bool, ApplicationError>;
}

/// Submit application request
#[derive(Debug, Clone)]
pub struct SubmitApplicationDto {
    pub job_id: i64,
    pub applicant_name: String,
    pub applicant_email: String,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
}

/// Application service errors
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Job not found")]
    JobNotFound,

    #[error("You have already applied for this job")]
    AlreadyApplied,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for ApplicationError {
    fn from(e: AppError) -> Self {
        ApplicationError::Internal(e.to_string())
    }
}

impl From<ApplicationError> for AppError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::JobNotFound => AppError::NotFound("Job not found".into()),
            ApplicationError::AlreadyApplied => AppError::Conflict(e.to_string()),
            ApplicationError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// ApplicationService implementation
pub struct ApplicationServiceImpl<A, J>
where
    A: ApplicationRepository,
    J: JobRepository,
{
    application_repo: Arc<A>,
    job_repo: Arc<J>,
}

impl<A, J> ApplicationServiceImpl<A, J>
where
    A: ApplicationRepository,
    J: JobRepository,
{
    pub fn new(application_repo: Arc<A>, job_repo: Arc<J>) -> Self {
        Self {
            application_repo,
            job_repo,
        }
    }
}

#[async_trait]
impl<A, J> ApplicationService for ApplicationServiceImpl<A, J>
where
    A: ApplicationRepository + 'static,
    J: JobRepository + 'static,
{
    async fn submit(&self, request: SubmitApplicationDto) -> Result<Application, ApplicationError> {
        let job = match self.job_repo.find_by_id(request.job_id).await? {
            Some(job) => job,
            None => {
                metrics::record_application("job_not_found");
                return Err(ApplicationError::JobNotFound);
            }
        };

        let already_applied = self
            .application_repo
            .exists_by_job_and_email(job.id, &request.applicant_email)
            .await?;
        if already_applied {
            metrics::record_application("duplicate");
            return Err(ApplicationError::AlreadyApplied);
        }

        let application = NewApplication {
            job_id: job.id,
            applicant_name: request.applicant_name,
            applicant_email: request.applicant_email,
            cover_letter: request.cover_letter,
            resume_url: request.resume_url,
            created_at: Utc::now(),
        };

        // The store's uniqueness constraint catches a concurrent duplicate
        // that slipped past the check above.
        let created = self
            .application_repo
            .create(&application)
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => {
                    metrics::record_application("duplicate");
                    ApplicationError::AlreadyApplied
                }
                AppError::NotFound(_) => ApplicationError::JobNotFound,
                e => ApplicationError::from(e),
            })?;

        metrics::record_application("accepted");
        tracing::info!(application_id = created.id, job_id = job.id, "Application submitted");

        Ok(created)
    }

    async fn list_for_job(&self, job_id: i64) -> Result<Vec<Application>, ApplicationError> {
        Ok(self.application_repo.find_by_job(job_id).await?)
    }

    async fn has_applied(&self, job_id: i64, email: &str) -> Result<bool, ApplicationError> {
        Ok(self
            .application_repo
            .exists_by_job_and_email(job_id, email)
            .await?)
    }
}
