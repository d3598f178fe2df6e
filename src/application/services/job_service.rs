//! Job Service
//!
//! Listing, search and lifecycle of job postings.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    CompanyRepository, Job, JobRepository, JobStatus, NewJob, RECENT_JOBS_LIMIT,
};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::shared::validation::non_blank;

/// Job service trait
#[async_trait]
pub trait JobService: Send + Sync {
    /// Newest jobs, at most 20
    async fn recent(&self) -> Result<Vec<Job>, JobError>;

    /// Search by title or company name; a blank query lists recent jobs
    async fn search(&self, query: Option<&str>) -> Result<Vec<Job>, JobError>;

    /// Get job by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Job>, JobError>;

    /// Create a job under an existing company
    async fn create(&self, request: CreateJobDto) -> Result<Job, JobError>;

    /// Replace a job's editable fields
    async fn update(&self, id: i64, update: UpdateJobDto) -> Result<Job, JobError>;

    /// Change only the status
    async fn update_status(&self, id: i64, status: JobStatus) -> Result<Job, JobError>;

    /// Delete a job; missing jobs are ignored
    async fn delete(&self, id: i64) -> Result<(), JobError>;
}

/// Create job request
#[derive(Debug, Clone)]
pub struct CreateJobDto {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub tags: Option<String>,
    pub company_id: i64,
    pub status: Option<JobStatus>,
}

/// Update job request. Every field but `status` is overwritten.
#[derive(Debug, Clone)]
pub struct UpdateJobDto {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub tags: Option<String>,
    pub status: Option<JobStatus>,
}

/// Job service errors
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("Job not found")]
    NotFound,

    #[error("Company not found")]
    CompanyNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for JobError {
    fn from(e: AppError) -> Self {
        JobError::Internal(e.to_string())
    }
}

impl From<JobError> for AppError {
    fn from(e: JobError) -> Self {
        match e {
            JobError::NotFound => AppError::NotFound("Job not found".into()),
            JobError::CompanyNotFound => AppError::NotFound("Company not found".into()),
            JobError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// JobService implementation
pub struct JobServiceImpl<J, C>
where
    J: JobRepository,
    C: CompanyRepository,
{
    job_repo: Arc<J>,
    company_repo: Arc<C>,
}

impl<J, C> JobServiceImpl<J, C>
where
    J: JobRepository,
    C: CompanyRepository,
{
    pub fn new(job_repo: Arc<J>, company_repo: Arc<C>) -> Self {
        Self {
            job_repo,
            company_repo,
        }
    }

    async fn existing(&self, id: i64) -> Result<Job, JobError> {
        self.job_repo.find_by_id(id).await?.ok_or(JobError::NotFound)
    }
}

#[async_trait]
impl<J, C> JobService for JobServiceImpl<J, C>
where
    J: JobRepository + 'static,
    C: CompanyRepository + 'static,
{
    async fn recent(&self) -> Result<Vec<Job>, JobError> {
        Ok(self.job_repo.most_recent(RECENT_JOBS_LIMIT).await?)
    }

    async fn search(&self, query: Option<&str>) -> Result<Vec<Job>, JobError> {
        match non_blank(query) {
            None => self.recent().await,
            Some(text) => Ok(self
                .job_repo
                .search_by_title_or_company_name(text, text)
                .await?),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Job>, JobError> {
        Ok(self.job_repo.find_by_id(id).await?)
    }

    async fn create(&self, request: CreateJobDto) -> Result<Job, JobError> {
        let company = self
            .company_repo
            .find_by_id(request.company_id)
            .await?
            .ok_or(JobError::CompanyNotFound)?;

        let now = Utc::now();
        let job = NewJob {
            title: request.title,
            description: request.description,
            location: request.location,
            tags: request.tags,
            status: request.status.unwrap_or_default(),
            company_id: company.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.job_repo.create(&job).await.map_err(|e| match e {
            AppError::NotFound(_) => JobError::CompanyNotFound,
            e => JobError::from(e),
        })?;

        metrics::record_job_created();
        tracing::info!(job_id = created.id, company_id = company.id, "Job created");

        Ok(created)
    }

    async fn update(&self, id: i64, update: UpdateJobDto) -> Result<Job, JobError> {
        let mut job = self.existing(id).await?;

        job.title = update.title;
        job.description = update.description;
        job.location = update.location;
        job.tags = update.tags;
        if let Some(status) = update.status {
            job.status = status;
        }
        job.updated_at = Utc::now();

        let updated = self.job_repo.update(&job).await.map_err(|e| match e {
            AppError::NotFound(_) => JobError::NotFound,
            e => JobError::from(e),
        })?;

        tracing::info!(job_id = id, status = %updated.status, "Job updated");

        Ok(updated)
    }

    async fn update_status(&self, id: i64, status: JobStatus) -> Result<Job, JobError> {
        let mut job = self.existing(id).await?;

        job.status = status;
        job.updated_at = Utc::now();

        let updated = self.job_repo.update(&job).await.map_err(|e| match e {
            AppError::NotFound(_) => JobError::NotFound,
            e => JobError::from(e),
        })?;

        tracing::info!(job_id = id, status = %status, "Job status changed");

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), JobError> {
        self.job_repo.delete_by_id(id).await?;
        tracing::info!(job_id = id, "Job deleted");
        Ok(())
    }
}
