//! Application entity and repository trait.
//!
//! Maps to the `applications` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::error::AppError;

/// An applicant's submission for a job.
///
/// Maps to the `applications` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - job_id: BIGINT NOT NULL REFERENCES jobs(id) ON DELETE CASCADE
/// - applicant_name: VARCHAR(255) NOT NULL
/// - applicant_email: VARCHAR(255) NOT NULL
/// - cover_letter: TEXT NULL
/// - resume_url: VARCHAR(500) NULL
/// - created_at: TIMESTAMPTZ NOT NULL
/// - UNIQUE (job_id, applicant_email)
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub applicant_name: String,
    pub applicant_email: String,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An application that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub job_id: i64,
    pub applicant_name: String,
    pub applicant_email: String,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Repository trait for Application data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Insert an application. A second application for the same
    /// (job, email) pair yields `AppError::Conflict`.
    async fn create(&self, application: &NewApplication) -> Result<Application, AppError>;

    /// Applications for a job, newest first.
    async fn find_by_job(&self, job_id: i64) -> Result<Vec<Application>, AppError>;

    /// Whether `email` has already applied to the job.
    async fn exists_by_job_and_email(&self, job_id: i64, email: &str) -> Result<bool, AppError>;
}
