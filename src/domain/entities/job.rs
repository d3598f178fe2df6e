//! Job entity and repository trait.
//!
//! Maps to the `jobs` table in the database schema. A job is always loaded
//! together with its owning company.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::Company;
use crate::domain::value_objects::JobStatus;
use crate::shared::error::AppError;

/// Number of jobs returned by the "recent jobs" listing.
pub const RECENT_JOBS_LIMIT: i64 = 20;

/// Represents a job posting.
///
/// Maps to the `jobs` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - title: VARCHAR(255) NOT NULL
/// - description: TEXT NOT NULL
/// - location: VARCHAR(255) NULL
/// - tags: TEXT NULL
/// - status: VARCHAR(16) NOT NULL DEFAULT 'DRAFT'
/// - company_id: BIGINT NOT NULL REFERENCES companies(id)
/// - created_at: TIMESTAMPTZ NOT NULL
/// - updated_at: TIMESTAMPTZ NOT NULL
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: i64,

    pub title: String,

    pub description: String,

    pub location: Option<String>,

    /// Free-text tags, e.g. "rust, remote"
    pub tags: Option<String>,

    pub status: JobStatus,

    /// Owning company (required)
    pub company: Company,

    /// Set once, when the job is first saved
    pub created_at: DateTime<Utc>,

    /// Set on every save
    pub updated_at: DateTime<Utc>,
}

/// A job that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub tags: Option<String>,
    pub status: JobStatus,
    pub company_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Repository trait for Job data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a job and return it with its company attached.
    async fn create(&self, job: &NewJob) -> Result<Job, AppError>;

    /// Overwrite the mutable columns of an existing job.
    async fn update(&self, job: &Job) -> Result<Job, AppError>;

    /// Find a job by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Job>, AppError>;

    /// Delete a job. Deleting a missing job is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Newest jobs first, at most `limit`.
    async fn most_recent(&self, limit: i64) -> Result<Vec<Job>, AppError>;

    /// Jobs whose title contains `title` OR whose company name contains
    /// `company_name`, both case-insensitive. Newest first, unbounded.
    async fn search_by_title_or_company_name(
        &self,
        title: &str,
        company_name: &str,
    ) -> Result<Vec<Job>, AppError>;
}
